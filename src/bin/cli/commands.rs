//! The interactive session loop for the shell.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tarsh::{ActionKind, Archive, AuditLog, AuditSink, Error, Navigator, Result, copy_out};

use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::output;

/// Configuration for an interactive session.
pub struct SessionConfig<'a> {
    pub archive_path: &'a Path,
    pub hostname: &'a str,
    pub log_file: &'a Path,
}

/// Opens the archive and runs the shell until `exit` or end of input.
pub fn run(config: &SessionConfig<'_>) -> ExitCode {
    let archive = match Archive::open_path(config.archive_path) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };

    let mut session = Session {
        archive,
        navigator: Navigator::new(),
        audit: AuditLog::new(config.log_file),
        hostname: config.hostname.to_string(),
    };

    let stdin = io::stdin();
    match session.run(&mut stdin.lock()) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {}", e);
            error_to_exit_code(&e)
        }
    }
}

/// One shell session over an open archive.
///
/// Generic over the audit sink so the loop can be driven in tests with
/// [`MemoryAudit`](tarsh::MemoryAudit) instead of a log file.
struct Session<A: AuditSink> {
    archive: Archive,
    navigator: Navigator,
    audit: A,
    hostname: String,
}

impl<A: AuditSink> Session<A> {
    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// Command failures are reported on stdout and the loop continues; only
    /// prompt and input I/O failures and a failed final log write end the
    /// session with an error.
    fn run(&mut self, input: &mut impl BufRead) -> Result<()> {
        loop {
            print!("{}:{}> ", self.hostname, self.navigator.cursor());
            io::stdout().flush().map_err(Error::Io)?;

            let mut line = String::new();
            if input.read_line(&mut line).map_err(Error::Io)? == 0 {
                // End of input closes the session like `exit`.
                self.audit
                    .record(ActionKind::Exit, "User exited the session".to_string())?;
                return Ok(());
            }

            if !self.dispatch(&line)? {
                return Ok(());
            }
        }
    }

    /// Executes one input line. Returns `Ok(false)` when the session ends.
    fn dispatch(&mut self, line: &str) -> Result<bool> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            // Blank lines are skipped without a log record.
            return Ok(true);
        };

        match command {
            "ls" => {
                match self.navigator.ls(self.archive.index(), &mut self.audit, tokens.next()) {
                    Ok(names) => output::print_listing(&names),
                    Err(e) => println!("{}", output::failure_message(ActionKind::Ls, &e)),
                }
            }
            "cd" => {
                match self.navigator.cd(self.archive.index(), &mut self.audit, tokens.next()) {
                    Ok(()) => println!("Changed directory to {}", self.navigator.cursor()),
                    Err(e) => println!("{}", output::failure_message(ActionKind::Cd, &e)),
                }
            }
            "find" => match tokens.next() {
                Some(pattern) => {
                    match self.navigator.find(self.archive.index(), &mut self.audit, pattern) {
                        Ok(matches) => output::print_matches(&matches, pattern),
                        Err(e) => println!("{}", output::failure_message(ActionKind::Find, &e)),
                    }
                }
                None => {
                    self.note(ActionKind::Find, "Missing search term");
                    println!("Usage: find <substring>");
                }
            },
            "cp" => match (tokens.next(), tokens.next()) {
                (Some(source), Some(destination)) => {
                    match copy_out(
                        &self.archive,
                        self.navigator.cursor(),
                        &mut self.audit,
                        source,
                        destination,
                    ) {
                        Ok(_) => println!("File copied from {} to {}", source, destination),
                        Err(e) => println!("{}", output::failure_message(ActionKind::Cp, &e)),
                    }
                }
                _ => {
                    self.note(ActionKind::Cp, "Missing source or destination");
                    println!("Usage: cp <source> <destination>");
                }
            },
            "exit" => {
                self.audit
                    .record(ActionKind::Exit, "User exited the session".to_string())?;
                return Ok(false);
            }
            _ => {
                self.note(ActionKind::UnknownCommand, format!("Command: {}", command));
                println!("Unknown command: {}", command);
            }
        }

        Ok(true)
    }

    /// Records an action handled by the loop itself, reporting a failed log
    /// write without ending the session.
    fn note(&mut self, action: ActionKind, detail: impl Into<String>) {
        if let Err(e) = self.audit.record(action, detail.into()) {
            println!("Error: {}", e);
        }
    }
}
