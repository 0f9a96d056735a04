//! Output formatting for the interactive shell.
//!
//! The shell's messages mirror classic shell phrasing (`No such
//! directory: ...`) rather than the library's error `Display` strings,
//! which stay terse for embedding.

use tarsh::{ActionKind, Error};

/// Prints a directory listing, one basename per line.
///
/// An empty listing prints nothing, matching `ls` in an empty
/// directory.
pub fn print_listing(names: &[String]) {
    for name in names {
        println!("{}", name);
    }
}

/// Prints search results, one full path per line, or the no-match
/// message.
pub fn print_matches(paths: &[String], pattern: &str) {
    if paths.is_empty() {
        println!("No files found matching: {}", pattern);
    } else {
        for path in paths {
            println!("{}", path);
        }
    }
}

/// Maps a failed command to the message the shell prints for it.
///
/// The message echoes the user's original argument text, which the
/// error variants carry.
pub fn failure_message(action: ActionKind, error: &Error) -> String {
    match (action, error) {
        (_, Error::AtRoot) => "Already at the root directory".to_string(),
        (ActionKind::Cd, Error::NotFound(path) | Error::NotADirectory(path)) => {
            format!("No such directory: {}", path)
        }
        (ActionKind::Cp, Error::NotFound(path)) => {
            format!("Source file not found: {}", path)
        }
        (ActionKind::Cp, Error::IsADirectory(path)) => {
            format!("Source is a directory, not a file: {}", path)
        }
        (ActionKind::Cp, Error::DestinationExists(path)) => {
            format!("Destination already exists: {}", path)
        }
        (_, e) => format!("Error: {}", e),
    }
}
