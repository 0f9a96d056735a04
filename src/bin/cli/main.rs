//! Interactive shell CLI over tar archives.

mod commands;
mod exit_codes;
mod output;

use clap::Parser;
use std::path::PathBuf;

/// Interactive shell over a tar archive
#[derive(Parser)]
#[command(name = "tarsh")]
#[command(author, version, about = "Interactive shell over a tar archive", long_about = None)]
pub struct Cli {
    /// Archive to browse (tar, tar.gz, or tar.bz2)
    archive: PathBuf,

    /// Hostname shown in the prompt
    #[arg(long)]
    hostname: String,

    /// File the JSON audit log is written to
    #[arg(long)]
    log_file: PathBuf,
}

fn main() {
    // Set up Ctrl+C handler
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupted");
        std::process::exit(exit_codes::USER_INTERRUPT);
    })
    .ok();

    let cli = Cli::parse();

    let exit_code = commands::run(&commands::SessionConfig {
        archive_path: &cli.archive,
        hostname: &cli.hostname,
        log_file: &cli.log_file,
    });

    std::process::exit(exit_code.code());
}
