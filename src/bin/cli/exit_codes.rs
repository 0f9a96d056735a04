//! Exit codes for the CLI tool.

use tarsh::Error;

/// Exit code constants
pub const SUCCESS: i32 = 0;
/// Fatal error occurred
pub const FATAL_ERROR: i32 = 2;
/// Archive could not be opened or parsed
pub const BAD_ARCHIVE: i32 = 3;
/// I/O error
pub const IO_ERROR: i32 = 5;
/// Ctrl+C (128 + SIGINT)
pub const USER_INTERRUPT: i32 = 130;

/// Exit code enum for structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)] // UserInterrupt reserved for signal handling
pub enum ExitCode {
    Success,
    FatalError,
    BadArchive,
    IoError,
    UserInterrupt,
}

impl ExitCode {
    /// Returns the numeric exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::FatalError => FATAL_ERROR,
            Self::BadArchive => BAD_ARCHIVE,
            Self::IoError => IO_ERROR,
            Self::UserInterrupt => USER_INTERRUPT,
        }
    }
}

/// Converts a tarsh error to an exit code.
///
/// Only errors that escape the session loop reach this point; command
/// failures inside the loop are recovered without ending the session.
pub fn error_to_exit_code(error: &Error) -> ExitCode {
    match error {
        Error::ArchiveUnreadable(_) => ExitCode::BadArchive,
        Error::Io(_) => ExitCode::IoError,
        // Future error variants - required by #[non_exhaustive]
        _ => ExitCode::FatalError,
    }
}
