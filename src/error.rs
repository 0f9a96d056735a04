//! Error types for virtual shell operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when navigating and extracting from an archive, along with
//! a convenient [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`. Only
//! [`Error::ArchiveUnreadable`] is fatal, and only at startup; every other
//! error is recovered locally by the read loop: the command prints a message,
//! writes its audit record, and control returns to the prompt.
//!
//! ```rust,no_run
//! use tarsh::{Archive, Error};
//!
//! fn open_or_report(path: &str) -> tarsh::Result<Archive> {
//!     match Archive::open_path(path) {
//!         Ok(archive) => Ok(archive),
//!         Err(Error::ArchiveUnreadable(reason)) => {
//!             eprintln!("Cannot read archive: {}", reason);
//!             Err(Error::ArchiveUnreadable(reason))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::io;

/// The main error type for virtual shell operations.
///
/// Each variant carries the context a caller needs to print a user-facing
/// message and write an audit record. Variants that reference a path carry
/// it in display form (canonical string for virtual paths, the literal
/// argument text where the contract calls for it).
///
/// # Error Categories
///
/// | Category | Variants | Recovery |
/// |----------|----------|----------|
/// | Startup | [`ArchiveUnreadable`][Self::ArchiveUnreadable] | Fatal, no session begins |
/// | Navigation | [`NotFound`][Self::NotFound], [`NotADirectory`][Self::NotADirectory], [`AtRoot`][Self::AtRoot] | Cursor unchanged, loop continues |
/// | Extraction | [`IsADirectory`][Self::IsADirectory], [`DestinationExists`][Self::DestinationExists] | Destination untouched, loop continues |
/// | Ambient | [`Io`][Self::Io] | Loop continues |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The archive could not be opened or iterated.
    ///
    /// This is the only startup-fatal condition: it is surfaced before any
    /// session begins and no prompt is ever shown. Causes include a missing
    /// or unreadable file, truncated or malformed tar data, and compression
    /// the current build does not support.
    ///
    /// The string describes what went wrong.
    #[error("cannot read archive: {0}")]
    ArchiveUnreadable(String),

    /// No entry exists at the resolved path.
    ///
    /// Returned by `cd` for targets without an index entry (including
    /// implicit directories, which are listable but not navigable) and by
    /// `cp` for missing sources. The cursor is never changed by a failed
    /// `cd`.
    #[error("no such entry: {0}")]
    NotFound(String),

    /// The resolved path names a file where a directory is required.
    ///
    /// Returned by `cd` when the target entry exists with kind File.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// The resolved path names a directory where a file is required.
    ///
    /// Returned by `cp` when the source entry exists with kind Directory.
    /// Directory copy-out is not supported.
    #[error("is a directory: {0}")]
    IsADirectory(String),

    /// `".."` was resolved while the cursor is already at the root.
    ///
    /// Moving above the root is a failure, not a silent clamp: the cursor
    /// stays put and the failure is logged.
    #[error("already at the root directory")]
    AtRoot,

    /// The copy destination already exists on the real filesystem.
    ///
    /// `cp` never overwrites; the existing file keeps its original bytes.
    #[error("destination already exists: {0}")]
    DestinationExists(String),

    /// An I/O error occurred during file operations.
    ///
    /// This wraps [`std::io::Error`] from destination writes, mid-copy
    /// stream failures, and audit log persistence.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns `true` if this error terminates startup.
    ///
    /// Only [`Error::ArchiveUnreadable`] is fatal; every other variant is
    /// recovered by the read loop without ending the session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ArchiveUnreadable(_))
    }

    /// Returns the path associated with this error, if any.
    ///
    /// Useful when a caller wants to report which path failed without
    /// matching every variant.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::NotFound(path)
            | Error::NotADirectory(path)
            | Error::IsADirectory(path)
            | Error::DestinationExists(path) => Some(path.as_str()),
            _ => None,
        }
    }

    /// Creates an `ArchiveUnreadable` error with a reason.
    ///
    /// This is a convenience constructor for the scan path, where failures
    /// from several sources all collapse into the single fatal variant.
    pub fn unreadable(reason: impl Into<String>) -> Self {
        Error::ArchiveUnreadable(reason.into())
    }
}

/// A specialized Result type for virtual shell operations.
///
/// This is defined as `std::result::Result<T, Error>` for convenience.
///
/// # Example
///
/// ```rust
/// use tarsh::Result;
///
/// fn my_function() -> Result<()> {
///     // Operations that may fail...
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
