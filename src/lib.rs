//! # tarsh
//!
//! A virtual shell over tar archives with a structured audit log.
//!
//! tarsh indexes a tar archive once at startup and then answers `ls`,
//! `cd`, `find`, and `cp` against that index without extracting anything
//! to disk. The only filesystem writes are the single-file copies `cp`
//! asks for and the audit log, which receives one record for every
//! command a session executes, successful or not.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tarsh::{Archive, AuditLog, Navigator, Result, copy_out};
//!
//! fn main() -> Result<()> {
//!     let archive = Archive::open_path("backup.tar.gz")?;
//!     let mut audit = AuditLog::new("audit.json");
//!     let mut navigator = Navigator::new();
//!
//!     navigator.cd(archive.index(), &mut audit, Some("dir1"))?;
//!     for name in navigator.ls(archive.index(), &mut audit, None)? {
//!         println!("{}", name);
//!     }
//!
//!     copy_out(&archive, navigator.cursor(), &mut audit, "/file1.txt", "out.txt")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `gzip` | Yes | gzip compressed archives (`.tar.gz`, `.tgz`) |
//! | `bzip2` | Yes | bzip2 compressed archives (`.tar.bz2`, `.tbz2`) |
//! | `cli` | No | The `tarsh` interactive shell binary |
//!
//! Compression is detected from magic bytes, so file extensions do not
//! matter. To build for plain tar only:
//!
//! ```toml
//! [dependencies]
//! tarsh = { version = "0.1", default-features = false }
//! ```
//!
//! ## Audit Log
//!
//! Every command appends one [`AuditRecord`], and the complete record
//! set is rewritten to the log file after each command, so the file is
//! always one well-formed JSON document:
//!
//! ```json
//! [
//!   {
//!     "timestamp": "2024-05-17 10:30:00",
//!     "action": "cd",
//!     "detail": "Path: dir1"
//!   },
//!   {
//!     "timestamp": "2024-05-17 10:30:04",
//!     "action": "cp",
//!     "detail": "Copied from file1.txt to /tmp/out.txt"
//!   }
//! ]
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Only [`Error::ArchiveUnreadable`]
//! is fatal; every other error leaves the session usable:
//!
//! ```rust,no_run
//! use tarsh::{Archive, Error};
//!
//! fn open_archive(path: &str) -> tarsh::Result<()> {
//!     match Archive::open_path(path) {
//!         Ok(archive) => {
//!             println!("indexed {} entries", archive.index().len());
//!             Ok(())
//!         }
//!         Err(Error::ArchiveUnreadable(msg)) => {
//!             eprintln!("cannot read archive: {}", msg);
//!             Err(Error::ArchiveUnreadable(msg))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! # fn main() {}
//! ```
//!
//! ## Command-Line Shell
//!
//! Enable the `cli` feature for the interactive shell:
//!
//! ```bash
//! cargo install tarsh --features cli
//! tarsh backup.tar.gz --hostname storage01 --log-file audit.json
//! ```
//!
//! ```text
//! storage01:/> ls
//! dir1
//! file1.txt
//! storage01:/> cd dir1
//! Changed directory to dir1
//! storage01:dir1> cp /file1.txt copy.txt
//! File copied from /file1.txt to copy.txt
//! storage01:dir1> exit
//! ```
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod archive;
pub mod audit;
pub mod entry;
pub mod error;
pub mod extract;
pub mod format;
pub mod index;
pub mod navigator;
pub mod virtual_path;

pub use error::{Error, Result};
pub use virtual_path::VirtualPath;

// Re-export the archive model at the crate root for convenience
pub use archive::Archive;
pub use entry::{Entry, EntryKind};
pub use format::{Compression, detect_compression};
pub use index::Index;

// Re-export the session API at the crate root for convenience
pub use audit::{ActionKind, AuditLog, AuditRecord, AuditSink, MemoryAudit, NullAudit};
pub use extract::copy_out;
pub use navigator::Navigator;
