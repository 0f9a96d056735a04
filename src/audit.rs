//! Audit logging for shell actions.
//!
//! Every command a session executes, successful or not, produces one
//! [`AuditRecord`]. Records are delivered to an [`AuditSink`]:
//!
//! - [`AuditLog`] - Persists records as a JSON array on disk
//! - [`MemoryAudit`] - Collects records in memory (for tests and embedding)
//! - [`NullAudit`] - Discards records
//!
//! [`AuditLog`] rewrites the complete record set on every append, so the
//! file on disk is always one well-formed JSON document. The file is not
//! created until the first record is appended.
//!
//! # Custom Sinks
//!
//! ```rust,ignore
//! use tarsh::{ActionKind, AuditSink};
//!
//! struct Stderr;
//!
//! impl AuditSink for Stderr {
//!     fn record(&mut self, action: ActionKind, detail: String) -> tarsh::Result<()> {
//!         eprintln!("[{}] {}", action, detail);
//!         Ok(())
//!     }
//! }
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The kind of shell action an audit record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Directory listing.
    Ls,
    /// Cursor change.
    Cd,
    /// Name search.
    Find,
    /// Copy out of the archive.
    Cp,
    /// Session end.
    Exit,
    /// Input that matched no command.
    UnknownCommand,
}

impl ActionKind {
    /// Returns the snake_case name used in serialized records.
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Ls => "ls",
            ActionKind::Cd => "cd",
            ActionKind::Find => "find",
            ActionKind::Cp => "cp",
            ActionKind::Exit => "exit",
            ActionKind::UnknownCommand => "unknown_command",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One audited action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the action ran, in UTC.
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    /// What kind of action it was.
    pub action: ActionKind,
    /// Human-readable outcome, e.g. `Path: dir1/subdir1`.
    pub detail: String,
}

impl AuditRecord {
    /// Creates a record stamped with the current UTC time.
    pub fn now(action: ActionKind, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            detail: detail.into(),
        }
    }
}

/// Timestamps serialize as `YYYY-MM-DD HH:MM:SS` rather than RFC 3339.
mod timestamp_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .map(|dt| dt.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

/// Trait for audit record sinks.
///
/// A sink receives exactly one record per executed command, including
/// commands that failed. Implementations decide how records are kept.
pub trait AuditSink {
    /// Appends one record for an executed action.
    fn record(&mut self, action: ActionKind, detail: String) -> Result<()>;
}

/// Audit sink that persists records to a JSON file.
///
/// The complete record set is rewritten on every append. Records from
/// earlier sessions against the same file are replaced, not extended.
///
/// # Example
///
/// ```rust,ignore
/// use tarsh::{ActionKind, AuditLog, AuditSink};
///
/// let mut audit = AuditLog::new("audit.json");
/// audit.record(ActionKind::Ls, "Path: dir1".to_string())?;
/// ```
#[derive(Debug)]
pub struct AuditLog {
    /// Where the JSON document is written
    path: PathBuf,
    /// Records appended during this session
    records: Vec<AuditRecord>,
}

impl AuditLog {
    /// Creates an audit log that writes to `path`.
    ///
    /// The file is not created or truncated until the first record is
    /// appended.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            records: Vec::new(),
        }
    }

    /// Returns the records appended so far in this session.
    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    /// Returns the path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the log file with the full record set.
    fn rewrite(&self) -> Result<()> {
        let file = File::create(&self.path).map_err(Error::Io)?;
        let mut writer = io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.records)
            .map_err(|e| Error::Io(e.into()))?;
        writer.flush().map_err(Error::Io)?;
        Ok(())
    }
}

impl AuditSink for AuditLog {
    fn record(&mut self, action: ActionKind, detail: String) -> Result<()> {
        log::debug!("audit: {} - {}", action, detail);
        self.records.push(AuditRecord::now(action, detail));
        self.rewrite()
    }
}

/// In-memory audit sink.
///
/// Collects records without touching the filesystem. Useful in tests
/// and when embedding a session somewhere the log is shipped elsewhere.
#[derive(Debug)]
pub struct MemoryAudit {
    records: Vec<AuditRecord>,
}

impl MemoryAudit {
    /// Creates a new memory sink.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the collected records.
    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    /// Takes ownership of the collected records.
    pub fn into_records(self) -> Vec<AuditRecord> {
        self.records
    }

    /// Returns the most recent record.
    pub fn last(&self) -> Option<&AuditRecord> {
        self.records.last()
    }

    /// Returns the number of collected records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether no records have been collected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MemoryAudit {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditSink for MemoryAudit {
    fn record(&mut self, action: ActionKind, detail: String) -> Result<()> {
        self.records.push(AuditRecord::now(action, detail));
        Ok(())
    }
}

/// Audit sink that discards every record.
#[derive(Debug)]
pub struct NullAudit {
    /// Number of records discarded
    records_discarded: usize,
}

impl NullAudit {
    /// Creates a new null sink.
    pub fn new() -> Self {
        Self {
            records_discarded: 0,
        }
    }

    /// Returns the number of records discarded.
    pub fn records_discarded(&self) -> usize {
        self.records_discarded
    }
}

impl Default for NullAudit {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditSink for NullAudit {
    fn record(&mut self, _action: ActionKind, _detail: String) -> Result<()> {
        self.records_discarded += 1;
        Ok(())
    }
}
