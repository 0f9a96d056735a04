//! Session cursor and the read-only navigation commands.
//!
//! A [`Navigator`] owns the current path of one interactive session and
//! implements `ls`, `cd`, and `find` as queries against an [`Index`].
//! Every call emits exactly one audit record, on success and on failure
//! alike.

use crate::audit::{ActionKind, AuditSink};
use crate::index::Index;
use crate::virtual_path::VirtualPath;
use crate::{Error, Result};

/// Cursor state and navigation commands for one session.
///
/// The cursor starts at the archive root and is mutated only by
/// [`cd`](Self::cd). All queries are read-only against the index.
#[derive(Debug)]
pub struct Navigator {
    cursor: VirtualPath,
}

impl Navigator {
    /// Creates a navigator positioned at the archive root.
    pub fn new() -> Self {
        Self {
            cursor: VirtualPath::root(),
        }
    }

    /// Returns the current path.
    pub fn cursor(&self) -> &VirtualPath {
        &self.cursor
    }

    /// Lists the immediate children of a directory.
    ///
    /// With no argument, lists the current path. The listing contains
    /// basenames in archive insertion order, one level deep. A path with
    /// no children, including one that does not exist at all, produces
    /// an empty listing rather than an error; the resolved path is still
    /// audited.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AtRoot`] for `ls ..` at the root.
    pub fn ls<A: AuditSink>(
        &self,
        index: &Index,
        audit: &mut A,
        arg: Option<&str>,
    ) -> Result<Vec<String>> {
        let target = match self.cursor.resolve(arg) {
            Ok(path) => path,
            Err(e) => {
                audit.record(ActionKind::Ls, "Failed to move up from root".to_string())?;
                return Err(e);
            }
        };

        let names = index
            .children_of(&target)
            .map(|entry| entry.name().to_string())
            .collect();
        audit.record(ActionKind::Ls, format!("Path: {}", target))?;
        Ok(names)
    }

    /// Changes the current path.
    ///
    /// With no argument the target is the archive root. The target must
    /// exist in the index as an explicit directory entry; implicit
    /// directories (and the root itself, which has no entry) are not
    /// navigable even though `ls` lists their children. On failure the
    /// cursor is unchanged and the audit detail carries the original
    /// argument text, not the resolved path.
    ///
    /// # Errors
    ///
    /// - [`Error::AtRoot`] for `cd ..` at the root.
    /// - [`Error::NotFound`] when the target has no index entry.
    /// - [`Error::NotADirectory`] when the target entry is a file.
    pub fn cd<A: AuditSink>(
        &mut self,
        index: &Index,
        audit: &mut A,
        arg: Option<&str>,
    ) -> Result<()> {
        // `cd` with no argument targets the root
        let requested = arg.unwrap_or("/");

        let target = match self.cursor.resolve(Some(requested)) {
            Ok(path) => path,
            Err(e) => {
                audit.record(ActionKind::Cd, "Failed to move up from root".to_string())?;
                return Err(e);
            }
        };

        match index.lookup(&target) {
            Some(entry) if entry.is_directory() => {
                self.cursor = target;
                audit.record(ActionKind::Cd, format!("Path: {}", self.cursor))?;
                Ok(())
            }
            Some(_) => {
                audit.record(
                    ActionKind::Cd,
                    format!("Failed to change directory to {}", requested),
                )?;
                Err(Error::NotADirectory(requested.to_string()))
            }
            None => {
                audit.record(
                    ActionKind::Cd,
                    format!("Failed to change directory to {}", requested),
                )?;
                Err(Error::NotFound(requested.to_string()))
            }
        }
    }

    /// Searches every indexed entry for a basename containing `pattern`.
    ///
    /// The search is global, ignoring the current path, and matches by
    /// simple substring containment. The empty pattern matches every
    /// entry. Results are full paths in archive insertion order. Zero
    /// matches is a normal outcome, not an error, and is audited as
    /// such.
    pub fn find<A: AuditSink>(
        &self,
        index: &Index,
        audit: &mut A,
        pattern: &str,
    ) -> Result<Vec<String>> {
        let matches: Vec<String> = index
            .entries()
            .iter()
            .filter(|entry| entry.name().contains(pattern))
            .map(|entry| entry.path.to_string())
            .collect();

        if matches.is_empty() {
            audit.record(ActionKind::Find, format!("Search: {}, No results", pattern))?;
        } else {
            audit.record(
                ActionKind::Find,
                format!("Search: {}, Results: {}", pattern, matches.len()),
            )?;
        }
        Ok(matches)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
