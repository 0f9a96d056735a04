//! The in-memory path index built from one archive scan.

use std::collections::HashMap;

use crate::{Entry, VirtualPath};

/// A flat mapping from canonical path to entry metadata.
///
/// Built once at startup and immutable for the rest of the session.
/// Entries keep the archive's insertion order, which is the order `ls`
/// listings and `find` results appear in; lookups go through a side table
/// for O(1) access. When an archive contains the same path twice, the
/// last occurrence wins but keeps the position of the first, matching
/// last-write-wins map insertion.
#[derive(Debug, Default)]
pub struct Index {
    entries: Vec<Entry>,
    by_path: HashMap<String, usize>,
}

impl Index {
    /// Builds an index from an already scanned entry sequence. O(n).
    ///
    /// Opening and iterating the archive itself is
    /// [`Archive::open_path`](crate::Archive::open_path)'s job; by the time
    /// entries reach this constructor nothing can fail.
    pub fn build(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut index = Index::default();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    fn insert(&mut self, entry: Entry) {
        if let Some(&slot) = self.by_path.get(entry.path.as_str()) {
            self.entries[slot] = entry;
        } else {
            self.by_path
                .insert(entry.path.as_str().to_string(), self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Returns the entry at the given canonical path, if any.
    pub fn lookup(&self, path: &VirtualPath) -> Option<&Entry> {
        self.by_path
            .get(path.as_str())
            .map(|&slot| &self.entries[slot])
    }

    /// Returns true if an entry exists at the given path.
    pub fn contains(&self, path: &VirtualPath) -> bool {
        self.by_path.contains_key(path.as_str())
    }

    /// Returns true if an explicit Directory entry exists at the given path.
    ///
    /// Implicit directories (paths that only appear as prefixes of other
    /// entries) are not directories here. That keeps the navigability
    /// asymmetry: `ls` of such a path lists its children, `cd` into it
    /// fails.
    pub fn is_directory(&self, path: &VirtualPath) -> bool {
        self.lookup(path).is_some_and(|entry| entry.is_directory())
    }

    /// Returns the entries whose parent directory is exactly `parent`,
    /// one level deep, in insertion order.
    ///
    /// A nonexistent or childless parent yields an empty sequence; the
    /// parent itself needs no entry of its own.
    pub fn children_of<'a>(
        &'a self,
        parent: &'a VirtualPath,
    ) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.path.parent().as_ref() == Some(parent))
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
