//! Archive entry metadata.

use crate::VirtualPath;

/// The kind of an archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file with content bytes.
    File,
    /// A directory.
    Directory,
}

/// One archive member, as recorded in the index.
///
/// An `Entry` carries metadata only; content bytes stay in the archive and
/// are streamed on demand through [`Archive::entry_reader`], which is what
/// makes `cp` lazy.
///
/// [`Archive::entry_reader`]: crate::Archive::entry_reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The canonical path within the archive.
    pub path: VirtualPath,
    /// Whether this entry is a file or a directory.
    pub kind: EntryKind,
    /// Content size in bytes. Meaningful only for files; directories
    /// record 0.
    pub size: u64,
    /// The content handle: byte offset of this entry's data within the
    /// decompressed tar stream. Valid for the whole session because the
    /// index is built once and the archive is never rewritten.
    pub data_offset: u64,
}

impl Entry {
    /// Returns the file name (last component of the path).
    pub fn name(&self) -> &str {
        self.path.file_name()
    }

    /// Returns true if this is a file (not a directory).
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns true if this is a directory.
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(path: &str, kind: EntryKind) -> Entry {
        Entry {
            path: VirtualPath::new(path),
            kind,
            size: 0,
            data_offset: 0,
        }
    }

    #[test]
    fn test_file_entry() {
        let entry = make_entry("dir/file.txt", EntryKind::File);
        assert!(entry.is_file());
        assert!(!entry.is_directory());
        assert_eq!(entry.name(), "file.txt");
    }

    #[test]
    fn test_directory_entry() {
        let entry = make_entry("dir1", EntryKind::Directory);
        assert!(entry.is_directory());
        assert!(!entry.is_file());
        assert_eq!(entry.name(), "dir1");
    }

    #[test]
    fn test_path_is_normalized() {
        let entry = make_entry("dir1/subdir1/", EntryKind::Directory);
        assert_eq!(entry.path.as_str(), "dir1/subdir1");
    }
}
