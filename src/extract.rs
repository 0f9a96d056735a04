//! Copying single files out of the archive (`cp`).
//!
//! This is the only operation that touches the real filesystem. The
//! source is a virtual path resolved against the session cursor; the
//! destination is an ordinary filesystem path. Bytes are streamed from
//! the archive without buffering whole files in memory.
//!
//! # Example
//!
//! ```rust,ignore
//! use tarsh::{Archive, NullAudit, VirtualPath, copy_out};
//!
//! let archive = Archive::open_path("backup.tar")?;
//! let mut audit = NullAudit::new();
//! copy_out(&archive, &VirtualPath::root(), &mut audit, "file1.txt", "/tmp/out.txt")?;
//! ```

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::archive::Archive;
use crate::audit::{ActionKind, AuditSink};
use crate::virtual_path::VirtualPath;
use crate::{Error, Result};

/// Copies one archive file to a real filesystem destination.
///
/// `source` is resolved against `cursor` like any other path argument,
/// so relative names, absolute names, and `..` all work. The entry it
/// resolves to must be a file. `destination` must not exist; an existing
/// destination is never overwritten.
///
/// Returns the number of bytes written. Every outcome, including each
/// failure, emits one audit record carrying the original argument text.
///
/// # Errors
///
/// - [`Error::AtRoot`] when `source` is `".."` and the cursor is at the root.
/// - [`Error::NotFound`] when the source has no index entry.
/// - [`Error::IsADirectory`] when the source entry is a directory.
/// - [`Error::DestinationExists`] when the destination path already exists.
/// - [`Error::Io`] for destination write failures; a partially written
///   destination is removed.
pub fn copy_out<A: AuditSink>(
    archive: &Archive,
    cursor: &VirtualPath,
    audit: &mut A,
    source: &str,
    destination: &str,
) -> Result<u64> {
    let source_path = match cursor.resolve(Some(source)) {
        Ok(path) => path,
        Err(e) => {
            audit.record(
                ActionKind::Cp,
                format!("Failed to copy from {} to {}", source, destination),
            )?;
            return Err(e);
        }
    };

    let entry = match archive.index().lookup(&source_path) {
        None => {
            audit.record(
                ActionKind::Cp,
                format!("Failed to copy from {} to {}", source, destination),
            )?;
            return Err(Error::NotFound(source.to_string()));
        }
        Some(entry) if entry.is_directory() => {
            audit.record(
                ActionKind::Cp,
                format!("Failed to copy directory {} to {}", source, destination),
            )?;
            return Err(Error::IsADirectory(source.to_string()));
        }
        Some(entry) => entry,
    };

    // create_new refuses to clobber an existing destination atomically
    let mut dest_file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(Path::new(destination))
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            audit.record(
                ActionKind::Cp,
                format!("Failed to copy to {} as it already exists", destination),
            )?;
            return Err(Error::DestinationExists(destination.to_string()));
        }
        Err(e) => {
            audit.record(
                ActionKind::Cp,
                format!("Failed to copy from {} to {}", source, destination),
            )?;
            return Err(Error::Io(e));
        }
    };

    let mut reader = match archive.entry_reader(entry) {
        Ok(reader) => reader,
        Err(e) => {
            drop(dest_file);
            remove_partial(destination);
            audit.record(
                ActionKind::Cp,
                format!("Failed to copy from {} to {}", source, destination),
            )?;
            return Err(e);
        }
    };

    match io::copy(&mut reader, &mut dest_file) {
        Ok(bytes) => {
            audit.record(
                ActionKind::Cp,
                format!("Copied from {} to {}", source, destination),
            )?;
            Ok(bytes)
        }
        Err(e) => {
            drop(dest_file);
            remove_partial(destination);
            audit.record(
                ActionKind::Cp,
                format!("Failed to copy from {} to {}", source, destination),
            )?;
            Err(Error::Io(e))
        }
    }
}

/// Removes a destination that failed partway through writing.
fn remove_partial(destination: &str) {
    if let Err(e) = fs::remove_file(destination) {
        log::warn!("Failed to remove partial file '{}': {}", destination, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAudit;
    use std::io::Write;

    fn fixture_tar() -> Vec<u8> {
        let mut builder = tar::Builder::new(Vec::new());

        let mut header = tar::Header::new_ustar();
        header.set_entry_type(tar::EntryType::Directory);
        header.set_path("dir1/").unwrap();
        header.set_size(0);
        header.set_cksum();
        builder.append(&header, io::empty()).unwrap();

        for (path, contents) in [
            ("file1.txt", b"Hello World!".as_slice()),
            ("dir1/file2.txt", b"Test File in Subdir".as_slice()),
            ("dir1/data.bin", [0u8, 1, 2, 255, 254].as_slice()),
        ] {
            let mut header = tar::Header::new_ustar();
            header.set_entry_type(tar::EntryType::Regular);
            header.set_path(path).unwrap();
            header.set_size(contents.len() as u64);
            header.set_cksum();
            builder.append(&header, contents).unwrap();
        }

        builder.into_inner().unwrap()
    }

    fn fixture_archive() -> (tempfile::NamedTempFile, Archive) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&fixture_tar()).unwrap();
        file.flush().unwrap();
        let archive = Archive::open_path(file.path()).unwrap();
        (file, archive)
    }

    #[test]
    fn test_copy_file_to_destination() {
        let (_file, archive) = fixture_archive();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.txt");
        let dest_str = dest.to_str().unwrap();
        let mut audit = MemoryAudit::new();

        let bytes = copy_out(
            &archive,
            &VirtualPath::root(),
            &mut audit,
            "file1.txt",
            dest_str,
        )
        .unwrap();

        assert_eq!(bytes, 12);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "Hello World!");
        assert_eq!(
            audit.last().unwrap().detail,
            format!("Copied from file1.txt to {}", dest_str)
        );
    }

    #[test]
    fn test_copy_source_relative_to_cursor() {
        let (_file, archive) = fixture_archive();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.txt");
        let mut audit = MemoryAudit::new();

        copy_out(
            &archive,
            &VirtualPath::new("dir1"),
            &mut audit,
            "file2.txt",
            dest.to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "Test File in Subdir");
    }

    #[test]
    fn test_copy_absolute_source() {
        let (_file, archive) = fixture_archive();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.txt");
        let mut audit = MemoryAudit::new();

        copy_out(
            &archive,
            &VirtualPath::new("dir1"),
            &mut audit,
            "/file1.txt",
            dest.to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "Hello World!");
    }

    #[test]
    fn test_copy_is_byte_exact() {
        let (_file, archive) = fixture_archive();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("data.bin");
        let mut audit = MemoryAudit::new();

        copy_out(
            &archive,
            &VirtualPath::root(),
            &mut audit,
            "dir1/data.bin",
            dest.to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(fs::read(&dest).unwrap(), vec![0u8, 1, 2, 255, 254]);
    }

    #[test]
    fn test_copy_missing_source() {
        let (_file, archive) = fixture_archive();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.txt");
        let dest_str = dest.to_str().unwrap();
        let mut audit = MemoryAudit::new();

        let err = copy_out(
            &archive,
            &VirtualPath::root(),
            &mut audit,
            "ghost.txt",
            dest_str,
        )
        .unwrap_err();

        assert!(matches!(err, Error::NotFound(ref p) if p == "ghost.txt"));
        assert!(!dest.exists());
        assert_eq!(
            audit.last().unwrap().detail,
            format!("Failed to copy from ghost.txt to {}", dest_str)
        );
    }

    #[test]
    fn test_copy_directory_source() {
        let (_file, archive) = fixture_archive();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out");
        let dest_str = dest.to_str().unwrap();
        let mut audit = MemoryAudit::new();

        let err = copy_out(&archive, &VirtualPath::root(), &mut audit, "dir1", dest_str)
            .unwrap_err();

        assert!(matches!(err, Error::IsADirectory(ref p) if p == "dir1"));
        assert!(!dest.exists());
        assert_eq!(
            audit.last().unwrap().detail,
            format!("Failed to copy directory dir1 to {}", dest_str)
        );
    }

    #[test]
    fn test_copy_never_overwrites_destination() {
        let (_file, archive) = fixture_archive();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.txt");
        let dest_str = dest.to_str().unwrap();
        fs::write(&dest, "original contents").unwrap();
        let mut audit = MemoryAudit::new();

        let err = copy_out(
            &archive,
            &VirtualPath::root(),
            &mut audit,
            "file1.txt",
            dest_str,
        )
        .unwrap_err();

        assert!(matches!(err, Error::DestinationExists(ref p) if p == dest_str));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "original contents");
        assert_eq!(
            audit.last().unwrap().detail,
            format!("Failed to copy to {} as it already exists", dest_str)
        );
    }

    #[test]
    fn test_copy_parent_source_at_root() {
        let (_file, archive) = fixture_archive();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.txt");
        let mut audit = MemoryAudit::new();

        let err = copy_out(
            &archive,
            &VirtualPath::root(),
            &mut audit,
            "..",
            dest.to_str().unwrap(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::AtRoot));
        assert!(!dest.exists());
    }

    #[test]
    fn test_copy_to_missing_directory() {
        let (_file, archive) = fixture_archive();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("no_such_dir").join("out.txt");
        let mut audit = MemoryAudit::new();

        let err = copy_out(
            &archive,
            &VirtualPath::root(),
            &mut audit,
            "file1.txt",
            dest.to_str().unwrap(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(audit.len(), 1);
    }
}
