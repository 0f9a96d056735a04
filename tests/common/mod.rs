//! Shared test utilities for integration tests.
//!
//! Archive fixtures are built in memory with `tar::Builder` and written to
//! temporary files, since the library only opens archives from a path.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::io::{self, Read, Write};

use tarsh::{Archive, VirtualPath};

/// Appends a directory entry to an in-memory tar archive.
pub fn append_dir(builder: &mut tar::Builder<Vec<u8>>, name: &str) {
    let mut header = tar::Header::new_ustar();
    header.set_entry_type(tar::EntryType::Directory);
    header.set_path(name).expect("Directory name too long for ustar header");
    header.set_size(0);
    header.set_mode(0o755);
    header.set_cksum();
    builder
        .append(&header, io::empty())
        .expect("Failed to append directory entry");
}

/// Appends a regular file entry with the given contents.
pub fn append_file(builder: &mut tar::Builder<Vec<u8>>, name: &str, contents: &[u8]) {
    let mut header = tar::Header::new_ustar();
    header.set_entry_type(tar::EntryType::Regular);
    header.set_path(name).expect("File name too long for ustar header");
    header.set_size(contents.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder
        .append(&header, contents)
        .expect("Failed to append file entry");
}

/// Builds the standard walkthrough archive used across the test suite.
///
/// Layout:
///
/// ```text
/// dir1/
/// dir1/subdir1/
/// file1.txt                 "Hello World!"
/// dir1/subdir1/file2.txt    "Test File in Subdir"
/// ```
pub fn scenario_tar() -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    append_dir(&mut builder, "dir1/");
    append_dir(&mut builder, "dir1/subdir1/");
    append_file(&mut builder, "file1.txt", b"Hello World!");
    append_file(&mut builder, "dir1/subdir1/file2.txt", b"Test File in Subdir");
    builder.into_inner().expect("Failed to finish tar archive")
}

/// Writes archive bytes to a fresh temporary file.
///
/// The returned [`tempfile::TempPath`] deletes the file on drop, so callers
/// must keep it alive for as long as the archive is open: reads re-open the
/// file by path.
pub fn write_temp(bytes: &[u8]) -> tempfile::TempPath {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(bytes).expect("Failed to write archive bytes");
    file.flush().expect("Failed to flush archive bytes");
    file.into_temp_path()
}

/// Writes the scenario archive to disk and opens it.
pub fn open_scenario() -> (tempfile::TempPath, Archive) {
    let path = write_temp(&scenario_tar());
    let archive = Archive::open_path(&path).expect("Failed to open scenario archive");
    (path, archive)
}

/// Compresses archive bytes with gzip.
#[cfg(feature = "gzip")]
pub fn gzip_bytes(bytes: &[u8]) -> Vec<u8> {
    use flate2::{Compression, write::GzEncoder};

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).expect("Failed to gzip archive bytes");
    encoder.finish().expect("Failed to finish gzip stream")
}

/// Compresses archive bytes with bzip2.
#[cfg(feature = "bzip2")]
pub fn bzip2_bytes(bytes: &[u8]) -> Vec<u8> {
    use bzip2::write::BzEncoder;

    let mut encoder = BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(bytes).expect("Failed to bzip2 archive bytes");
    encoder.finish().expect("Failed to finish bzip2 stream")
}

/// Reads the full contents of one archive entry.
///
/// # Panics
///
/// Panics if the path has no entry or the entry cannot be read.
pub fn read_entry(archive: &Archive, path: &str) -> Vec<u8> {
    let entry = archive
        .index()
        .lookup(&VirtualPath::new(path))
        .unwrap_or_else(|| panic!("Entry '{}' not found in archive", path));
    let mut reader = archive
        .entry_reader(entry)
        .expect("Failed to open entry reader");
    let mut contents = Vec::new();
    reader
        .read_to_end(&mut contents)
        .expect("Failed to read entry contents");
    contents
}
