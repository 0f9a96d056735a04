//! Archive opening, entry scanning, and on-demand content access.
//!
//! An [`Archive`] is opened once, scanned once to build its [`Index`],
//! and then consulted for entry bytes on demand. Nothing is extracted
//! to disk as a side effect of opening.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::entry::{Entry, EntryKind};
use crate::format::{Compression, detect_compression};
use crate::index::Index;
use crate::virtual_path::VirtualPath;
use crate::{Error, Result};

/// An opened tar archive and the index of its contents.
///
/// Opening scans the entry headers exactly once, in a single sequential
/// pass, and records for each entry the byte offset of its contents in
/// the decompressed tar stream. Entry bytes are only read again when a
/// caller asks for them through [`entry_reader`](Self::entry_reader).
///
/// # Example
///
/// ```rust,ignore
/// use tarsh::Archive;
///
/// let archive = Archive::open_path("backup.tar.gz")?;
/// for entry in archive.index().entries() {
///     println!("{}", entry.path);
/// }
/// ```
#[derive(Debug)]
pub struct Archive {
    path: PathBuf,
    compression: Compression,
    index: Index,
}

impl Archive {
    /// Opens the archive at `path` and scans its entry table.
    ///
    /// Compression (gzip, bzip2, or none) is detected from the file's
    /// magic bytes, not its extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveUnreadable`] when the file cannot be
    /// opened, is not a tar archive, or uses a compression scheme whose
    /// support was not compiled in.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::open(&path)
            .map_err(|e| Error::unreadable(format!("{}: {}", path.display(), e)))?;

        let compression = detect_compression(&mut file)?;
        log::debug!(
            "opening '{}' (compression: {})",
            path.display(),
            compression
        );

        let index = scan(compression.wrap(file)?)?;
        log::info!(
            "indexed {} entries from '{}'",
            index.len(),
            path.display()
        );

        Ok(Self {
            path,
            compression,
            index,
        })
    }

    /// Returns the index built when the archive was opened.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Returns the filesystem path the archive was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the compression scheme detected at open time.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Opens a reader over the raw bytes of `entry`.
    ///
    /// The reader yields exactly `entry.size` bytes, streamed from the
    /// archive file without materializing them in memory. For plain tar
    /// this seeks straight to the entry data; for compressed archives
    /// the stream is decoded from the start and the bytes before the
    /// entry are discarded.
    ///
    /// `entry` must come from this archive's [`index`](Self::index).
    /// Directory entries yield an empty reader.
    pub fn entry_reader(&self, entry: &Entry) -> Result<Box<dyn Read>> {
        let mut file = File::open(&self.path).map_err(Error::Io)?;

        match self.compression {
            Compression::None => {
                file.seek(SeekFrom::Start(entry.data_offset))
                    .map_err(Error::Io)?;
                Ok(Box::new(file.take(entry.size)))
            }
            _ => {
                let mut reader = self.compression.wrap(file)?;
                let skipped = io::copy(
                    &mut reader.by_ref().take(entry.data_offset),
                    &mut io::sink(),
                )
                .map_err(Error::Io)?;
                if skipped < entry.data_offset {
                    return Err(Error::Io(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("archive ends before contents of '{}'", entry.path),
                    )));
                }
                Ok(Box::new(reader.take(entry.size)))
            }
        }
    }
}

/// Scans a tar stream and builds the entry index.
///
/// Entry names are normalized through [`VirtualPath`], so `./dir1/` and
/// `dir1` land on the same key. Entries whose name normalizes to the
/// root (`.`, `./`) describe the root itself and are skipped.
fn scan<R: Read>(reader: R) -> Result<Index> {
    let mut tar = tar::Archive::new(reader);
    let entries = tar
        .entries()
        .map_err(|e| Error::unreadable(format!("invalid tar data: {}", e)))?;

    let mut scanned = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::unreadable(format!("invalid tar data: {}", e)))?;

        let raw_name = entry.path_bytes();
        if std::str::from_utf8(&raw_name).is_err() {
            log::warn!(
                "entry name is not valid UTF-8, indexing lossy form: {}",
                String::from_utf8_lossy(&raw_name)
            );
        }
        let name = String::from_utf8_lossy(&raw_name);
        let path = VirtualPath::new(&*name);
        if path.is_root() {
            continue;
        }

        // Anything that is not a directory is treated as file content;
        // link entries keep whatever size their header declares.
        let kind = if entry.header().entry_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        scanned.push(Entry {
            path,
            kind,
            size: entry.size(),
            data_offset: entry.raw_file_position(),
        });
    }

    Ok(Index::build(scanned))
}
