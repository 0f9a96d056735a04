//! Compression detection for archive inputs.
//!
//! Archives may be plain tar or a tar stream wrapped in gzip or bzip2.
//! Detection is based on magic bytes at the start of the file, so it
//! works regardless of the file extension.

use std::io::{Read, Seek, SeekFrom};

use crate::{Error, Result};

/// Compression applied to a tar archive stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Plain uncompressed tar.
    None,
    /// gzip wrapped tar (`.tar.gz`, `.tgz`).
    Gzip,
    /// bzip2 wrapped tar (`.tar.bz2`, `.tbz2`).
    Bzip2,
}

impl Compression {
    /// Returns a human-readable name for this compression scheme.
    pub fn name(&self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Gzip => "gzip",
            Compression::Bzip2 => "bzip2",
        }
    }

    /// Returns whether support for this scheme is compiled in.
    ///
    /// Plain tar is always available; gzip and bzip2 depend on the
    /// `gzip` and `bzip2` cargo features.
    pub fn is_enabled(&self) -> bool {
        match self {
            Compression::None => true,
            Compression::Gzip => cfg!(feature = "gzip"),
            Compression::Bzip2 => cfg!(feature = "bzip2"),
        }
    }

    /// Wraps a raw archive reader in the decoder for this scheme.
    ///
    /// The returned reader yields the decompressed tar stream. Byte
    /// offsets recorded while scanning that stream are only meaningful
    /// against another reader produced by this method.
    pub fn wrap<R: Read + 'static>(self, reader: R) -> Result<Box<dyn Read>> {
        match self {
            Compression::None => Ok(Box::new(reader)),
            #[cfg(feature = "gzip")]
            Compression::Gzip => Ok(Box::new(flate2::read::GzDecoder::new(reader))),
            #[cfg(not(feature = "gzip"))]
            Compression::Gzip => Err(Error::unreadable(
                "gzip support is not enabled; rebuild with the `gzip` feature",
            )),
            #[cfg(feature = "bzip2")]
            Compression::Bzip2 => Ok(Box::new(bzip2::read::BzDecoder::new(reader))),
            #[cfg(not(feature = "bzip2"))]
            Compression::Bzip2 => Err(Error::unreadable(
                "bzip2 support is not enabled; rebuild with the `bzip2` feature",
            )),
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Known compression signatures.
///
/// Each entry is (signature bytes, compression scheme).
const SIGNATURES: &[(&[u8], Compression)] = &[
    // gzip: 0x1F 0x8B
    (&[0x1F, 0x8B], Compression::Gzip),
    // bzip2: 'B' 'Z' 'h'
    (&[0x42, 0x5A, 0x68], Compression::Bzip2),
];

/// Detects the compression scheme of an archive by examining magic bytes.
///
/// The reader position is restored before returning. Input that matches
/// no known signature is treated as plain tar; genuinely malformed input
/// surfaces later, when the tar stream is scanned.
///
/// # Example
///
/// ```rust,ignore
/// use std::fs::File;
/// use tarsh::format::detect_compression;
///
/// let mut file = File::open("backup.tar.gz")?;
/// let compression = detect_compression(&mut file)?;
/// println!("compression: {compression}");
/// ```
pub fn detect_compression<R: Read + Seek>(reader: &mut R) -> Result<Compression> {
    // Save the current position
    let start_pos = reader.stream_position().map_err(Error::Io)?;

    let mut header = [0u8; 4];
    let bytes_read = reader.read(&mut header).map_err(Error::Io)?;

    // Restore position
    reader.seek(SeekFrom::Start(start_pos)).map_err(Error::Io)?;

    for (signature, compression) in SIGNATURES {
        if bytes_read >= signature.len() && header.starts_with(signature) {
            return Ok(*compression);
        }
    }

    Ok(Compression::None)
}
