//! Canonical path type and resolution for the virtual filesystem.

use crate::{Error, Result};
use std::fmt;

/// A normalized path inside the virtual filesystem.
///
/// `VirtualPath` keeps every path in one canonical form so that index
/// lookups, the session cursor, and log output always agree:
///
/// - forward slashes only (backslashes are converted),
/// - no leading slash, no trailing slash,
/// - no empty segments (runs of separators collapse to one),
/// - the root is the empty string and displays as `/`.
///
/// Normalization is total: every input string maps to some canonical path.
/// `.` segments are dropped, so `./dir1` and `dir1` are the same path.
/// `..` is an ordinary segment name at this level (archives can contain
/// one); the `..` *operator* exists only in [`resolve`](Self::resolve),
/// where the whole argument `".."` means "parent of the current path".
///
/// # Examples
///
/// ```
/// use tarsh::VirtualPath;
///
/// let path = VirtualPath::new("dir1/subdir1/");
/// assert_eq!(path.as_str(), "dir1/subdir1");
///
/// assert!(VirtualPath::new("///").is_root());
/// assert_eq!(VirtualPath::new("a\\b//c").as_str(), "a/b/c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualPath(String);

impl VirtualPath {
    /// Returns the root path.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Creates a `VirtualPath` from a string, normalizing it.
    ///
    /// Backslashes become forward slashes, consecutive separators collapse,
    /// leading/trailing separators are stripped, and `.` segments are
    /// dropped. Archive producers write the same directory inconsistently
    /// (`dir1/`, `./dir1`); this constructor is the single place that
    /// inconsistency is erased.
    pub fn new(s: impl AsRef<str>) -> Self {
        let raw = s.as_ref();
        let mut normalized = String::with_capacity(raw.len());
        for segment in raw
            .split(['/', '\\'])
            .filter(|seg| !seg.is_empty() && *seg != ".")
        {
            if !normalized.is_empty() {
                normalized.push('/');
            }
            normalized.push_str(segment);
        }
        Self(normalized)
    }

    /// Returns `true` if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the canonical path string. Empty for the root.
    ///
    /// For user-facing output use the `Display` impl, which renders the
    /// root as `/`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins a relative fragment onto this path.
    ///
    /// The fragment is normalized like any other input, so `join("sub//x/")`
    /// and `join("sub/x")` produce the same path. Joining onto the root
    /// yields the fragment alone.
    pub fn join(&self, fragment: &str) -> Self {
        if self.is_root() {
            Self::new(fragment)
        } else {
            Self::new(format!("{}/{}", self.0, fragment))
        }
    }

    /// Returns the parent of this path.
    ///
    /// Single-segment paths have the root as their parent; the root itself
    /// has none.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => Some(Self::root()),
        }
    }

    /// Returns the final segment of this path (the basename).
    ///
    /// Empty for the root.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Returns an iterator over the path segments.
    ///
    /// Yields nothing for the root.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|seg| !seg.is_empty())
    }

    /// Resolves a user-supplied path argument against this path.
    ///
    /// This is the one resolution contract every command shares:
    ///
    /// - `None` or an empty argument resolves to this path unchanged.
    /// - Exactly `".."` resolves to the parent; at the root this fails with
    ///   [`Error::AtRoot`] rather than clamping.
    /// - An argument with a leading `/` (checked on the raw text, before
    ///   normalization) is taken from the archive root.
    /// - Anything else is joined onto this path.
    ///
    /// Embedded `..` segments are not operators and stay literal, so
    /// `"a/../b"` resolves to the literal path `a/../b`, not `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarsh::VirtualPath;
    ///
    /// let cursor = VirtualPath::new("dir1");
    /// assert_eq!(cursor.resolve(Some("subdir1")).unwrap().as_str(), "dir1/subdir1");
    /// assert_eq!(cursor.resolve(Some("/file1.txt")).unwrap().as_str(), "file1.txt");
    /// assert!(cursor.resolve(Some("..")).unwrap().is_root());
    /// assert!(VirtualPath::root().resolve(Some("..")).is_err());
    /// ```
    pub fn resolve(&self, arg: Option<&str>) -> Result<Self> {
        match arg {
            None | Some("") => Ok(self.clone()),
            Some("..") => self.parent().ok_or(Error::AtRoot),
            Some(s) if s.starts_with('/') => Ok(Self::new(s)),
            Some(s) => Ok(self.join(s)),
        }
    }
}

impl AsRef<str> for VirtualPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "/")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<&str> for VirtualPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VirtualPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
