//! Fuzz target for VirtualPath normalization and resolution.
//!
//! This target exercises path normalization with arbitrary string input and
//! checks the canonical-form invariants every archive lookup depends on.
//!
//! Run with: cargo +nightly fuzz run virtual_path
//!
//! Key properties being tested:
//! - Normalization never panics and is idempotent
//! - The canonical form has no backslashes, no leading or trailing slash,
//!   and no empty or `.` segments
//! - Resolution of `..` agrees with `parent`

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let path = tarsh::VirtualPath::new(input);
        let normalized = path.as_str();

        // Canonical form invariants
        assert!(
            !normalized.starts_with('/') && !normalized.ends_with('/'),
            "separator at the edge of normalized path: {:?}",
            normalized
        );
        assert!(
            !normalized.contains('\\'),
            "backslash survived normalization: {:?}",
            normalized
        );
        if !normalized.is_empty() {
            assert!(
                normalized.split('/').all(|seg| !seg.is_empty() && seg != "."),
                "empty or dot segment in normalized path: {:?}",
                normalized
            );
        }

        // Normalizing the canonical form must be a no-op
        let again = tarsh::VirtualPath::new(normalized);
        assert_eq!(again, path, "normalization is not idempotent for {:?}", input);

        // `..` resolution agrees with parent()
        match path.resolve(Some("..")) {
            Ok(parent) => assert_eq!(Some(parent), path.parent()),
            Err(_) => assert!(path.is_root()),
        }
    }
});
