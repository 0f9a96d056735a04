//! Property-based tests using proptest.
//!
//! These tests verify normalization and resolution invariants of
//! `VirtualPath` using randomly generated inputs.

use proptest::prelude::*;
use tarsh::VirtualPath;

/// Strategy for path strings that are already in canonical form:
/// 1-3 segments of alphanumerics (plus `_` and `-`), joined by single
/// slashes, with no `.` or `..` segments.
fn canonical_path_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-zA-Z0-9][a-zA-Z0-9_-]{0,9}", 1..4)
        .prop_map(|parts| parts.join("/"))
}

/// Strategy for arbitrary messy input: any mix of separators, dots,
/// spaces and ordinary characters, including the empty string.
fn messy_input_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./\\\\ -]{0,40}"
}

proptest! {
    /// Canonical paths survive normalization unchanged.
    #[test]
    fn canonical_paths_round_trip(path in canonical_path_strategy()) {
        let parsed = VirtualPath::new(&path);
        prop_assert_eq!(parsed.as_str(), path.as_str());
    }

    /// Normalizing an already-normalized string is a no-op.
    #[test]
    fn normalization_is_idempotent(input in messy_input_strategy()) {
        let once = VirtualPath::new(&input);
        let twice = VirtualPath::new(once.as_str());
        prop_assert_eq!(&twice, &once, "re-normalizing '{}' changed it", input);
    }

    /// The canonical form never contains separator noise: no leading or
    /// trailing slash, no backslashes, no empty or `.` segments.
    #[test]
    fn canonical_form_has_no_separator_noise(input in messy_input_strategy()) {
        let path = VirtualPath::new(&input);
        let s = path.as_str();

        prop_assert!(!s.starts_with('/'), "'{}' normalized to '{}'", input, s);
        prop_assert!(!s.ends_with('/'), "'{}' normalized to '{}'", input, s);
        prop_assert!(!s.contains('\\'), "'{}' normalized to '{}'", input, s);
        if !s.is_empty() {
            prop_assert!(
                s.split('/').all(|seg| !seg.is_empty() && seg != "."),
                "'{}' normalized to '{}'",
                input,
                s
            );
        }
    }

    /// Joining one segment and taking the parent returns the base path.
    #[test]
    fn join_then_parent_returns_base(
        base in canonical_path_strategy(),
        segment in "[a-zA-Z0-9]{1,8}"
    ) {
        let base = VirtualPath::new(&base);
        let child = base.join(&segment);
        prop_assert_eq!(child.parent(), Some(base));
    }

    /// Resolving `..` from any non-root path yields its parent.
    #[test]
    fn resolve_dotdot_is_parent(path in canonical_path_strategy()) {
        let cursor = VirtualPath::new(&path);
        let resolved = cursor.resolve(Some(".."));
        prop_assert!(resolved.is_ok());
        prop_assert_eq!(resolved.unwrap(), cursor.parent().expect("non-root path"));
    }

    /// A leading slash makes the argument absolute: the cursor is ignored.
    #[test]
    fn resolve_absolute_ignores_cursor(
        cursor in canonical_path_strategy(),
        target in canonical_path_strategy()
    ) {
        let cursor = VirtualPath::new(&cursor);
        let absolute = format!("/{}", target);
        let resolved = cursor.resolve(Some(&absolute));
        prop_assert!(resolved.is_ok());
        prop_assert_eq!(resolved.unwrap(), VirtualPath::new(&target));
    }

    /// A relative argument appends to the cursor, same as `join`.
    #[test]
    fn resolve_relative_appends_to_cursor(
        cursor in canonical_path_strategy(),
        segment in "[a-zA-Z0-9]{1,8}"
    ) {
        let cursor = VirtualPath::new(&cursor);
        let resolved = cursor.resolve(Some(&segment));
        prop_assert!(resolved.is_ok());
        prop_assert_eq!(resolved.unwrap(), cursor.join(&segment));
    }
}
