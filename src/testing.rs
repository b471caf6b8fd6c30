//! Testing utilities for pipelines.
//!
//! - **Assertions**: compare pipeline outputs with expected results
//!   ([`assert_collections_equal`], [`assert_collections_unordered_equal`],
//!   [`assert_kv_collections_equal`], [`assert_all`], [`assert_any`]).
//! - **Fixtures**: [`write_text_files`] materializes a small tree of text
//!   files for directory and line-reader tests.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fmt::Debug;
use std::fs;
use std::hash::Hash;
use std::path::Path;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections contain the same elements, ignoring order.
///
/// # Panics
///
/// Panics if the collections differ in content (ignoring order).
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
    let actual_set: HashSet<_> = actual.iter().collect();
    let expected_set: HashSet<_> = expected.iter().collect();
    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();
        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}"
        );
    }
}

/// Assert that two key-value collections are equal after sorting by key.
///
/// # Panics
///
/// Panics if the collections differ after sorting by key.
pub fn assert_kv_collections_equal<K, V>(mut actual: Vec<(K, V)>, mut expected: Vec<(K, V)>)
where
    K: Debug + Ord,
    V: Debug + PartialEq,
{
    actual.sort_by(|a, b| a.0.cmp(&b.0));
    expected.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
    for ((ak, av), (ek, ev)) in actual.iter().zip(expected.iter()) {
        assert!(
            ak == ek && av == ev,
            "Key-value mismatch:\n  Expected: ({ek:?}, {ev:?})\n  Actual: ({ak:?}, {av:?})"
        );
    }
}

/// Assert that every element matches `predicate`.
///
/// # Panics
///
/// Panics if any element fails the predicate.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(predicate(item), "Element at index {i} failed predicate: {item:?}");
    }
}

/// Assert that at least one element matches `predicate`.
///
/// # Panics
///
/// Panics if no element matches.
pub fn assert_any<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        collection.iter().any(predicate),
        "No element matched the predicate in: {collection:?}"
    );
}

/// Write a tree of text files under `base`: each `(relative_path, contents)`
/// pair becomes a file, with parent directories created as needed.
///
/// # Errors
///
/// Fails if a directory or file cannot be created.
pub fn write_text_files(base: &Path, files: &[(&str, &str)]) -> Result<()> {
    for (relative, contents) in files {
        let path = base.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}
