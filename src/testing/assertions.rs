//! Assertion functions for comparing operation outputs.

use crate::slices::{counter, difference, equal, index_func};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Assert that two sequences are equal in order and content.
///
/// # Panics
///
/// Panics if the sequences differ in length or at any index.
///
/// # Example
///
/// ```
/// use toolz::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    if equal(actual, expected) {
        return;
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two sequences hold the same elements with the same
/// multiplicities, in any order.
///
/// Use this for anything built by walking a map (`unpivot`, `to_pairs`,
/// `keys`, `values`).
///
/// # Panics
///
/// Panics if the occurrence counts differ for any element.
///
/// # Example
///
/// ```
/// use toolz::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 2, 1], &[1, 1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash + Clone>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    if counter(actual) != counter(expected) {
        let (extra, missing) = difference(actual, expected);
        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

/// Assert that two sequences of key-value pairs are equal after sorting by key.
///
/// # Panics
///
/// Panics if the sequences differ after sorting.
///
/// # Example
///
/// ```
/// use toolz::testing::assert_kv_collections_equal;
///
/// assert_kv_collections_equal(vec![("b", 2), ("a", 1)], vec![("a", 1), ("b", 2)]);
/// ```
pub fn assert_kv_collections_equal<K, V>(mut actual: Vec<(K, V)>, mut expected: Vec<(K, V)>)
where
    K: Debug + Ord,
    V: Debug + PartialEq,
{
    actual.sort_by(|a, b| a.0.cmp(&b.0));
    expected.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(actual, expected, "Key-value mismatch after sorting by key");
}

/// Assert that two maps hold the same entries.
///
/// # Panics
///
/// Panics on a size mismatch, a missing key or a differing value.
pub fn assert_maps_equal<K, V, S1: BuildHasher, S2: BuildHasher>(
    actual: &HashMap<K, V, S1>,
    expected: &HashMap<K, V, S2>,
) where
    K: Debug + Eq + Hash,
    V: Debug + PartialEq,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "HashMap size mismatch:\n  Expected size: {}\n  Actual size: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (key, expected_value) in expected {
        match actual.get(key) {
            Some(actual_value) if actual_value == expected_value => {}
            Some(actual_value) => panic!(
                "HashMap value mismatch for key {key:?}:\n  Expected: {expected_value:?}\n  Actual: {actual_value:?}"
            ),
            None => panic!("HashMap missing key: {key:?}"),
        }
    }
}

/// Assert that every element satisfies `predicate`.
///
/// # Panics
///
/// Panics naming the first failing element.
///
/// # Example
///
/// ```
/// use toolz::testing::assert_all;
///
/// assert_all(&[2, 4, 6, 8], |x: &i32| x % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some(i) = index_func(collection, |x: &T| !predicate(x)) {
        panic!(
            "Predicate failed for element at index {i}:\n  Element: {:?}\n  Collection: {collection:?}",
            collection[i]
        );
    }
}

/// Assert that at least one element satisfies `predicate`.
///
/// # Panics
///
/// Panics if none does.
pub fn assert_any<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        index_func(collection, predicate).is_some(),
        "No elements satisfied the predicate:\n  Collection: {collection:?}"
    );
}

/// Assert that no element satisfies `predicate`.
///
/// # Panics
///
/// Panics naming the first matching element.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some(i) = index_func(collection, predicate) {
        panic!(
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {:?}\n  Collection: {collection:?}",
            collection[i]
        );
    }
}
