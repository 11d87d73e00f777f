//! Sequence-to-map aggregations.
//!
//! The returned maps are `HashMap`s; their iteration order is unspecified.

use crate::defs::{PivotFunc, UnaryFunc};
use std::collections::HashMap;
use std::hash::Hash;

/// Group elements by `key_fn`. Each group keeps the relative order the
/// elements had in `s`.
///
/// # Example
/// ```
/// use toolz::group_by;
///
/// let groups = group_by(&[1, 2, 3, 4, 5, 6, 7, 8], |x: &i32| x % 2);
/// assert_eq!(groups[&0], vec![2, 4, 6, 8]);
/// assert_eq!(groups[&1], vec![1, 3, 5, 7]);
/// ```
pub fn group_by<T, K, F>(s: &[T], key_fn: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: UnaryFunc<T, K>,
{
    let mut m: HashMap<K, Vec<T>> = HashMap::new();
    for x in s {
        m.entry(key_fn(x)).or_default().push(x.clone());
    }
    m
}

/// Turn every element into a `(key, value)` entry.
///
/// When two elements yield the same key the later one wins: its value
/// overwrites the earlier entry.
///
/// # Example
/// ```
/// use toolz::pivot;
///
/// let rows = [(1, 'a'), (2, 'b'), (1, 'c')];
/// let m = pivot(&rows, |r: &(i32, char)| *r);
/// assert_eq!(m.len(), 2);
/// assert_eq!(m[&1], 'c');
/// ```
pub fn pivot<T, K, V, F>(s: &[T], f: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: PivotFunc<T, K, V>,
{
    s.iter().map(f).collect()
}

/// Occurrence count of every distinct value.
///
/// # Example
/// ```
/// use toolz::counter;
///
/// let c = counter(&["a", "b", "a"]);
/// assert_eq!(c[&"a"], 2);
/// assert_eq!(c[&"b"], 1);
/// ```
pub fn counter<T: Eq + Hash + Clone>(s: &[T]) -> HashMap<T, usize> {
    let mut m: HashMap<T, usize> = HashMap::new();
    for x in s {
        *m.entry(x.clone()).or_insert(0) += 1;
    }
    m
}
