//! Operations over associative maps.
//!
//! Inputs are `HashMap<K, V, S>` for any hasher `S`. Anything that walks a map
//! to build a sequence ([`unpivot`], [`to_pairs`], [`keys`], [`values`])
//! yields its elements in unspecified order; compare such results as
//! multisets (see [`assert_collections_unordered_equal`](crate::testing::assert_collections_unordered_equal)).

use crate::defs::{BinaryProc, Pair, UnaryFunc, UnaryPred, UnpivotFunc};
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// One output element per entry, built by `f(key, value)`.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use toolz::unpivot;
///
/// let m = HashMap::from([("x", 1), ("y", 2)]);
/// let mut rows = unpivot(&m, |k: &&str, v: &i32| format!("{k}={v}"));
/// rows.sort();
/// assert_eq!(rows, vec!["x=1", "y=2"]);
/// ```
pub fn unpivot<K, V, O, S, F>(m: &HashMap<K, V, S>, f: F) -> Vec<O>
where
    F: UnpivotFunc<K, V, O>,
{
    m.iter().map(|(k, v)| f(k, v)).collect()
}

/// Every entry as a [`Pair`].
pub fn to_pairs<K: Clone, V: Clone, S>(m: &HashMap<K, V, S>) -> Vec<Pair<K, V>> {
    m.iter()
        .map(|(k, v)| Pair::new(k.clone(), v.clone()))
        .collect()
}

/// Every key, in unspecified order.
pub fn keys<K: Clone, V, S>(m: &HashMap<K, V, S>) -> Vec<K> {
    m.keys().cloned().collect()
}

/// Every value, in unspecified order.
pub fn values<K, V: Clone, S>(m: &HashMap<K, V, S>) -> Vec<V> {
    m.values().cloned().collect()
}

/// Same keys, values transformed by `f`.
pub fn map_values<K, V, W, S, F>(m: &HashMap<K, V, S>, f: F) -> HashMap<K, W>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
    F: UnaryFunc<V, W>,
{
    m.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}

/// Entries whose value satisfies `pred`.
pub fn filter_values<K, V, S, P>(m: &HashMap<K, V, S>, pred: P) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
    P: UnaryPred<V>,
{
    m.iter()
        .filter(|(_, v)| pred(*v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Visit every entry once, in unspecified order.
pub fn for_each_entry<K, V, S, F>(m: &HashMap<K, V, S>, mut f: F)
where
    F: BinaryProc<K, V>,
{
    for (k, v) in m {
        f(k, v);
    }
}
