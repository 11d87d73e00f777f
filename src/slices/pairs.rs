//! Pairing, joining and pair-to-map conversion.

use crate::defs::{BinaryPred, Pair};
use std::collections::HashMap;
use std::hash::Hash;

/// Pair up elements position by position, stopping at the shorter input.
///
/// # Example
/// ```
/// use toolz::{Pair, zip};
///
/// let z = zip(&[1, 2, 3], &['a', 'b']);
/// assert_eq!(z, vec![Pair::new(1, 'a'), Pair::new(2, 'b')]);
/// ```
pub fn zip<A: Clone, B: Clone>(s1: &[A], s2: &[B]) -> Vec<Pair<A, B>> {
    s1.iter()
        .zip(s2)
        .map(|(a, b)| Pair::new(a.clone(), b.clone()))
        .collect()
}

/// Split pairs into two parallel sequences, preserving order.
pub fn unzip<A: Clone, B: Clone>(pairs: &[Pair<A, B>]) -> (Vec<A>, Vec<B>) {
    pairs
        .iter()
        .map(|p| (p.first.clone(), p.second.clone()))
        .unzip()
}

/// Nested-loop join: every `(a, b)` from `s1 × s2` with `pred(a, b)`, in
/// outer-`s1`, inner-`s2` order. No index is built, so the cost is
/// `O(s1.len() * s2.len())` predicate calls.
///
/// # Example
/// ```
/// use toolz::{Pair, join};
///
/// let users = [(1, "ann"), (2, "bob")];
/// let orders = [(2, 30), (1, 10), (2, 20)];
/// let rows = join(&users, &orders, |u: &(i32, &str), o: &(i32, i32)| u.0 == o.0);
/// let ids: Vec<(i32, i32)> = rows.iter().map(|p| (p.first.0, p.second.1)).collect();
/// assert_eq!(ids, vec![(1, 10), (2, 30), (2, 20)]);
/// ```
pub fn join<A: Clone, B: Clone, P>(s1: &[A], s2: &[B], pred: P) -> Vec<Pair<A, B>>
where
    P: BinaryPred<A, B>,
{
    let mut out = Vec::new();
    for a in s1 {
        for b in s2 {
            if pred(a, b) {
                out.push(Pair::new(a.clone(), b.clone()));
            }
        }
    }
    out
}

/// Build a map from pairs; a later pair overwrites an earlier one with the
/// same key.
pub fn from_pairs<K, V>(pairs: &[Pair<K, V>]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut m = HashMap::with_capacity(pairs.len());
    for p in pairs {
        m.insert(p.first.clone(), p.second.clone());
    }
    m
}
