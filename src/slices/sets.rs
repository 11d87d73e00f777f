//! Set-like operations backed by `HashSet`.

use std::collections::HashSet;
use std::hash::Hash;

/// Symmetric split of two slices: `(in s1 but not s2, in s2 but not s1)`.
///
/// Membership, not multiplicity, decides what is kept, so duplicates of a
/// kept value all survive and both sides keep their original order.
///
/// # Example
/// ```
/// use toolz::difference;
///
/// let (left, right) = difference(&[1, 2, 3], &[2, 3, 4]);
/// assert_eq!(left, vec![1]);
/// assert_eq!(right, vec![4]);
/// ```
pub fn difference<T: Eq + Hash + Clone>(s1: &[T], s2: &[T]) -> (Vec<T>, Vec<T>) {
    let set1: HashSet<&T> = s1.iter().collect();
    let set2: HashSet<&T> = s2.iter().collect();
    let left = s1.iter().filter(|x| !set2.contains(x)).cloned().collect();
    let right = s2.iter().filter(|x| !set1.contains(x)).cloned().collect();
    (left, right)
}

/// Distinct values of `s`.
pub fn new_set<T: Eq + Hash + Clone>(s: &[T]) -> HashSet<T> {
    s.iter().cloned().collect()
}

/// First occurrence of every distinct value, in order.
///
/// # Example
/// ```
/// use toolz::distinct;
///
/// assert_eq!(distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn distinct<T: Eq + Hash + Clone>(s: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(s.len());
    s.iter().filter(|x| seen.insert(*x)).cloned().collect()
}
