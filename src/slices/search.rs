//! Membership, counting, lookup and equality.
//!
//! Lookups never fail: a miss is `None` (or `false`), and an empty slice is
//! always a miss.

use crate::defs::{BinaryPred, UnaryPred};

/// True iff some element equals `target`.
///
/// # Example
/// ```
/// use toolz::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&["aaa", "bbb"], &"ddd"));
/// ```
pub fn contains<T: PartialEq>(s: &[T], target: &T) -> bool {
    contains_func(s, target, |x: &T, y: &T| x == y)
}

/// True iff `eq(element, target)` holds for some element.
pub fn contains_func<T, E>(s: &[T], target: &T, eq: E) -> bool
where
    E: BinaryPred<T, T>,
{
    s.iter().any(|x| eq(x, target))
}

/// Number of elements equal to `target`.
pub fn count<T: PartialEq>(s: &[T], target: &T) -> usize {
    count_func(s, |x: &T| x == target)
}

/// Number of elements satisfying `pred`.
pub fn count_func<T, P>(s: &[T], pred: P) -> usize
where
    P: UnaryPred<T>,
{
    s.iter().filter(|x| pred(*x)).count()
}

/// First element satisfying `pred`, scanning left to right.
///
/// # Example
/// ```
/// use toolz::find;
///
/// let words = ["pear", "apple", "avocado"];
/// assert_eq!(find(&words, |w: &&str| w.starts_with('a')), Some(&"apple"));
/// assert_eq!(find(&words, |w: &&str| w.is_empty()), None);
/// ```
pub fn find<T, P>(s: &[T], pred: P) -> Option<&T>
where
    P: UnaryPred<T>,
{
    s.iter().find(|x| pred(*x))
}

/// Index of the first element equal to `target`.
pub fn index<T: PartialEq>(s: &[T], target: &T) -> Option<usize> {
    index_func(s, |x: &T| x == target)
}

/// Index of the first element satisfying `pred`.
pub fn index_func<T, P>(s: &[T], pred: P) -> Option<usize>
where
    P: UnaryPred<T>,
{
    s.iter().position(|x| pred(x))
}

/// True iff both slices have the same length and are pairwise equal.
pub fn equal<T: PartialEq>(s1: &[T], s2: &[T]) -> bool {
    equal_func(s1, s2, |x: &T, y: &T| x == y)
}

/// Pairwise equality under a custom predicate; the element types may differ.
///
/// A length mismatch is `false` without calling `eq`.
///
/// # Example
/// ```
/// use toolz::equal_func;
///
/// let nums = [1, 2, 3];
/// let strs = ["1", "2", "3"];
/// assert!(equal_func(&nums, &strs, |n: &i32, s: &&str| n.to_string() == *s));
/// ```
pub fn equal_func<A, B, E>(s1: &[A], s2: &[B], eq: E) -> bool
where
    E: BinaryPred<A, B>,
{
    if s1.len() != s2.len() {
        return false;
    }
    s1.iter().zip(s2).all(|(a, b)| eq(a, b))
}
