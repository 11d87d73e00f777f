//! Element-wise transforms and reshaping.

use crate::defs::{UnaryFunc, UnaryPred};
use crate::error::invalid_chunk_size;
use anyhow::Result;

/// Apply `f` to every element, preserving length and order.
///
/// # Example
/// ```
/// use toolz::map;
///
/// let strs = map(&[1, 2, 3], |i: &i32| i.to_string());
/// assert_eq!(strs, vec!["1", "2", "3"]);
/// ```
pub fn map<I, O, F>(s: &[I], f: F) -> Vec<O>
where
    F: UnaryFunc<I, O>,
{
    s.iter().map(f).collect()
}

/// Apply `f` to every element and concatenate the outputs in order.
pub fn flat_map<I, O, F>(s: &[I], f: F) -> Vec<O>
where
    F: UnaryFunc<I, Vec<O>>,
{
    s.iter().flat_map(f).collect()
}

/// Elements satisfying `pred`, in their original order.
pub fn filter<T: Clone, P>(s: &[T], pred: P) -> Vec<T>
where
    P: UnaryPred<T>,
{
    s.iter().filter(|x| pred(*x)).cloned().collect()
}

/// Split into `(matching, rest)`; both halves keep their original order.
///
/// # Example
/// ```
/// use toolz::partition;
///
/// let (even, odd) = partition(&[1, 2, 3, 4, 5], |x: &i32| x % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<T: Clone, P>(s: &[T], pred: P) -> (Vec<T>, Vec<T>)
where
    P: UnaryPred<T>,
{
    s.iter().cloned().partition(|x| pred(x))
}

/// Contiguous borrowed sub-slices of length `size`; the last one holds the
/// remainder when `s.len()` is not a multiple of `size`.
///
/// # Errors
/// Fails with `InvalidChunkSize` when `size` is zero.
///
/// # Example
/// ```
/// use toolz::chunk;
///
/// let data = [1, 2, 3, 4, 5, 6, 7, 8];
/// let chunks = chunk(&data, 3).unwrap();
/// assert_eq!(chunks, vec![&[1, 2, 3][..], &[4, 5, 6], &[7, 8]]);
/// ```
pub fn chunk<T>(s: &[T], size: usize) -> Result<Vec<&[T]>> {
    if size == 0 {
        return Err(invalid_chunk_size(size));
    }
    Ok(s.chunks(size).collect())
}

/// Flatten a sequence of sequences, keeping the order of both levels.
///
/// # Example
/// ```
/// use toolz::concat;
///
/// let flat = concat(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
/// assert_eq!(flat, vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn concat<T: Clone, S: AsRef<[T]>>(seqs: &[S]) -> Vec<T> {
    let total = seqs.iter().map(|s| s.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for s in seqs {
        out.extend_from_slice(s.as_ref());
    }
    out
}

/// Reverse in place by swapping pairs from both ends inward.
pub fn reverse<T>(s: &mut [T]) {
    let n = s.len();
    for i in 0..n / 2 {
        s.swap(i, n - 1 - i);
    }
}
