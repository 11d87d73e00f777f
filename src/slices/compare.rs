//! Extremes and range checks over [`Ordered`] values.
//!
//! Every extreme-finding operation needs at least one element and fails with
//! [`ToolzError::EmptyInput`](crate::ToolzError::EmptyInput) otherwise. Ties
//! resolve to the leftmost candidate: a later element only replaces the
//! current pick when it is strictly smaller (or larger).

use crate::defs::{BinaryPred, Ordered};
use crate::error::empty_input;
use anyhow::Result;

/// Smallest element; the first one wins ties.
///
/// Raw `f32`/`f64` are only partially ordered: a NaN never compares smaller
/// or larger, so the result depends on where it sits (`[NaN, 1.0]` keeps the
/// NaN, `[1.0, NaN]` skips it). Wrap floats in `OrderedFloat` or `NotNan`
/// for a total order.
///
/// # Errors
/// Fails with `EmptyInput` when `s` is empty.
///
/// # Example
/// ```
/// use toolz::min;
///
/// assert_eq!(min(&[3, 1, 4, 1, 5]).unwrap(), 1);
/// assert_eq!(min(&["pear", "apple"]).unwrap(), "apple");
/// assert!(min::<f64>(&[]).is_err());
/// ```
pub fn min<T: Ordered + Clone>(s: &[T]) -> Result<T> {
    extreme_by(s, "min", |x: &T, cur: &T| x < cur)
}

/// Smallest element under a custom "less than" predicate.
///
/// # Errors
/// Fails with `EmptyInput` when `s` is empty.
pub fn min_func<T: Clone, L>(s: &[T], less: L) -> Result<T>
where
    L: BinaryPred<T, T>,
{
    extreme_by(s, "min_func", less)
}

/// Largest element; the first one wins ties.
///
/// Raw `f32`/`f64` are only partially ordered: a NaN never compares larger
/// or smaller, so the result depends on where it sits (`[NaN, 1.0]` keeps the
/// NaN, `[1.0, NaN]` skips it). Wrap floats in `OrderedFloat` or `NotNan`
/// for a total order.
///
/// # Errors
/// Fails with `EmptyInput` when `s` is empty.
pub fn max<T: Ordered + Clone>(s: &[T]) -> Result<T> {
    extreme_by(s, "max", |x: &T, cur: &T| x > cur)
}

/// Largest element under a custom "larger than" predicate.
///
/// # Errors
/// Fails with `EmptyInput` when `s` is empty.
pub fn max_func<T: Clone, G>(s: &[T], larger: G) -> Result<T>
where
    G: BinaryPred<T, T>,
{
    extreme_by(s, "max_func", larger)
}

/// Index of the first smallest element.
///
/// # Errors
/// Fails with `EmptyInput` when `s` is empty.
pub fn arg_min<T: Ordered>(s: &[T]) -> Result<usize> {
    arg_extreme_by(s, "arg_min", |x: &T, cur: &T| x < cur)
}

/// Index of the first smallest element under a custom "less than" predicate.
///
/// # Errors
/// Fails with `EmptyInput` when `s` is empty.
pub fn arg_min_func<T, L>(s: &[T], less: L) -> Result<usize>
where
    L: BinaryPred<T, T>,
{
    arg_extreme_by(s, "arg_min_func", less)
}

/// Index of the first largest element.
///
/// # Errors
/// Fails with `EmptyInput` when `s` is empty.
///
/// # Example
/// ```
/// use toolz::arg_max;
///
/// assert_eq!(arg_max(&[3, 1, 4, 1, 5, 9, 2, 6]).unwrap(), 5);
/// assert_eq!(arg_max(&[7, 7, 7]).unwrap(), 0);
/// ```
pub fn arg_max<T: Ordered>(s: &[T]) -> Result<usize> {
    arg_extreme_by(s, "arg_max", |x: &T, cur: &T| x > cur)
}

/// Index of the first largest element under a custom "larger than" predicate.
///
/// # Errors
/// Fails with `EmptyInput` when `s` is empty.
pub fn arg_max_func<T, G>(s: &[T], larger: G) -> Result<usize>
where
    G: BinaryPred<T, T>,
{
    arg_extreme_by(s, "arg_max_func", larger)
}

/// Inclusive range test: `sub <= x <= sup`. `sub > sup` is not checked and
/// makes every `x` fall outside.
pub fn between<T: Ordered + ?Sized>(x: &T, sub: &T, sup: &T) -> bool {
    sub <= x && x <= sup
}

/// `x` if it lies in `[sub, sup]`, otherwise the nearest bound.
///
/// Unlike `Ord::clamp`, an inverted range does not panic: `x` above `sup` is
/// clamped to `sup` first.
///
/// # Example
/// ```
/// use toolz::clamp;
///
/// assert_eq!(clamp(15, 0, 10), 10);
/// assert_eq!(clamp(-3, 0, 10), 0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// ```
pub fn clamp<T: Ordered>(x: T, sub: T, sup: T) -> T {
    if x > sup {
        sup
    } else if x < sub {
        sub
    } else {
        x
    }
}

// `better(x, cur)` decides whether `x` replaces the current pick.
fn arg_extreme_by<T, F>(s: &[T], op: &'static str, better: F) -> Result<usize>
where
    F: BinaryPred<T, T>,
{
    let (first, rest) = s.split_first().ok_or_else(|| empty_input(op))?;
    let mut best = 0;
    let mut cur = first;
    for (i, x) in rest.iter().enumerate() {
        if better(x, cur) {
            best = i + 1;
            cur = x;
        }
    }
    Ok(best)
}

fn extreme_by<T: Clone, F>(s: &[T], op: &'static str, better: F) -> Result<T>
where
    F: BinaryPred<T, T>,
{
    let i = arg_extreme_by(s, op, better)?;
    Ok(s[i].clone())
}
