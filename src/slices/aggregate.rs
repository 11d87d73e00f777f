//! Folds and boolean aggregation.

use crate::defs::{Numeric, OrderedNumeric, ReduceFunc, UnaryPred, UnaryProc};
use crate::error::empty_input;
use anyhow::Result;

/// Seeded left fold: `acc(...acc(acc(seed, s[0]), s[1])..., s[n-1])`.
///
/// An empty slice returns `seed` unchanged.
///
/// # Example
/// ```
/// use toolz::accumulate;
///
/// let joined = accumulate(String::new(), &["a", "b", "c"], |mut acc: String, x: &&str| {
///     acc.push_str(x);
///     acc
/// });
/// assert_eq!(joined, "abc");
/// ```
pub fn accumulate<T, U, F>(seed: T, s: &[U], acc: F) -> T
where
    F: Fn(T, &U) -> T,
{
    s.iter().fold(seed, acc)
}

/// Seeded left fold over a homogeneous slice, slice first.
///
/// # Example
/// ```
/// use toolz::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 4, 5], |x: i32, y: &i32| x + y, 0), 15);
/// ```
pub fn reduce<T, F>(s: &[T], f: F, seed: T) -> T
where
    F: ReduceFunc<T>,
{
    accumulate(seed, s, f)
}

/// Sum of all elements; `0` for an empty slice. Integer sums wrap on
/// overflow.
///
/// # Example
/// ```
/// use toolz::sum;
///
/// assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
/// assert_eq!(sum::<u8>(&[]), 0);
/// assert_eq!(sum(&[250u8, 10]), 4);
/// ```
pub fn sum<T: Numeric>(s: &[T]) -> T {
    s.iter().fold(T::zero(), |acc, &x| acc.add_wrapping(x))
}

/// Product of all elements; `1` for an empty slice. Integer products wrap on
/// overflow.
pub fn product<T: Numeric>(s: &[T]) -> T {
    s.iter().fold(T::one(), |acc, &x| acc.mul_wrapping(x))
}

/// Arithmetic mean as `f64`.
///
/// # Errors
/// Fails with `EmptyInput` when `s` is empty.
pub fn average<T: OrderedNumeric>(s: &[T]) -> Result<f64> {
    if s.is_empty() {
        return Err(empty_input("average"));
    }
    let total: f64 = s.iter().map(|x| x.to_f64().unwrap_or(f64::NAN)).sum();
    Ok(total / s.len() as f64)
}

/// True iff no flag is `false`; vacuously true.
pub fn all(flags: &[bool]) -> bool {
    flags.iter().all(|&b| b)
}

/// True iff at least one flag is `true`; vacuously false.
pub fn any(flags: &[bool]) -> bool {
    flags.iter().any(|&b| b)
}

/// True iff `value` satisfies every predicate; vacuously true.
///
/// Stops at the first failing predicate.
///
/// # Example
/// ```
/// use toolz::{UnaryPred, all_func};
///
/// let positive: &dyn UnaryPred<i32> = &|x: &i32| *x > 0;
/// let even: &dyn UnaryPred<i32> = &|x: &i32| x % 2 == 0;
/// assert!(all_func(&4, &[positive, even]));
/// assert!(!all_func(&3, &[positive, even]));
/// ```
pub fn all_func<T: ?Sized>(value: &T, preds: &[&dyn UnaryPred<T>]) -> bool {
    preds.iter().all(|p| p(value))
}

/// True iff `value` satisfies at least one predicate; vacuously false.
///
/// Stops at the first passing predicate.
pub fn any_func<T: ?Sized>(value: &T, preds: &[&dyn UnaryPred<T>]) -> bool {
    preds.iter().any(|p| p(value))
}

/// Call `f` on every element, in order.
pub fn for_each<T, F>(s: &[T], mut f: F)
where
    F: UnaryProc<T>,
{
    for x in s {
        f(x);
    }
}
