//! Function-shape traits.
//!
//! These are trait aliases: every closure, function item or function pointer
//! with the matching signature implements them through a blanket impl, so
//! they only name a contract at call sites. Arguments are borrowed; the one
//! exception is [`ReduceFunc`], which threads its accumulator by value.
//!
//! Closures passed where one of these is expected should annotate their
//! parameter types (`|x: &i32| *x > 0`) so the borrow is inferred as
//! higher-ranked.

/// `Fn(&I) -> O`
pub trait UnaryFunc<I: ?Sized, O>: Fn(&I) -> O {}
impl<I: ?Sized, O, F> UnaryFunc<I, O> for F where F: Fn(&I) -> O {}

/// `Fn(&I) -> bool`
pub trait UnaryPred<I: ?Sized>: Fn(&I) -> bool {}
impl<I: ?Sized, F> UnaryPred<I> for F where F: Fn(&I) -> bool {}

/// `FnMut(&I)`
pub trait UnaryProc<I: ?Sized>: FnMut(&I) {}
impl<I: ?Sized, F> UnaryProc<I> for F where F: FnMut(&I) {}

/// `Fn(&I1, &I2) -> O`
pub trait BinaryFunc<I1: ?Sized, I2: ?Sized, O>: Fn(&I1, &I2) -> O {}
impl<I1: ?Sized, I2: ?Sized, O, F> BinaryFunc<I1, I2, O> for F where F: Fn(&I1, &I2) -> O {}

/// `Fn(&I1, &I2) -> bool`
pub trait BinaryPred<I1: ?Sized, I2: ?Sized>: Fn(&I1, &I2) -> bool {}
impl<I1: ?Sized, I2: ?Sized, F> BinaryPred<I1, I2> for F where F: Fn(&I1, &I2) -> bool {}

/// `FnMut(&I1, &I2)`
pub trait BinaryProc<I1: ?Sized, I2: ?Sized>: FnMut(&I1, &I2) {}
impl<I1: ?Sized, I2: ?Sized, F> BinaryProc<I1, I2> for F where F: FnMut(&I1, &I2) {}

/// Left fold step: `Fn(T, &T) -> T`.
pub trait ReduceFunc<T>: Fn(T, &T) -> T {}
impl<T, F> ReduceFunc<T> for F where F: Fn(T, &T) -> T {}

/// Splits one element into a `(key, value)` entry: `Fn(&I) -> (K, V)`.
pub trait PivotFunc<I: ?Sized, K, V>: Fn(&I) -> (K, V) {}
impl<I: ?Sized, K, V, F> PivotFunc<I, K, V> for F where F: Fn(&I) -> (K, V) {}

/// Folds one `(key, value)` entry back into an element: `Fn(&K, &V) -> O`.
pub trait UnpivotFunc<K: ?Sized, V: ?Sized, O>: Fn(&K, &V) -> O {}
impl<K: ?Sized, V: ?Sized, O, F> UnpivotFunc<K, V, O> for F where F: Fn(&K, &V) -> O {}
