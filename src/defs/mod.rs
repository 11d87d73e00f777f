//! Shared vocabulary for the operations layer.
//!
//! - [`constraints`] - numeric and ordering constraint traits
//! - [`funcs`] - function-shape traits for closures
//! - [`Pair`] - a generic two-field record

pub mod constraints;
pub mod funcs;
mod pair;

pub use constraints::{Complex, Float, Integer, Numeric, Ordered, OrderedNumeric, Signed, Unsigned};
pub use funcs::{
    BinaryFunc, BinaryPred, BinaryProc, PivotFunc, ReduceFunc, UnaryFunc, UnaryPred, UnaryProc,
    UnpivotFunc,
};
pub use pair::Pair;
