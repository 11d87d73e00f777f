//! # toolz
//!
//! Generic, type-parameterized operations over sequences (`&[T]`) and maps
//! (`HashMap<K, V>`): searching, aggregation, transformation, set-like
//! operations, and pairing/joining.
//!
//! Every operation is a free function. Inputs are borrowed and never mutated
//! (except by [`reverse`]); outputs are freshly allocated and owned by the
//! caller. There is no shared state between calls, and callers compose
//! pipelines by chaining calls.
//!
//! ## Quick Start
//!
//! ```
//! use toolz::*;
//!
//! let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
//!
//! // Group by first letter
//! let groups = group_by(&words, |w: &&str| w.chars().next().unwrap_or(' '));
//! assert_eq!(groups[&'b'], vec!["banana", "blueberry"]);
//!
//! let lengths = map(&words, |w: &&str| w.len());
//! assert_eq!(sum(&lengths), 33);
//! assert_eq!(arg_max(&lengths).unwrap(), 3);
//!
//! // Chunks borrow from the input
//! let pages = chunk(&words, 2).unwrap();
//! assert_eq!(pages.len(), 3);
//! assert_eq!(pages[2], &["cherry"]);
//! ```
//!
//! ## Core Concepts
//!
//! ### Constraints
//!
//! The [`defs`] module names the families of scalar types the operations are
//! generic over: [`Signed`], [`Unsigned`], [`Integer`], [`Float`], [`Complex`],
//! [`Numeric`] (all of them), [`OrderedNumeric`] (all but `Complex`) and
//! [`Ordered`] (anything comparable with `<`, including strings).
//!
//! ### Function shapes
//!
//! [`UnaryFunc`], [`UnaryPred`], [`BinaryPred`], [`ReduceFunc`],
//! [`PivotFunc`], [`UnpivotFunc`] and friends are trait aliases over `Fn`
//! closures. Any closure with the right signature satisfies them.
//!
//! ### Ordering
//!
//! Sequence outputs keep the order of their inputs. Map outputs, and anything
//! built by walking a map ([`unpivot`], [`to_pairs`]), have unspecified
//! order. The [`testing`] module has order-insensitive assertions for them.
//!
//! ### Errors
//!
//! Lookups signal a miss with `None` or `false`. Operations that need a
//! non-empty input ([`min`], [`max`], [`arg_min`], [`arg_max`], [`average`])
//! or a positive size ([`chunk`]) return an [`anyhow::Result`] whose cause is
//! a [`ToolzError`].
//!
//! ## Feature Flags
//!
//! - `complex` (default) - `Complex<f32>` / `Complex<f64>` as [`Numeric`]
//!   types, via `num-complex`
//!
//! ## Module Overview
//!
//! - [`defs`] - constraints, function shapes, [`Pair`]
//! - [`slices`] - sequence operations
//! - [`maps`] - map operations
//! - [`error`] - [`ToolzError`]
//! - [`testing`] - assertion helpers

pub mod defs;
pub mod error;
pub mod maps;
pub mod slices;
pub mod testing;

pub use defs::*;
pub use error::ToolzError;
pub use maps::*;
pub use slices::*;
