//! Operations over ordered sequences.
//!
//! Every function borrows its input slice and returns freshly allocated
//! output; only [`reverse`] mutates. Operations that take a closure come in
//! two flavours where it makes sense: a default one driven by a constraint
//! (`PartialEq`, [`Ordered`](crate::Ordered), ...) and a `_func` variant that
//! takes the comparison as a closure.
//!
//! ### Overview
//! - **search** - [`contains`], [`count`], [`find`], [`index`], [`equal`] (+ `_func`)
//! - **compare** - [`min`], [`max`], [`arg_min`], [`arg_max`] (+ `_func`), [`between`], [`clamp`]
//! - **aggregate** - [`accumulate`], [`reduce`], [`sum`], [`product`], [`average`],
//!   [`all`], [`any`], [`all_func`], [`any_func`], [`for_each`]
//! - **transform** - [`map`], [`flat_map`], [`filter`], [`partition`], [`chunk`],
//!   [`concat`], [`reverse`]
//! - **group** - [`group_by`], [`pivot`], [`counter`]
//! - **sets** - [`difference`], [`new_set`], [`distinct`]
//! - **pairs** - [`zip`], [`unzip`], [`join`], [`from_pairs`]
//!
//! ### Example
//! ```
//! use toolz::*;
//!
//! let orders = [12, 7, 30, 7, 55];
//! let big = filter(&orders, |x: &i32| *x > 10);
//! assert_eq!(sum(&big), 97);
//! assert_eq!(arg_max(&orders).unwrap(), 4);
//! assert_eq!(counter(&orders)[&7], 2);
//! ```

mod aggregate;
mod compare;
mod group;
mod pairs;
mod search;
mod sets;
mod transform;

pub use aggregate::{accumulate, all, all_func, any, any_func, average, for_each, product, reduce, sum};
pub use compare::{
    arg_max, arg_max_func, arg_min, arg_min_func, between, clamp, max, max_func, min, min_func,
};
pub use group::{counter, group_by, pivot};
pub use pairs::{from_pairs, join, unzip, zip};
pub use search::{contains, contains_func, count, count_func, equal, equal_func, find, index, index_func};
pub use sets::{difference, distinct, new_set};
pub use transform::{chunk, concat, filter, flat_map, map, partition, reverse};
