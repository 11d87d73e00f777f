//! Testing utilities for code built on toolz.
//!
//! Several operations return data whose order is unspecified (everything
//! derived from walking a `HashMap`). The assertions here compare such results
//! without depending on iteration order.
//!
//! - [`assert_collections_equal`]: exact order-dependent comparison
//! - [`assert_collections_unordered_equal`]: multiset comparison
//! - [`assert_kv_collections_equal`]: key-value pairs, sorted by key first
//! - [`assert_maps_equal`]: entry-wise map comparison
//! - [`assert_all`] / [`assert_any`] / [`assert_none`]: predicate checks
//!
//! [`sequential_data`] and [`pseudo_random_data`] build reproducible inputs.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use toolz::testing::*;
//! use toolz::unpivot;
//!
//! let m = HashMap::from([(1, 'a'), (2, 'b')]);
//! let rows = unpivot(&m, |k: &i32, v: &char| format!("{k}{v}"));
//! assert_collections_unordered_equal(&rows, &["2b".to_string(), "1a".to_string()]);
//! ```

mod assertions;
mod builders;

pub use assertions::*;
pub use builders::*;
