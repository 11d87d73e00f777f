//! Errors for operations that cannot produce a value from their input.
//!
//! Fallible operations return [`anyhow::Result`]. The underlying cause is a
//! [`ToolzError`], which callers can recover with `downcast_ref`:
//!
//! ```
//! use toolz::{ToolzError, min};
//!
//! let err = min::<i32>(&[]).unwrap_err();
//! assert_eq!(
//!     err.downcast_ref::<ToolzError>(),
//!     Some(&ToolzError::EmptyInput { op: "min" })
//! );
//! ```
//!
//! Operations that look something up never fail; they signal absence with
//! `None` or `false` instead.

use std::fmt;
use tracing::debug;

/// Reason an operation rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolzError {
    /// The operation needs at least one element.
    EmptyInput {
        /// Name of the rejecting operation.
        op: &'static str,
    },
    /// `chunk` was asked for chunks of size zero.
    InvalidChunkSize {
        /// The rejected size.
        size: usize,
    },
}

impl fmt::Display for ToolzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { op } => write!(f, "{op}: empty input"),
            Self::InvalidChunkSize { size } => {
                write!(f, "chunk: size must be positive (got {size})")
            }
        }
    }
}

impl std::error::Error for ToolzError {}

pub(crate) fn empty_input(op: &'static str) -> anyhow::Error {
    debug!(op, "rejecting empty input");
    ToolzError::EmptyInput { op }.into()
}

pub(crate) fn invalid_chunk_size(size: usize) -> anyhow::Error {
    debug!(op = "chunk", size, "rejecting chunk size");
    ToolzError::InvalidChunkSize { size }.into()
}
