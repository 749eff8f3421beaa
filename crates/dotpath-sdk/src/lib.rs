//! High-level API for dotpath.
//!
//! Re-exports the full public surface of the underlying crates and composes
//! them into the usual pipeline: flatten each side, then diff the flat maps.
//!
//! # Example
//!
//! ```
//! use dotpath_sdk::{diff_values, DiffKind};
//! use serde_json::json;
//!
//! let first = json!({"a": 1, "b": [2, 3]});
//! let second = json!({"a": 1, "b": [2, 4]});
//!
//! let diff = diff_values(&first, &second);
//! assert_eq!(diff.len(), 1);
//! assert_eq!(diff.get("b[1]").unwrap().diff_type, DiffKind::Modified);
//! ```

use serde_json::Value;

pub use dotpath_diff::{diff_flat, DiffError, DiffKind, DiffRecord, DiffResult, FlatDiff};
pub use dotpath_flatten::{flatten, join_index, join_key, FlattenError, FlattenResult, Flattener};
pub use dotpath_types::{leaf_count, FlatMap, ValueKind};

/// Flatten both values and diff the results.
///
/// Equivalent to `diff_flat(&flatten(first), &flatten(second))`.
pub fn diff_values(first: &Value, second: &Value) -> FlatDiff {
    diff_flat(&flatten(first), &flatten(second))
}
