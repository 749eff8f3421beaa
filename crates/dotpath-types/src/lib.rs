//! Foundation types for dotpath.
//!
//! A nested value is any `serde_json::Value`: objects and arrays are the
//! containers, everything else (null, booleans, numbers, strings) is a leaf.
//! Flattening reduces a nested value to a [`FlatMap`], a one-level mapping
//! from dot-path string to leaf value. Every other dotpath crate depends on
//! `dotpath-types`.
//!
//! # Key Types
//!
//! - [`ValueKind`] -- Runtime classification of a value (map/seq/leaf)
//! - [`FlatMap`] -- Dot-path keyed flat mapping, the flattener's output
//! - [`leaf_count`] -- Number of leaves reachable in a nested value

pub mod value;

pub use value::{leaf_count, FlatMap, ValueKind};
