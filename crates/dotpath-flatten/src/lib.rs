//! Path flattener for dotpath.
//!
//! Walks an arbitrarily nested value and produces a [`FlatMap`]: a one-level
//! mapping from dot-path string to leaf value. Mapping descent appends
//! `.key`, sequence descent appends `[index]`, and a leaf at the top level
//! keeps its bare key.
//!
//! # Key Types
//!
//! - [`flatten`] -- Flatten a nested value, no configuration
//! - [`Flattener`] -- Configurable flattening (nesting depth limit)
//! - [`FlattenError`] / [`FlattenResult`] -- Error surface
//!
//! [`FlatMap`]: dotpath_types::FlatMap

pub mod error;
pub mod flatten;
pub mod path;

pub use error::{FlattenError, FlattenResult};
pub use flatten::{flatten, Flattener};
pub use path::{join_index, join_key};
