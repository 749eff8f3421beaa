//! Error types for the flatten crate.

use thiserror::Error;

/// Errors that can occur while flattening a nested value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlattenError {
    /// The input nests containers deeper than the configured limit.
    #[error("container nesting exceeds depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// Convenience alias for flatten results.
pub type FlattenResult<T> = Result<T, FlattenError>;
