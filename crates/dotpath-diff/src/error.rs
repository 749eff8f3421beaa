//! Error types for the diff crate.

use thiserror::Error;

/// Errors that can occur during diff operations.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Serializing a diff to its wire shape failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
