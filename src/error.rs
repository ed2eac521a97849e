//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Empty key or otherwise unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No live entry for the key
    #[error("{0} does not exist in the cache")]
    NotFound(String),

    /// Entry exists but holds a value of another type
    #[error("Type mismatch for key {key}: expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
    },
}

impl CacheError {
    /// Builds the error returned for an empty key.
    pub(crate) fn empty_key() -> Self {
        CacheError::InvalidArgument("Key cannot be null or empty".to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
