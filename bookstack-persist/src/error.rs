//! Error types for the persistence gateway.

use thiserror::Error;

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Errors that can occur while reading or writing a registry snapshot.
///
/// The registries do not inspect the variant; they only propagate it.
/// The frontend's startup path logs it and continues with an empty
/// registry.
#[derive(Debug, Error)]
pub enum PersistError {
    /// File system error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
