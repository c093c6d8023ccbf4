//! Error types for the sync engine.

use thiserror::Error;

/// Result type for sync operations.
pub type GridlyResult<T> = Result<T, GridlyError>;

/// Errors that can occur in sync operations.
///
/// Failures are values: every operation surfaces exactly one of these
/// to its caller, and nothing retries on its own.
#[derive(Debug, Error)]
pub enum GridlyError {
    /// Configuration error, detected before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport error or non-success HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File I/O error (`.po` output).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
