//! Error types for Jokebox core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and exit codes.

use thiserror::Error;

use crate::storage::StorageError;

/// Result type alias for Jokebox operations.
pub type Result<T> = std::result::Result<T, JokeboxError>;

/// Core error type for Jokebox operations.
#[derive(Debug, Error)]
pub enum JokeboxError {
    /// Data validation error (short search term, malformed joke record, bad rating)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success HTTP response or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Durable storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No share channel is available for this joke
    #[error("Share unavailable: {0}")]
    ShareUnavailable(String),

    /// Neither sharing nor a clipboard write succeeded
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

impl From<std::io::Error> for JokeboxError {
    fn from(err: std::io::Error) -> Self {
        JokeboxError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for JokeboxError {
    fn from(err: serde_json::Error) -> Self {
        JokeboxError::Validation(err.to_string())
    }
}

impl From<reqwest::Error> for JokeboxError {
    fn from(err: reqwest::Error) -> Self {
        JokeboxError::Network(err.to_string())
    }
}

impl From<StorageError> for JokeboxError {
    fn from(err: StorageError) -> Self {
        JokeboxError::Storage(err.to_string())
    }
}
