//! Key-value backend trait definition.
//!
//! The `KeyValueBackend` trait is the capability interface over durable
//! string storage. Backends are string-keyed and string-valued, synchronous
//! and capacity-limited.

use thiserror::Error;

/// Result type for backend operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Backend-level failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The write would exceed the configured capacity
    #[error("quota exceeded: writing {needed} bytes with a quota of {quota} bytes")]
    QuotaExceeded { needed: u64, quota: u64 },

    /// Key contains characters outside `[A-Za-z0-9_-]`
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    /// Value could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable string storage.
///
/// All implementations must ensure:
/// - A completed `set` is visible to every later `get` on the same key
/// - A failed `set` leaves the previous value in place
/// - Keys are validated with [`validate_key`]
pub trait KeyValueBackend: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::QuotaExceeded` if the backend is full.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Reject keys that could escape a directory or collide on disk.
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("rated-jokes").is_ok());
        assert!(validate_key("search_history2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a b").is_err());
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_backend(_backend: &dyn KeyValueBackend) {}
    }
}
