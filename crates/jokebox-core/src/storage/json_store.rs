//! Typed JSON adapter over a key-value backend.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::{KeyValueBackend, StorageResult};

/// Typed access to a [`KeyValueBackend`].
///
/// Reads never fail: a missing key, a backend error or a corrupt document all
/// yield the caller's default. Writes never fail either; a rejected write is
/// logged and reported as `false` so the caller keeps its in-memory value.
#[derive(Debug, Clone)]
pub struct JsonStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> JsonStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read and decode `key`, falling back to `default`.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                tracing::warn!(key, error = %err, "storage read failed, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "stored document is malformed, using default");
                default
            }
        }
    }

    /// Encode and persist `value`, returning the backend's verdict.
    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.backend.set(key, &encoded)
    }

    /// Encode and persist `value`. Returns `false` if the durable write failed.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_write(key, value) {
            Ok(()) => {
                tracing::debug!(key, "persisted");
                true
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "storage write failed, keeping in-memory value");
                false
            }
        }
    }

    /// Delete `key`, logging on failure.
    pub fn remove(&self, key: &str) -> bool {
        match self.backend.remove(key) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key, error = %err, "storage remove failed");
                false
            }
        }
    }
}
