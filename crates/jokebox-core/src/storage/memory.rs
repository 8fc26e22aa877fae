//! In-memory backend.
//!
//! Clones share the same map, so two stores built from one backend observe
//! each other's writes the way two views over the same origin storage do.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{validate_key, KeyValueBackend, StorageError, StorageResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<u64>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: u64) -> Self {
        Self {
            entries: Arc::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Raw stored string, bypassing JSON decoding.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        let mut entries = self.lock();
        if let Some(quota) = self.quota_bytes {
            let others: u64 = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| (k.len() + v.len()) as u64)
                .sum();
            let needed = others + (key.len() + value.len()) as u64;
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("k").unwrap(), None);

        backend.set("k", "v").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));

        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let a = MemoryBackend::new();
        let b = a.clone();
        a.set("shared", "1").unwrap();
        assert_eq!(b.get("shared").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_quota_rejects_write_and_keeps_old_value() {
        let backend = MemoryBackend::with_quota(16);
        backend.set("k", "small").unwrap();

        let err = backend.set("k", "a value that is far too large").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("small"));
    }
}
