//! Directory-backed storage: one JSON document per key.
//!
//! Layout:
//!
//! ```text
//! <data_dir>/
//!   rated-jokes.json
//!   search-history.json
//!   recent-jokes.json
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::{validate_key, KeyValueBackend, StorageError, StorageResult};
use crate::fs::write_atomic;

const DOCUMENT_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
    quota_bytes: Option<u64>,
}

impl FileBackend {
    /// Open (creating if needed) a storage directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            quota_bytes: None,
        })
    }

    /// Cap the total size of all documents.
    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{}", key, DOCUMENT_EXTENSION))
    }

    /// Bytes used by every document except `skip`.
    fn used_bytes_excluding(&self, skip: &Path) -> io::Result<u64> {
        let mut total = 0;
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if path == skip || path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXTENSION)
            {
                continue;
            }
            total += entry.metadata()?.len();
        }
        Ok(total)
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.document_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        let path = self.document_path(key);
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_excluding(&path)? + value.len() as u64;
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        write_atomic(&path, value.as_bytes())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        match fs::remove_file(self.document_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(dir.path().join("data")).unwrap();

        backend.set("rated-jokes", "[]").unwrap();
        assert_eq!(backend.get("rated-jokes").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("data").join("rated-jokes.json").exists());
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert_eq!(backend.get("search-history").unwrap(), None);
        backend.remove("search-history").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert!(matches!(
            backend.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_quota_counts_other_documents() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap().with_quota(10);

        backend.set("a", "123456").unwrap();
        // Rewriting the same key only counts the new payload.
        backend.set("a", "1234567890").unwrap();
        let err = backend.set("b", "12").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert_eq!(backend.get("b").unwrap(), None);
    }
}
