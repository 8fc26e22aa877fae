//! Filesystem utilities for atomic document writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Move `temp_path` over `destination`.
///
/// Where `fs::rename` refuses to replace an existing file, the destination is
/// removed and the rename retried once. On final failure the temp file is
/// deleted.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "could not replace {} (first attempt: {}, retry: {})",
                    destination.display(),
                    initial_err,
                    retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Write `contents` to `destination` through a sibling temp file.
///
/// Readers never observe a half-written document: the destination is either
/// the old contents or the new ones.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name"))?;
    let temp_path = destination.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));

    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }

    rename_with_fallback(&temp_path, destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.json");
        let dest = dir.path().join("dest.json");

        File::create(&dest).unwrap().write_all(b"old").unwrap();
        File::create(&temp).unwrap().write_all(b"new").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("rated-jokes.json");

        write_atomic(&dest, b"[]").unwrap();
        write_atomic(&dest, b"[1]").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "[1]");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
