//! File-backed storage

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::{CartStorage, StorageError};

/// Storage keeping one JSON file per key inside a directory.
///
/// Writes go to a sibling temporary file first and are renamed into place, so a reader
/// never observes a half-written slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Use `root` as the storage directory. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        let staging = path.with_extension("json.tmp");

        fs::create_dir_all(&self.root)?;
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn read_before_write_is_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.read("souk-cart")?, None, "fresh storage should be empty");

        Ok(())
    }

    #[test]
    fn write_then_read_returns_value() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut storage = FileStorage::new(dir.path().join("nested"));

        storage.write("souk-cart", "[]")?;

        assert_eq!(storage.read("souk-cart")?.as_deref(), Some("[]"), "value mismatch");
        assert!(
            !dir.path().join("nested/souk-cart.json.tmp").exists(),
            "staging file should be renamed away"
        );

        Ok(())
    }

    #[test]
    fn path_traversal_keys_are_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut storage = FileStorage::new(dir.path());

        for key in ["", "../escape", ".hidden", "a/b"] {
            assert!(
                matches!(storage.write(key, "[]"), Err(StorageError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }

        Ok(())
    }
}
