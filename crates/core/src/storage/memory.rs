//! In-memory storage

use rustc_hash::FxHashMap;

use super::{CartStorage, StorageError};

/// Storage that lives only as long as the value itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with a single pre-populated slot.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = FxHashMap::default();

        slots.insert(key.into(), value.into());

        Self { slots }
    }

    /// Raw value currently stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}
