//! Storage
//!
//! The cart persists through a single key-value slot. [`CartStorage`] is the port; the
//! adapters here cover in-process use ([`MemoryStorage`]) and durable local files
//! ([`FileStorage`]).

use std::io;

use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors raised by storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the underlying storage.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// The underlying storage failed.
    #[error("storage I/O error")]
    Io(#[from] io::Error),
}

/// A durable client-local key-value slot.
pub trait CartStorage {
    /// Read the value stored under `key`, `None` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the slot exists but cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the value could not be made durable.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<S: CartStorage + ?Sized> CartStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
