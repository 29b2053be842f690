//! Key-value blob stores
//!
//! The persistence transport is deliberately dumb: a text value per key,
//! fetched and replaced whole.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::{read_text, write_text_atomic};

/// Text storage addressed by a fixed key
pub trait BlobStore {
    /// Fetch the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> ExpenseResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// Blobs kept in memory for the lifetime of the value
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.into(), value.into());
        store
    }

    /// Raw access to a stored value
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        if key.is_empty() {
            return Err(ExpenseError::Storage("Blob key cannot be empty".into()));
        }
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
