//! Storage layer for expense-cli
//!
//! Provides the blob store abstraction the expense list is persisted
//! through, a file-backed implementation with atomic writes, and the
//! repository that maps the expense sequence onto a single blob.

pub mod blob;
pub mod expenses;
pub mod file_io;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use expenses::{ExpenseRepository, EXPENSES_KEY};
pub use file_io::{read_json, read_text, write_json_atomic, write_text_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Open the file-backed expense repository for `paths`
pub fn open_file_repository(
    paths: &ExpensePaths,
) -> Result<ExpenseRepository<FileBlobStore>, ExpenseError> {
    paths.ensure_directories()?;
    Ok(ExpenseRepository::new(FileBlobStore::new(paths.data_dir())))
}
