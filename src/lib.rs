//! expense-cli - Personal expense tracking from the terminal
//!
//! This library holds the core of a small expense tracker: drafts are
//! validated into expenses, kept newest first in a store that saves the full
//! list after every change, and queried and summarized by category and month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, amounts, categories, months)
//! - `storage`: Blob store abstraction and JSON persistence
//! - `services`: Validation, the expense store, and filtering
//! - `reports`: Summaries by category and month
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::ExpensePaths;
//! use expense_cli::services::ExpenseStore;
//! use expense_cli::storage::open_file_repository;
//!
//! let paths = ExpensePaths::new()?;
//! let store = ExpenseStore::open(open_file_repository(&paths)?).into_value();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult, PersistenceWarning};
