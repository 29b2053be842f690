//! Configuration module for expense-cli
//!
//! Path resolution for the settings file and blob directory, and the user
//! settings persisted there.

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
