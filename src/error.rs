//! Custom error types for expense-cli
//!
//! This module defines the error hierarchy for the application using thiserror.
//! Persistence problems get their own non-fatal type, [`PersistenceWarning`],
//! because they never abort an in-memory mutation.

use thiserror::Error;

use crate::services::validation::ValidationReport;

/// The main error type for expense-cli operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A draft failed one or more business rules
    #[error("Validation error: {0}")]
    Validation(ValidationReport),

    /// Malformed user input outside a draft (filters, ids)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ValidationReport> for ExpenseError {
    fn from(report: ValidationReport) -> Self {
        Self::Validation(report)
    }
}

/// Result type alias for expense-cli operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

/// A save or load against the blob store that did not go through.
///
/// The in-memory store stays the source of truth for the session; callers
/// report these and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceWarning {
    /// The blob could not be read
    #[error("could not read '{key}': {reason}")]
    Read { key: String, reason: String },

    /// The blob was read but is not a valid expense list
    #[error("stored '{key}' is corrupt and was ignored: {reason}")]
    Corrupt { key: String, reason: String },

    /// The blob could not be written
    #[error("could not save '{key}': {reason}")]
    Write { key: String, reason: String },
}

impl PersistenceWarning {
    /// The blob key this warning is about
    pub fn key(&self) -> &str {
        match self {
            Self::Read { key, .. } | Self::Corrupt { key, .. } | Self::Write { key, .. } => key,
        }
    }
}
