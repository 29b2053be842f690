//! Service layer for expense-cli
//!
//! The service layer holds the business logic on top of the storage layer:
//! draft validation, the expense store, and filtering.

pub mod expense;
pub mod query;
pub mod validation;

pub use expense::{ExpenseStore, Outcome};
pub use query::{available_months, filter_expenses, ExpenseFilter};
pub use validation::{validate, DraftField, ValidationReport};
