//! Core data models for expense-cli
//!
//! This module contains the data structures of the expense domain: the
//! expense record itself, its identifier, amounts, categories, month keys and
//! the unvalidated draft a caller fills in before committing.

pub mod amount;
pub mod category;
pub mod draft;
pub mod expense;
pub mod ids;
pub mod month;

pub use amount::{Amount, AmountParseError};
pub use category::{Category, CategoryParseError};
pub use draft::ExpenseDraft;
pub use expense::{Expense, ExpenseFields};
pub use ids::{ExpenseId, IdGenerator};
pub use month::{MonthKey, MonthParseError};
