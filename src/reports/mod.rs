//! Reports module for expense-cli
//!
//! Provides the expense summary: totals and per-category and per-month
//! breakdowns over a filtered view.

pub mod summary;

pub use summary::{summarize, Summary};
