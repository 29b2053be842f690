//! Expense drafts
//!
//! A draft is the raw, unvalidated text a caller collects before committing
//! an expense. Empty text means the field was left out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::expense::Expense;

/// Unvalidated candidate fields for an expense
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: String,
    pub date: String,
    pub note: String,
    pub category: String,
}

impl ExpenseDraft {
    /// A fresh draft: no amount or note, dated `today`, filed under food
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            note: String::new(),
            category: Category::default().to_string(),
        }
    }

    /// A draft pre-filled from an existing expense, for editing
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.value().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            note: expense.note.clone(),
            category: expense.category.to_string(),
        }
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
