//! Expense model
//!
//! An expense is replaced wholesale on update: `amount`, `date`, `note` and
//! `category` change together, while `id` and `created_at` are fixed at
//! creation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;
use super::ids::ExpenseId;
use super::month::MonthKey;

/// A recorded expense
///
/// Serialized field names are `id`, `amount`, `date`, `note`, `category` and
/// `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent, always positive
    pub amount: Amount,

    /// Day the money was spent
    pub date: NaiveDate,

    /// Trimmed, non-empty description
    pub note: String,

    pub category: Category,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Build a finalized expense from validated fields
    pub fn new(id: ExpenseId, fields: ExpenseFields, created_at: DateTime<Utc>) -> Self {
        let ExpenseFields {
            amount,
            date,
            note,
            category,
        } = fields;

        Self {
            id,
            amount,
            date,
            note,
            category,
            created_at,
        }
    }

    /// The `YYYY-MM` month this expense falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.date)
    }

    /// Replace the four editable fields, keeping `id` and `created_at`
    pub fn replace_fields(&mut self, fields: ExpenseFields) {
        self.amount = fields.amount;
        self.date = fields.date;
        self.note = fields.note;
        self.category = fields.category;
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.note,
            self.amount
        )
    }
}

/// The editable fields of an expense, already checked against the business
/// rules
///
/// Values of this type come out of validating an
/// [`ExpenseDraft`](super::ExpenseDraft), so holding one means the rules
/// passed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFields {
    amount: Amount,
    date: NaiveDate,
    note: String,
    category: Category,
}

impl ExpenseFields {
    pub(crate) fn new(amount: Amount, date: NaiveDate, note: String, category: Category) -> Self {
        Self {
            amount,
            date,
            note,
            category,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
