//! Expense queries
//!
//! Pure filtering over an expense sequence. Results keep the input order.

use std::collections::BTreeSet;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, MonthKey};

/// Text that selects every value of a filter dimension
pub const ALL: &str = "all";

/// Options for filtering expenses; `None` means "all"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Filter by category
    pub category: Option<Category>,
    /// Filter by `YYYY-MM` month
    pub month: Option<MonthKey>,
}

impl ExpenseFilter {
    /// A filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by month
    pub fn month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    /// Build a filter from its text form, where `"all"` (or nothing) selects
    /// everything
    pub fn parse(category: Option<&str>, month: Option<&str>) -> ExpenseResult<Self> {
        let category = match category.map(str::trim) {
            None => None,
            Some(text) if text.eq_ignore_ascii_case(ALL) => None,
            Some(text) => Some(
                text.parse::<Category>()
                    .map_err(|e| ExpenseError::InvalidInput(e.to_string()))?,
            ),
        };

        let month = match month.map(str::trim) {
            None => None,
            Some(text) if text.eq_ignore_ascii_case(ALL) => None,
            Some(text) => Some(
                MonthKey::parse(text).map_err(|e| ExpenseError::InvalidInput(e.to_string()))?,
            ),
        };

        Ok(Self { category, month })
    }

    /// Check whether an expense passes the filter
    pub fn matches(&self, expense: &Expense) -> bool {
        let category_match = self.category.map_or(true, |c| expense.category == c);
        let month_match = self.month.map_or(true, |m| expense.month() == m);
        category_match && month_match
    }
}

/// The expenses in `records` that pass `filter`, in their original order
pub fn filter_expenses<'a>(records: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    records.iter().filter(|e| filter.matches(e)).collect()
}

/// Distinct months present in `records`, newest first
pub fn available_months(records: &[Expense]) -> Vec<MonthKey> {
    let months: BTreeSet<MonthKey> = records.iter().map(Expense::month).collect();
    months.into_iter().rev().collect()
}
