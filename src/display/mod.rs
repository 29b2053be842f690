//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses for terminal display. Rounding
//! to cents and date formatting happen here and nowhere else.

pub mod expense;

pub use expense::{format_expense_details, format_expense_list, format_expense_row, format_month_list};

use crate::config::settings::Settings;

/// How amounts and dates are rendered
#[derive(Debug, Clone, Copy)]
pub struct DisplayStyle<'a> {
    pub currency_symbol: &'a str,
    pub date_format: &'a str,
}

impl Default for DisplayStyle<'static> {
    fn default() -> Self {
        Self {
            currency_symbol: "$",
            date_format: "%Y-%m-%d",
        }
    }
}

impl<'a> From<&'a Settings> for DisplayStyle<'a> {
    fn from(settings: &'a Settings) -> Self {
        Self {
            currency_symbol: &settings.currency_symbol,
            date_format: &settings.date_format,
        }
    }
}
