//! Expense summary
//!
//! Reduces a (filtered) expense view into a total and per-category and
//! per-month sums. Summation runs once, left to right, in input order, so the
//! same input always produces bit-identical figures.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::ExpenseResult;
use crate::models::{Amount, Category, Expense, MonthKey};

/// Aggregated figures for a set of expenses
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of every amount
    pub total: Amount,
    /// Number of expenses summarized
    pub count: usize,
    /// Sum per category; only categories that occur
    pub by_category: BTreeMap<Category, Amount>,
    /// Sum per month; only months that occur
    pub by_month: BTreeMap<MonthKey, Amount>,
}

impl Summary {
    /// Number of distinct categories in the summary
    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    /// Share of the total spent in `category`, as a percentage
    pub fn category_share(&self, category: Category) -> f64 {
        match self.by_category.get(&category) {
            Some(amount) if self.total.value() != 0.0 => {
                amount.value() / self.total.value() * 100.0
            }
            _ => 0.0,
        }
    }

    /// Months with their sums, newest first
    pub fn months_descending(&self) -> impl Iterator<Item = (&MonthKey, &Amount)> {
        self.by_month.iter().rev()
    }

    /// Write the summary as a plain-text report
    pub fn format_terminal<W: Write>(&self, writer: &mut W, symbol: &str) -> ExpenseResult<()> {
        writeln!(writer, "Expense Summary")?;
        writeln!(writer, "{}", "=".repeat(40))?;
        writeln!(writer, "{:<24} {:>15}", "Total Expenses", self.total.format_with_symbol(symbol))?;
        writeln!(writer, "{:<24} {:>15}", "Total Transactions", self.count)?;
        writeln!(writer, "{:<24} {:>15}", "Categories", self.category_count())?;

        if self.by_category.is_empty() {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "By Category")?;
        writeln!(writer, "{}", "-".repeat(40))?;
        for (category, amount) in &self.by_category {
            writeln!(
                writer,
                "{:<16} {:>15} {:>6.1}%",
                category.label(),
                amount.format_with_symbol(symbol),
                self.category_share(*category)
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "By Month")?;
        writeln!(writer, "{}", "-".repeat(40))?;
        for (month, amount) in self.months_descending() {
            writeln!(
                writer,
                "{:<24} {:>15}",
                month.long_name(),
                amount.format_with_symbol(symbol)
            )?;
        }

        Ok(())
    }
}

/// Summarize `records` in a single pass
pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut summary = Summary::default();

    for expense in records {
        summary.total += expense.amount;
        summary.count += 1;
        *summary
            .by_category
            .entry(expense.category)
            .or_insert_with(Amount::zero) += expense.amount;
        *summary
            .by_month
            .entry(expense.month())
            .or_insert_with(Amount::zero) += expense.amount;
    }

    summary
}
