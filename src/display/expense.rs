//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display.

use crate::models::{Expense, MonthKey};

use super::DisplayStyle;

/// Format a single expense as a list row
pub fn format_expense_row(expense: &Expense, style: &DisplayStyle<'_>) -> String {
    format!(
        "{:>14} {:10} {:14} {:30} {:>12}",
        expense.id,
        expense.date.format(style.date_format),
        expense.category.label(),
        truncate(&expense.note, 30),
        expense.amount.format_with_symbol(style.currency_symbol)
    )
}

/// Format a list of expenses, newest first
pub fn format_expense_list(expenses: &[&Expense], style: &DisplayStyle<'_>) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>14} {:10} {:14} {:30} {:>12}\n",
        "ID", "Date", "Category", "Note", "Amount"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, style));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, style: &DisplayStyle<'_>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Date:     {}\n", expense.date.format(style.date_format)));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(style.currency_symbol)
    ));
    output.push_str(&format!("Category: {}\n", expense.category.label()));
    output.push_str(&format!("Note:     {}\n", expense.note));
    output.push_str(&format!(
        "Created:  {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

/// Format the month choices for filtering
pub fn format_month_list(months: &[MonthKey]) -> String {
    if months.is_empty() {
        return "No months recorded yet.\n".to_string();
    }

    months
        .iter()
        .map(|m| format!("{}  {}\n", m, m.long_name()))
        .collect()
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseFields, ExpenseId};
    use chrono::{TimeZone, Utc};

    fn expense(note: &str) -> Expense {
        let draft = ExpenseDraft::default()
            .with_amount("12.5")
            .with_date("2024-03-01")
            .with_note(note)
            .with_category("food");
        Expense::new(
            ExpenseId::from_raw(1709285400000),
            ExpenseFields::try_from(&draft).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_expense_row(&expense("Lunch"), &DisplayStyle::default());
        assert!(row.contains("1709285400000"));
        assert!(row.contains("2024-03-01"));
        assert!(row.contains("Food"));
        assert!(row.contains("Lunch"));
        assert!(row.contains("$12.50"));
    }

    #[test]
    fn test_custom_style() {
        let style = DisplayStyle {
            currency_symbol: "€",
            date_format: "%d/%m/%Y",
        };
        let details = format_expense_details(&expense("Lunch"), &style);
        assert!(details.contains("01/03/2024"));
        assert!(details.contains("€12.50"));
        assert!(details.contains("2024-03-01 09:30:00 UTC"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_expense_list(&[], &DisplayStyle::default()),
            "No expenses found.\n"
        );
    }

    #[test]
    fn test_long_note_is_truncated() {
        let long = "a very long note that keeps going and going";
        let e = expense(long);
        let list = format_expense_list(&[&e], &DisplayStyle::default());
        assert!(list.contains("a very long note that keeps..."));
        assert!(!list.contains(long));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("café crème brûlée", 8), "café ...");
        assert_eq!(truncate("short", 8), "short");
    }

    #[test]
    fn test_month_list() {
        let months = [
            MonthKey::parse("2024-04").unwrap(),
            MonthKey::parse("2024-03").unwrap(),
        ];
        assert_eq!(
            format_month_list(&months),
            "2024-04  April 2024\n2024-03  March 2024\n"
        );
        assert_eq!(format_month_list(&[]), "No months recorded yet.\n");
    }
}
