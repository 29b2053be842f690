//! Draft validation
//!
//! Every rule runs on every draft and all failures are collected, so a caller
//! can show each problem next to its field in one go.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Amount, Category, ExpenseDraft, ExpenseFields};

pub const AMOUNT_MESSAGE: &str = "Amount must be greater than 0";
pub const DATE_REQUIRED_MESSAGE: &str = "Date is required";
pub const DATE_INVALID_MESSAGE: &str = "Date must be a valid date (YYYY-MM-DD)";
pub const NOTE_MESSAGE: &str = "Note is required";

/// A field of an expense draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Amount,
    Date,
    Note,
    Category,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount => write!(f, "amount"),
            Self::Date => write!(f, "date"),
            Self::Note => write!(f, "note"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// Outcome of validating a draft: one message per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: BTreeMap<DraftField, String>,
}

impl ValidationReport {
    /// True when no rule failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for `field`, if it failed
    pub fn error(&self, field: DraftField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// All failures, ordered by field
    pub fn errors(&self) -> &BTreeMap<DraftField, String> {
        &self.errors
    }

    fn reject(&mut self, field: DraftField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Check a draft against the business rules
pub fn validate(draft: &ExpenseDraft) -> ValidationReport {
    check(draft).report
}

// Parsed values are kept alongside the report so conversion to
// `ExpenseFields` never re-parses.
struct Checked {
    report: ValidationReport,
    amount: Option<Amount>,
    date: Option<NaiveDate>,
    category: Option<Category>,
}

fn check(draft: &ExpenseDraft) -> Checked {
    let mut report = ValidationReport::default();

    let amount = Amount::parse(&draft.amount)
        .ok()
        .filter(Amount::is_positive);
    if amount.is_none() {
        report.reject(DraftField::Amount, AMOUNT_MESSAGE);
    }

    let date_text = draft.date.trim();
    let date = if date_text.is_empty() {
        report.reject(DraftField::Date, DATE_REQUIRED_MESSAGE);
        None
    } else {
        let parsed = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").ok();
        if parsed.is_none() {
            report.reject(DraftField::Date, DATE_INVALID_MESSAGE);
        }
        parsed
    };

    if draft.note.trim().is_empty() {
        report.reject(DraftField::Note, NOTE_MESSAGE);
    }

    let category = draft.category.parse::<Category>().ok();
    if category.is_none() {
        report.reject(
            DraftField::Category,
            format!("Category must be one of: {}", Category::names()),
        );
    }

    Checked {
        report,
        amount,
        date,
        category,
    }
}

impl TryFrom<&ExpenseDraft> for ExpenseFields {
    type Error = ValidationReport;

    fn try_from(draft: &ExpenseDraft) -> Result<Self, Self::Error> {
        let checked = check(draft);
        match (checked.amount, checked.date, checked.category) {
            (Some(amount), Some(date), Some(category)) if checked.report.is_valid() => Ok(
                ExpenseFields::new(amount, date, draft.note.trim().to_string(), category),
            ),
            _ => Err(checked.report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ExpenseDraft {
        ExpenseDraft::default()
            .with_amount("50")
            .with_date("2024-03-01")
            .with_note("Groceries")
            .with_category("food")
    }

    #[test]
    fn test_valid_draft() {
        let report = validate(&valid_draft());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_non_positive_amounts() {
        for amount in ["0", "-1", "-0.01", "0.00"] {
            let report = validate(&valid_draft().with_amount(amount));
            assert_eq!(report.error(DraftField::Amount), Some(AMOUNT_MESSAGE), "{amount}");
        }
    }

    #[test]
    fn test_missing_or_non_numeric_amount() {
        for amount in ["", "  ", "abc", "12abc", "NaN", "inf"] {
            let report = validate(&valid_draft().with_amount(amount));
            assert_eq!(report.error(DraftField::Amount), Some(AMOUNT_MESSAGE), "{amount}");
        }
    }

    #[test]
    fn test_date_required() {
        let report = validate(&valid_draft().with_date(""));
        assert_eq!(report.error(DraftField::Date), Some(DATE_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_date_must_parse() {
        for date in ["2024-02-30", "03/01/2024", "yesterday"] {
            let report = validate(&valid_draft().with_date(date));
            assert_eq!(report.error(DraftField::Date), Some(DATE_INVALID_MESSAGE), "{date}");
        }
    }

    #[test]
    fn test_note_is_trimmed() {
        let report = validate(&valid_draft().with_note("   \t "));
        assert_eq!(report.error(DraftField::Note), Some(NOTE_MESSAGE));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let report = validate(&valid_draft().with_category("groceries"));
        let message = report.error(DraftField::Category).unwrap();
        assert!(message.starts_with("Category must be one of: food"));
    }

    #[test]
    fn test_collects_every_error() {
        let report = validate(&ExpenseDraft::default());
        assert!(!report.is_valid());
        let fields: Vec<_> = report.errors().keys().copied().collect();
        assert_eq!(
            fields,
            [
                DraftField::Amount,
                DraftField::Date,
                DraftField::Note,
                DraftField::Category
            ]
        );
    }

    #[test]
    fn test_fields_from_valid_draft() {
        let draft = valid_draft().with_note("  Groceries  ").with_amount(" 12.50 ");
        let fields = ExpenseFields::try_from(&draft).unwrap();
        assert_eq!(fields.amount().value(), 12.5);
        assert_eq!(fields.date().to_string(), "2024-03-01");
        assert_eq!(fields.note(), "Groceries");
        assert_eq!(fields.category(), Category::Food);
    }

    #[test]
    fn test_fields_from_invalid_draft() {
        let report = ExpenseFields::try_from(&valid_draft().with_amount("0")).unwrap_err();
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.error(DraftField::Amount), Some(AMOUNT_MESSAGE));
    }

    #[test]
    fn test_report_display() {
        let report = validate(&valid_draft().with_amount("").with_note(""));
        assert_eq!(
            report.to_string(),
            "amount: Amount must be greater than 0; note: Note is required"
        );
    }
}
