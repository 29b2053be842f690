//! Expense CLI commands
//!
//! Implements the command-line front end over the expense store.

use std::io::{self, Write};

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_expense_details, format_expense_list, format_month_list, DisplayStyle,
};
use crate::error::{ExpenseError, ExpenseResult, PersistenceWarning};
use crate::models::{Category, ExpenseDraft, ExpenseFields, ExpenseId};
use crate::reports::summarize;
use crate::services::{available_months, filter_expenses, ExpenseFilter, ExpenseStore};
use crate::storage::BlobStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the money was spent on
        note: String,
        /// Category (food, travel, bills, entertainment, shopping, health, other)
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Filter by category, or "all"
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by month (YYYY-MM), or "all"
        #[arg(short, long)]
        month: Option<String>,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Summarize spending by category and month
    Summary {
        /// Filter by category, or "all"
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by month (YYYY-MM), or "all"
        #[arg(short, long)]
        month: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the months that have expenses, newest first
    Months,
    /// List the expense categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command<S: BlobStore>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let style = DisplayStyle::from(settings);

    match cmd {
        ExpenseCommands::Add {
            amount,
            note,
            category,
            date,
        } => {
            let today = chrono::Local::now().date_naive();
            let mut draft = ExpenseDraft::blank(today)
                .with_amount(amount)
                .with_note(note)
                .with_category(settings.default_category.as_str());
            if let Some(category) = category {
                draft = draft.with_category(category);
            }
            if let Some(date) = date {
                draft = draft.with_date(date);
            }

            let fields = ExpenseFields::try_from(&draft)?;
            let (expense, warning) = store.add(fields).into_parts();
            report_warning(warning);

            println!("Added expense:");
            print!("{}", format_expense_details(&expense, &style));
        }

        ExpenseCommands::List {
            category,
            month,
            limit,
        } => {
            let filter = ExpenseFilter::parse(category.as_deref(), month.as_deref())?;
            let mut expenses = filter_expenses(store.list(), &filter);
            let matched = expenses.len();
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            if !expenses.is_empty() || matched == 0 {
                print!("{}", format_expense_list(&expenses, &style));
            }
            if matched > 0 {
                println!("\nShowing {} of {} expenses", expenses.len(), matched);
            }
        }

        ExpenseCommands::Show { id } => {
            let id = parse_id(&id)?;
            let expense = store
                .get(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
            print!("{}", format_expense_details(expense, &style));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            note,
            category,
            date,
        } => {
            let id = parse_id(&id)?;
            let expense = store
                .get(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            let mut draft = ExpenseDraft::from_expense(expense);
            if let Some(amount) = amount {
                draft = draft.with_amount(amount);
            }
            if let Some(note) = note {
                draft = draft.with_note(note);
            }
            if let Some(category) = category {
                draft = draft.with_category(category);
            }
            if let Some(date) = date {
                draft = draft.with_date(date);
            }

            let fields = ExpenseFields::try_from(&draft)?;
            let (updated, warning) = store.update(id, fields)?.into_parts();
            report_warning(warning);

            println!("Updated expense:");
            print!("{}", format_expense_details(&updated, &style));
        }

        ExpenseCommands::Delete { id, force } => {
            let id = parse_id(&id)?;
            let expense = store
                .get(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            if !force {
                println!("About to delete expense:");
                print!("{}", format_expense_details(expense, &style));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let (removed, warning) = store.remove(id).into_parts();
            report_warning(warning);
            if let Some(removed) = removed {
                println!(
                    "Deleted expense: {} ({} {})",
                    removed.id,
                    removed.amount.format_with_symbol(style.currency_symbol),
                    removed.note
                );
            }
        }

        ExpenseCommands::Summary {
            category,
            month,
            json,
        } => {
            let filter = ExpenseFilter::parse(category.as_deref(), month.as_deref())?;
            let summary = summarize(filter_expenses(store.list(), &filter));

            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &summary)?;
                writeln!(out)?;
            } else {
                summary.format_terminal(&mut out, style.currency_symbol)?;
            }
        }

        ExpenseCommands::Months => {
            print!("{}", format_month_list(&available_months(store.list())));
        }

        ExpenseCommands::Categories => {
            for category in Category::ALL {
                println!("{:<14} {}", category.as_str(), category.label());
            }
        }
    }

    Ok(())
}

fn parse_id(text: &str) -> ExpenseResult<ExpenseId> {
    text.parse()
        .map_err(|_| ExpenseError::InvalidInput(format!("Invalid expense ID: '{}'", text)))
}

/// Print a persistence warning without failing the command
pub fn report_warning(warning: Option<PersistenceWarning>) {
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }
}
