use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_cli::cli::{handle_expense_command, report_warning, ExpenseCommands};
use expense_cli::config::{paths::ExpensePaths, settings::Settings};
use expense_cli::services::ExpenseStore;
use expense_cli::storage::open_file_repository;
use expense_cli::ExpenseError;

/// Environment variable holding a tracing filter; overrides the settings
const LOG_ENV: &str = "EXPENSE_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track personal expenses from the terminal",
    long_about = "expense-cli records what you spend, files it under a category, \
                  and summarizes your spending by category and month."
)]
struct Cli {
    /// Directory holding settings and data
    #[arg(long, global = true, env = "EXPENSE_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config {
        /// Write the settings file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let (mut store, warning) = ExpenseStore::open(open_file_repository(&paths)?).into_parts();
            report_warning(warning);

            match handle_expense_command(&mut store, &settings, cmd) {
                Ok(()) => {}
                Err(ExpenseError::Validation(report)) => {
                    eprintln!("Invalid expense:");
                    for (field, message) in report.errors() {
                        eprintln!("  {}: {}", field, message);
                    }
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Some(Commands::Config { init }) => {
            if init && !paths.is_initialized() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }

            println!("expense-cli Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default category: {}", settings.default_category);
            println!("  Log level:        {}", settings.log_level);
        }
        None => {
            println!("expense-cli - Track personal expenses from the terminal");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(ExitCode::SUCCESS)
}
