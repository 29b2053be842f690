use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.arg("--data-dir")
        .arg(dir)
        .env_remove("EXPENSE_CLI_DATA_DIR")
        .env_remove("EXPENSE_LOG");
    cmd
}

fn stored(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join("data").join("expenses.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn add(dir: &Path, amount: &str, note: &str, category: &str, date: &str) {
    expense(dir)
        .args(["add", amount, note, "-c", category, "-d", date])
        .assert()
        .success();
}

#[test]
fn add_then_list() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "12.5", "Lunch", "food", "2024-03-01");

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("Food"));

    let records = stored(temp_dir.path());
    let first = &records[0];
    assert_eq!(first["amount"], 12.5);
    assert_eq!(first["date"], "2024-03-01");
    assert_eq!(first["note"], "Lunch");
    assert_eq!(first["category"], "food");
    assert!(first["id"].is_i64());
    assert!(first["createdAt"].is_string());
}

#[test]
fn invalid_add_reports_each_field() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["add", "0", " ", "-d", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount: Amount must be greater than 0"))
        .stderr(predicate::str::contains("date: Date must be a valid date (YYYY-MM-DD)"))
        .stderr(predicate::str::contains("note: Note is required"));

    assert!(!temp_dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn list_filters_by_category_and_month() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "50", "Groceries", "food", "2024-03-01");
    add(temp_dir.path(), "20", "Train", "travel", "2024-03-15");
    add(temp_dir.path(), "30", "Takeaway", "food", "2024-04-01");

    expense(temp_dir.path())
        .args(["list", "-c", "food", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Train").not())
        .stdout(predicate::str::contains("Takeaway").not());

    expense(temp_dir.path())
        .args(["list", "-c", "all", "-m", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 3 of 3 expenses"));
}

#[test]
fn list_limit_zero_reports_matches() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "12.5", "Lunch", "food", "2024-03-01");

    expense(temp_dir.path())
        .args(["list", "-l", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 1 expenses"))
        .stdout(predicate::str::contains("No expenses found.").not());
}

#[test]
fn invalid_date_format_setting_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.json"), r#"{"date_format":"%Q"}"#).unwrap();

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn summary_and_months() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "50", "Groceries", "food", "2024-03-01");
    add(temp_dir.path(), "20", "Train", "travel", "2024-03-15");
    add(temp_dir.path(), "30", "Takeaway", "food", "2024-04-01");

    expense(temp_dir.path())
        .args(["summary", "-m", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$70.00"))
        .stdout(predicate::str::contains("March 2024"))
        .stdout(predicate::str::contains("April 2024").not());

    expense(temp_dir.path())
        .args(["summary", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 100.0"))
        .stdout(predicate::str::contains("\"byCategory\""))
        .stdout(predicate::str::contains("\"2024-04\": 30.0"));

    expense(temp_dir.path())
        .arg("months")
        .assert()
        .success()
        .stdout("2024-04  April 2024\n2024-03  March 2024\n");
}

#[test]
fn edit_then_delete() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "12.5", "Lunch", "food", "2024-03-01");
    let id = stored(temp_dir.path())[0]["id"].to_string();

    expense(temp_dir.path())
        .args(["edit", &id, "-a", "15", "-c", "entertainment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$15.00"));

    let records = stored(temp_dir.path());
    assert_eq!(records[0]["amount"], 15.0);
    assert_eq!(records[0]["category"], "entertainment");
    assert_eq!(records[0]["note"], "Lunch");

    expense(temp_dir.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));
    assert_eq!(stored(temp_dir.path()).as_array().unwrap().len(), 1);

    expense(temp_dir.path())
        .args(["delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));
    assert_eq!(stored(temp_dir.path()), serde_json::json!([]));
}

#[test]
fn unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 42"));
}

#[test]
fn corrupt_data_warns_and_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("expenses.json"), "{ not json").unwrap();

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."))
        .stderr(predicate::str::contains("Warning:"));

    add(temp_dir.path(), "5", "Coffee", "food", "2024-03-01");
    assert_eq!(stored(temp_dir.path()).as_array().unwrap().len(), 1);
}

#[test]
fn config_init_writes_settings() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default category: food"));

    assert!(temp_dir.path().join("config.json").exists());
}

#[test]
fn default_category_comes_from_settings() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"default_category":"bills","currency_symbol":"€"}"#,
    )
    .unwrap();

    expense(temp_dir.path())
        .args(["add", "80", "Electricity", "-d", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€80.00"));

    assert_eq!(stored(temp_dir.path())[0]["category"], "bills");
}
