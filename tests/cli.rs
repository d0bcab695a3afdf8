use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("EXPENSES_LOG");
    cmd
}

fn add(data_dir: &TempDir, amount: &str, description: &str, category: &str, date: &str) {
    expenses(data_dir)
        .args(["add", amount, description, "--category", category, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));
}

#[test]
fn test_add_then_summary() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "10", "groceries", "food", "2024-03-01");
    add(&data_dir, "30", "bus pass", "transportation", "2024-03-02");

    expenses(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Amount Spent: $40.00"))
        .stdout(predicate::str::contains("Food: $10.00 (25%)"))
        .stdout(predicate::str::contains("Transportation: $30.00 (75%)"))
        .stdout(predicate::str::contains("Average Spending per Expense: $20.00"));

    let saved = std::fs::read_to_string(data_dir.path().join("expenses.json")).unwrap();
    assert!(saved.contains("\"groceries\""));
}

#[test]
fn test_summary_of_empty_ledger() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Amount Spent: $0.00"))
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_add_rejects_unknown_category() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "5", "movie", "--category", "rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category 'rent'"))
        .stderr(predicate::str::contains("entertainment"));

    assert!(!data_dir.path().join("expenses.json").exists());
}

#[test]
fn test_add_rejects_non_numeric_amount() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "twelve", "lunch", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("twelve"));
}

#[test]
fn test_add_with_new_category() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "900", "rent", "--category", "Housing", "--new-category"])
        .assert()
        .success();

    expenses(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("housing"));
}

#[test]
fn test_edit_then_list() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "12.50", "lunch", "food", "2024-01-01");

    expenses(&data_dir)
        .args(["edit", "1", "amount", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense edited successfully!"));

    expenses(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Date: 2024-01-01, Amount: $15.00, Description: lunch, Category: food",
        ));
}

#[test]
fn test_delete_out_of_range_fails() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "3", "coffee", "food", "2024-01-01");

    expenses(&data_dir)
        .args(["delete", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index 2"));

    expenses(&data_dir).args(["delete", "1"]).assert().success();

    expenses(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_export_csv() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "4.25", "bus", "transportation", "2024-02-10");
    let output = data_dir.path().join("out.csv");

    expenses(&data_dir)
        .args(["export", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expense(s)"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        "Date,Description,Amount,Category\n2024-02-10,bus,4.25,transportation\n"
    );
}

#[test]
fn test_export_default_path_follows_format() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "4.25", "bus", "transportation", "2024-02-10");

    expenses(&data_dir).args(["export", "-f", "json"]).assert().success();
    expenses(&data_dir).args(["export", "-f", "xlsx"]).assert().success();

    let snapshot =
        std::fs::read_to_string(data_dir.path().join("expenses-export.json")).unwrap();
    assert!(snapshot.contains("\"schema_version\""));

    expenses(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: bus"));
    assert!(data_dir.path().join("expenses.xlsx").exists());
    assert!(!data_dir.path().join("expenses.csv").exists());
}

#[test]
fn test_invalid_date_format_setting_is_reported() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    expenses(&data_dir)
        .args(["add", "3", "tea", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}

#[test]
fn test_history_records_changes() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "8", "lunch", "food", "2024-01-01");
    expenses(&data_dir).args(["delete", "1"]).assert().success();

    expenses(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("ADD #1"))
        .stdout(predicate::str::contains("DELETE #1"));
}

#[test]
fn test_corrupt_ledger_is_reported() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("expenses.json"), "{ not json").unwrap();

    expenses(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expenses.json"));
}

#[test]
fn test_menu_reads_stdin() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .arg("menu")
        .write_stdin("1\n7.5\nsnack\nfood\n2024-05-05\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stdout(predicate::str::contains("Total Amount Spent: $7.50"))
        .stdout(predicate::str::contains("Exiting..."));
}
