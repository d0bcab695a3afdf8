//! Expense repository for JSON storage
//!
//! The persisted ledger is a flat JSON list of expense objects. On read an
//! object of the form `{"schema_version": n, "expenses": [...]}` is accepted
//! as well; writes always produce the bare list.
//!
//! There is no locking: two processes saving to the same file will lose one
//! another's updates. Supporting concurrent sessions needs an exclusive lock
//! or a version check around `load`/`save`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json_value, write_json_atomic};

/// Versioned wrapper accepted on read
#[derive(Debug, Deserialize)]
struct VersionedExpenses {
    #[serde(default)]
    schema_version: Option<u32>,
    expenses: Vec<Value>,
}

/// Repository for the persisted ledger
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all expenses in stored order
    ///
    /// A missing or blank file yields an empty list.
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let Some(document) = read_json_value(&self.path)? else {
            debug!(path = %self.path.display(), "no persisted expenses, starting empty");
            return Ok(Vec::new());
        };

        let items = match document {
            Value::Array(items) => items,
            Value::Object(_) => {
                let versioned: VersionedExpenses =
                    serde_json::from_value(document).map_err(|e| self.corrupt(e))?;
                debug!(
                    schema_version = ?versioned.schema_version,
                    "reading versioned expense file"
                );
                versioned.expenses
            }
            other => {
                return Err(self.corrupt(format!(
                    "expected a list of expenses, found {}",
                    json_kind(&other)
                )))
            }
        };

        let expenses = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let expense: Expense = serde_json::from_value(item)
                    .map_err(|e| self.corrupt(format!("expense #{}: {}", i + 1, e)))?;
                if expense.amount.is_negative() {
                    warn!(position = i + 1, amount = %expense.amount, "loaded negative amount");
                }
                Ok(expense)
            })
            .collect::<ExpenseResult<Vec<_>>>()?;

        debug!(count = expenses.len(), path = %self.path.display(), "loaded expenses");
        Ok(expenses)
    }

    /// Replace the persisted ledger with `expenses`
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &expenses)?;
        debug!(count = expenses.len(), path = %self.path.display(), "saved expenses");
        Ok(())
    }

    fn corrupt(&self, detail: impl std::fmt::Display) -> ExpenseError {
        ExpenseError::PersistedStateCorrupt(format!("{}: {}", self.path.display(), detail))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("2024-01-01", Money::from_cents(1250), "lunch", "food"),
            Expense::new("2024-01-02", Money::from_cents(2000), "bus pass", "transportation"),
            Expense::new("2024-01-03", Money::from_cents(999), "movie, late", "entertainment"),
        ]
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (_temp_dir, repo) = create_test_repo();
        let expenses = sample();

        repo.save(&expenses).unwrap();
        assert_eq!(repo.load().unwrap(), expenses);
    }

    #[test]
    fn test_saved_file_is_flat_list() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&sample()[..1]).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{
                "date": "2024-01-01",
                "amount": 12.5,
                "description": "lunch",
                "category": "food"
            }])
        );
    }

    #[test]
    fn test_reads_original_format() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[{"date": "2024-03-01", "amount": 12.0, "description": "pizza", "category": "food"}]"#,
        )
        .unwrap();

        let expenses = repo.load().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, Money::from_cents(1200));
    }

    #[test]
    fn test_reads_versioned_wrapper() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"{"schema_version": 2, "expenses": [{"date": "2024-03-01", "amount": 4, "description": "tea", "category": "food"}]}"#,
        )
        .unwrap();

        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[{"date": "2024-03-01", "amount": 4, "description": "tea", "category": "food", "tags": ["hot"]}]"#,
        )
        .unwrap();

        let expenses = repo.load().unwrap();
        repo.save(&expenses).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(raw[0]["tags"], serde_json::json!(["hot"]));
    }

    #[test]
    fn test_malformed_record_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[{"date": "2024-03-01", "amount": "four", "description": "tea", "category": "food"}]"#,
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        match err {
            ExpenseError::PersistedStateCorrupt(msg) => assert!(msg.contains("expense #1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_top_level_shape_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "42").unwrap();

        assert!(matches!(
            repo.load(),
            Err(ExpenseError::PersistedStateCorrupt(_))
        ));
    }

    #[test]
    fn test_zero_length_file_is_empty_ledger() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "").unwrap();

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_absurd_amount_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[
                {"date": "2024-03-01", "amount": 60000000000000000, "description": "a", "category": "food"},
                {"date": "2024-03-02", "amount": 60000000000000000, "description": "b", "category": "food"}
            ]"#,
        )
        .unwrap();

        match repo.load().unwrap_err() {
            ExpenseError::PersistedStateCorrupt(msg) => assert!(msg.contains("expense #1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), [0x5b, 0xff, 0xfe, 0x5d]).unwrap();

        assert!(matches!(
            repo.load(),
            Err(ExpenseError::PersistedStateCorrupt(_))
        ));
    }
}
