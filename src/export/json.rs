//! JSON export
//!
//! A full snapshot of the ledger with the registry and summary figures.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryRegistry, Expense};
use crate::reports::ExpenseSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub categories: Vec<String>,
    pub expenses: Vec<Expense>,
    pub summary: ExpenseSummary,
}

impl FullExport {
    pub fn new(expenses: &[Expense], registry: &CategoryRegistry) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories: registry.labels(),
            expenses: expenses.to_vec(),
            summary: ExpenseSummary::generate(expenses),
        }
    }
}

/// Export the full snapshot as JSON
pub fn export_full_json<W: Write>(
    expenses: &[Expense],
    registry: &CategoryRegistry,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::new(expenses, registry);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryPolicy, Money};

    #[test]
    fn test_export_full_json() {
        let registry = CategoryRegistry::new(["food", "utilities"], CategoryPolicy::Fixed);
        let expenses = vec![Expense::new("2024-01-01", Money::from_cents(1250), "lunch", "food")];

        let mut output = Vec::new();
        export_full_json(&expenses, &registry, &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["categories"], serde_json::json!(["food", "utilities"]));
        assert_eq!(value["expenses"][0]["amount"], 12.5);
        assert_eq!(value["summary"]["total_spent"], 12.5);
        assert_eq!(value["summary"]["average_spent"], 12.5);
    }

    #[test]
    fn test_empty_average_is_null() {
        let registry = CategoryRegistry::new(["food"], CategoryPolicy::Fixed);

        let mut output = Vec::new();
        export_full_json(&[], &registry, &mut output, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(value["summary"]["average_spent"].is_null());
    }
}
