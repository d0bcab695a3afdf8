//! YAML export
//!
//! The same snapshot as the JSON export, for human-readable backup.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::models::{CategoryRegistry, Expense};

/// Export the full snapshot as YAML
pub fn export_full_yaml<W: Write>(
    expenses: &[Expense],
    registry: &CategoryRegistry,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = FullExport::new(expenses, registry);
    let err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense tracker export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
