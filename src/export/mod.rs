//! Export module for the expense tracker
//!
//! - CSV: the spreadsheet artifact with the fixed `Date, Description, Amount, Category` header
//! - JSON: machine-readable full snapshot
//! - YAML: human-readable full snapshot
//! - XLSX: the same sheet as the CSV, with numeric amount cells
//!
//! Exports replace any existing file at the destination.

pub mod csv;
pub mod json;
pub mod xlsx;
pub mod yaml;

pub use self::csv::{export_expenses_csv, EXPORT_HEADER};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use xlsx::export_expenses_xlsx;
pub use yaml::export_full_yaml;

use std::path::Path;

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryRegistry, Expense};
use crate::storage::write_atomic;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Spreadsheet-compatible CSV (expenses only)
    #[default]
    Csv,
    /// Full snapshot as JSON
    Json,
    /// Full snapshot as YAML
    Yaml,
    /// Excel workbook (expenses only)
    Xlsx,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Write an export of `expenses` to `destination`, replacing it atomically
pub fn export_to_path(
    expenses: &[Expense],
    registry: &CategoryRegistry,
    destination: &Path,
    format: ExportFormat,
) -> ExpenseResult<()> {
    let mut failure: Option<ExpenseError> = None;

    let written = write_atomic(destination, |writer| {
        let result = match format {
            ExportFormat::Csv => export_expenses_csv(expenses, &mut *writer),
            ExportFormat::Json => export_full_json(expenses, registry, writer, true),
            ExportFormat::Yaml => export_full_yaml(expenses, registry, writer),
            ExportFormat::Xlsx => export_expenses_xlsx(expenses, writer),
        };
        result.map_err(|e| {
            let message = e.to_string();
            failure = Some(e);
            message
        })
    });

    if let Some(err) = failure {
        return Err(err);
    }
    written.map_err(|e| match e {
        ExpenseError::PersistenceWriteFailure(msg) => ExpenseError::Export(msg),
        other => other,
    })?;

    info!(
        path = %destination.display(),
        count = expenses.len(),
        format = ?format,
        "exported expenses"
    );
    Ok(())
}
