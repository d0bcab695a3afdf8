//! CSV export
//!
//! The spreadsheet artifact: a fixed header row followed by one row per
//! expense in ledger order. Column order is Date, Description, Amount,
//! Category, which is not the field order of the record. Existing consumers
//! depend on it.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of the exported sheet
pub const EXPORT_HEADER: [&str; 4] = ["Date", "Description", "Amount", "Category"];

/// Write all expenses as CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let amount = expense.amount.format_plain();
        csv_writer
            .write_record([
                expense.date.as_str(),
                expense.description.as_str(),
                amount.as_str(),
                expense.category.as_str(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn export_string(expenses: &[Expense]) -> String {
        let mut output = Vec::new();
        export_expenses_csv(expenses, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_ledger() {
        assert_eq!(export_string(&[]), "Date,Description,Amount,Category\n");
    }

    #[test]
    fn test_rows_follow_header_column_order() {
        let expenses = vec![
            Expense::new("2024-01-01", Money::from_cents(1000), "lunch", "food"),
            Expense::new("2024-01-02", Money::from_cents(2000), "bus", "transportation"),
        ];

        let output = export_string(&expenses);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Date,Description,Amount,Category",
                "2024-01-01,lunch,10.00,food",
                "2024-01-02,bus,20.00,transportation",
            ]
        );
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let expenses = vec![Expense::new(
            "2024-01-01",
            Money::from_cents(450),
            "coffee, \"large\"",
            "food",
        )];

        let output = export_string(&expenses);
        assert!(output.contains("\"coffee, \"\"large\"\"\""));
    }
}
