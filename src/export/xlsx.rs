//! XLSX export
//!
//! The CSV sheet as an Excel workbook. Amounts are numeric cells so
//! spreadsheet formulas work on them directly.

use std::io::Write;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::csv::EXPORT_HEADER;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

const SHEET_NAME: &str = "Expenses";

/// Write all expenses as a single-sheet workbook
pub fn export_expenses_xlsx<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let buffer = build_workbook(expenses).map_err(|e| ExpenseError::Export(e.to_string()))?;
    writer
        .write_all(&buffer)
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

fn build_workbook(expenses: &[Expense]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let amount_format = Format::new().set_num_format("0.00");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in EXPORT_HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (i, expense) in expenses.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, expense.date.as_str())?;
        worksheet.write_string(row, 1, expense.description.as_str())?;
        worksheet.write_number_with_format(row, 2, expense.amount.as_f64(), &amount_format)?;
        worksheet.write_string(row, 3, expense.category.as_str())?;
    }

    workbook.save_to_buffer()
}
