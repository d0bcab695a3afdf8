//! Display formatting for terminal output

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_expense_fields, format_expense_list, format_expense_row};
pub use summary::format_summary;
