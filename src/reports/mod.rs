//! Reports module
//!
//! Aggregate figures derived from the ledger.

pub mod summary;

pub use summary::{average_spent, category_totals, total_spent, CategoryTotal, ExpenseSummary};
