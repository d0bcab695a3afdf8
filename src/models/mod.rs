//! Core data models for the expense tracker
//!
//! This module contains the structures of the expense domain: the expense
//! record, the money amount it carries, the category registry, and the
//! ordered ledger that holds a session's records.

pub mod category;
pub mod expense;
pub mod ledger;
pub mod money;

pub use category::{normalize_label, CategoryPolicy, CategoryRegistry};
pub use expense::{Expense, ExpenseEdit, ExpenseField};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
