//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and the save-after-every-mutation rule.

pub mod expense;

pub use expense::{ExpenseService, NewExpense};
