//! Expense Tracker - personal expense ledger
//!
//! This library provides the core of a small expense tracker: an ordered
//! ledger of expenses addressed by 1-based position, a category registry
//! that gates which labels an expense may carry, per-category summaries,
//! and JSON persistence that is rewritten after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, categories, the ledger)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging of every change
//! - `services`: The expense session tying ledger, registry and storage together
//! - `reports`: Totals, category breakdown and averages
//! - `export`: CSV, JSON and YAML export
//! - `display`: Text formatting for terminal output
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let service = ExpenseService::load(&storage, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
