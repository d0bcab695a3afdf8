//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and the audit trail that
//! accompanies every committed mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json_value, write_atomic, write_json_atomic};

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Expense;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Record an appended expense in the audit log
    pub fn log_create(&self, position: usize, expense: &Expense) {
        self.log(AuditEntry::create(position, expense));
    }

    /// Record an edited expense in the audit log
    pub fn log_update(&self, position: usize, before: &Expense, after: &Expense) {
        self.log(AuditEntry::update(position, before, after));
    }

    /// Record a deleted expense in the audit log
    pub fn log_delete(&self, position: usize, expense: &Expense) {
        self.log(AuditEntry::delete(position, expense));
    }

    // The ledger is already saved when this runs; an audit failure must not
    // turn a committed mutation into an error.
    fn log(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.log(&entry) {
            warn!(error = %e, operation = %entry.operation, "failed to write audit entry");
        }
    }
}
