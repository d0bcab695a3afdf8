//! Custom error types for the expense tracker
//!
//! Validation errors (category, index, numeric input) are recoverable and are
//! reported to the user without ending the session. Persistence errors are
//! not: the caller should stop or alert loudly.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Category is not in the registry
    #[error("Invalid category '{category}'. Available categories: {}", available.join(", "))]
    InvalidCategory {
        category: String,
        available: Vec<String>,
    },

    /// 1-based position does not exist in the ledger
    #[error("Invalid index {index}: ledger has {len} expense(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Amount text could not be parsed as a number
    #[error("Invalid amount: {0}")]
    InvalidNumericInput(String),

    /// The persisted ledger could not be parsed
    #[error("Persisted state is corrupt: {0}")]
    PersistedStateCorrupt(String),

    /// The ledger could not be written to disk
    #[error("Failed to persist expenses: {0}")]
    PersistenceWriteFailure(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create an "invalid category" error listing the admissible labels
    pub fn invalid_category(category: impl Into<String>, available: Vec<String>) -> Self {
        Self::InvalidCategory {
            category: category.into(),
            available,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Errors the front end can report and continue from
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidCategory { .. }
                | Self::IndexOutOfRange { .. }
                | Self::InvalidNumericInput(_)
        )
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
