//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Types of ledger mutations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "ADD"),
            Operation::Update => write!(f, "EDIT"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// `position` is the 1-based ledger position at the moment of the change.
/// Positions shift after deletes, so older entries may no longer point at the
/// same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub position: usize,

    /// The expense before the operation (for edits/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The expense after the operation (for adds/edits)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for an appended expense
    pub fn create(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            position,
            before: None,
            after: serde_json::to_value(expense).ok(),
            diff_summary: None,
        }
    }

    /// Entry for an edited expense
    pub fn update(position: usize, before: &Expense, after: &Expense) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => super::generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            position,
            before,
            after,
            diff_summary,
        }
    }

    /// Entry for a deleted expense
    pub fn delete(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            position,
            before: serde_json::to_value(expense).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.position
        );

        let subject = self.after.as_ref().or(self.before.as_ref());
        if let Some(description) = subject
            .and_then(|v| v.get("description"))
            .and_then(|d| d.as_str())
        {
            output.push_str(&format!(" ({})", description));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
