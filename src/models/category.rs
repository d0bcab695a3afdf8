//! Category registry
//!
//! The set of labels an expense may be filed under. Labels are compared in
//! lowercase. The registry grows when a label is admitted and never shrinks
//! on its own.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// How the registry reacts to labels it has not seen before
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPolicy {
    /// Only the baseline and explicitly admitted labels are valid
    Fixed,
    /// Labels found in loaded data are admitted at load time
    #[default]
    AutoAdmit,
}

impl fmt::Display for CategoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryPolicy::Fixed => write!(f, "fixed"),
            CategoryPolicy::AutoAdmit => write!(f, "auto_admit"),
        }
    }
}

/// Normalize a label for storage and comparison
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Valid category labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    labels: BTreeSet<String>,
    policy: CategoryPolicy,
}

impl CategoryRegistry {
    /// Create a registry seeded with a baseline set of labels
    pub fn new<I, S>(baseline: I, policy: CategoryPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = baseline
            .into_iter()
            .map(|label| normalize_label(label.as_ref()))
            .filter(|label| !label.is_empty())
            .collect();
        Self { labels, policy }
    }

    pub fn policy(&self) -> CategoryPolicy {
        self.policy
    }

    /// Case-insensitive membership test
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(&normalize_label(label))
    }

    /// Add a label. Returns `true` if it was not already present.
    pub fn admit(&mut self, label: &str) -> bool {
        let label = normalize_label(label);
        if label.is_empty() {
            return false;
        }
        self.labels.insert(label)
    }

    /// Record a label seen in loaded data, admitting it under `AutoAdmit`
    ///
    /// Returns `true` if the registry grew.
    pub fn observe(&mut self, label: &str) -> bool {
        match self.policy {
            CategoryPolicy::AutoAdmit => self.admit(label),
            CategoryPolicy::Fixed => false,
        }
    }

    /// Check a label for use on a record, returning its normalized form
    pub fn validate(&self, label: &str) -> ExpenseResult<String> {
        let normalized = normalize_label(label);
        if self.labels.contains(&normalized) {
            Ok(normalized)
        } else {
            Err(ExpenseError::invalid_category(normalized, self.labels()))
        }
    }

    /// All labels in sorted order
    pub fn labels(&self) -> Vec<String> {
        self.labels.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
