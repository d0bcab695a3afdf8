//! User settings for the expense tracker
//!
//! Holds the category registry baseline and growth policy along with display
//! preferences. Every field has a serde default so older files keep loading.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::CategoryPolicy;
use crate::storage::write_json_atomic;

/// Categories available on a fresh install
pub const DEFAULT_CATEGORIES: [&str; 4] = ["food", "transportation", "utilities", "entertainment"];

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether categories found in loaded data join the registry
    #[serde(default)]
    pub category_policy: CategoryPolicy,

    /// Baseline category labels (lowercase)
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used when a blank date is defaulted to today (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            category_policy: CategoryPolicy::default(),
            categories: default_categories(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject settings that would fail later at use
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ExpenseError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
            .map_err(|e| ExpenseError::Config(format!("Failed to write settings file: {}", e)))
    }

    /// Remember a category label so the registry keeps it across sessions
    ///
    /// Returns `true` if the label was new.
    pub fn remember_category(&mut self, label: &str) -> bool {
        let label = label.trim().to_lowercase();
        if label.is_empty() || self.categories.contains(&label) {
            return false;
        }
        self.categories.push(label);
        true
    }
}
