//! Category CLI commands

use clap::Subcommand;

use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::normalize_label;
use crate::services::ExpenseService;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List the categories expenses may be filed under
    List,

    /// Add a category to the registry
    Add {
        /// Category name (stored in lowercase)
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    service: &mut ExpenseService<'_>,
    settings: &mut Settings,
    paths: &ExpensePaths,
    cmd: CategoryCommands,
) -> ExpenseResult<()> {
    match cmd {
        CategoryCommands::List => {
            let registry = service.registry();
            println!("Categories ({} policy):", registry.policy());
            for label in registry.labels() {
                let marker = if settings.categories.contains(&label) {
                    ""
                } else {
                    "  (from stored expenses)"
                };
                println!("  {}{}", label, marker);
            }
        }

        CategoryCommands::Add { name } => {
            let label = normalize_label(&name);
            if label.is_empty() {
                return Err(ExpenseError::Validation("Category name cannot be empty".into()));
            }

            let admitted = service.admit_category(&label);
            if settings.remember_category(&label) {
                settings.save(paths)?;
            }

            if admitted {
                println!("Added category: {}", label);
            } else {
                println!("Category already exists: {}", label);
            }
        }
    }

    Ok(())
}
