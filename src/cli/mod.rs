//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer. It is
//! the only place that talks to the user: collecting raw input, turning
//! amount text into numbers, defaulting blank dates to today, and rendering
//! results.

pub mod category;
pub mod expense;
pub mod export;
pub mod history;
pub mod menu;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{
    handle_add, handle_delete, handle_edit, handle_list, handle_summary, AddArgs, EditArgs,
};
pub use export::{handle_export, ExportArgs};
pub use history::handle_history;
pub use menu::Menu;

use std::fmt::Write;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};

/// Use `input` as the date, or today's date when it is blank
pub fn resolve_date(input: Option<&str>, settings: &Settings) -> ExpenseResult<String> {
    match input.map(str::trim) {
        Some(date) if !date.is_empty() => Ok(date.to_string()),
        _ => today(settings),
    }
}

/// Today's local date in the configured format
pub fn today(settings: &Settings) -> ExpenseResult<String> {
    let mut date = String::new();
    write!(date, "{}", chrono::Local::now().format(&settings.date_format)).map_err(|_| {
        ExpenseError::Config(format!("Invalid date_format '{}'", settings.date_format))
    })?;
    Ok(date)
}
