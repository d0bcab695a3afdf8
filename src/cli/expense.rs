//! Expense CLI commands
//!
//! One-shot versions of add, list, edit, delete and summary.

use clap::Args;

use super::resolve_date;
use crate::config::{ExpensePaths, Settings};
use crate::display::{format_expense_list, format_expense_row, format_summary};
use crate::error::ExpenseResult;
use crate::models::{ExpenseEdit, ExpenseField, Money};
use crate::services::{ExpenseService, NewExpense};

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "12.50")
    pub amount: String,
    /// Brief description
    pub description: String,
    /// Category of the expense
    #[arg(short, long)]
    pub category: String,
    /// Date of the expense (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Add the category to the registry if it is not there yet
    #[arg(long)]
    pub new_category: bool,
}

/// Arguments for `edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Position of the expense as shown by `list` (starting at 1)
    pub index: usize,
    /// Field to change: date, amount, description or category
    pub field: String,
    /// New value for the field
    pub value: String,
}

pub fn handle_add(
    service: &mut ExpenseService<'_>,
    settings: &mut Settings,
    paths: &ExpensePaths,
    args: AddArgs,
) -> ExpenseResult<()> {
    let amount = Money::parse(&args.amount)?;

    if args.new_category && service.admit_category(&args.category) {
        settings.remember_category(&args.category);
        settings.save(paths)?;
    }

    let input = NewExpense {
        date: resolve_date(args.date.as_deref(), settings)?,
        amount,
        description: args.description,
        category: args.category,
    };

    let position = service.expenses().len() + 1;
    let added = service.add(input)?;
    println!("Expense added successfully!");
    println!("{}", format_expense_row(position, added, &settings.currency_symbol));
    Ok(())
}

pub fn handle_list(service: &ExpenseService<'_>, settings: &Settings) {
    print!(
        "{}",
        format_expense_list(service.expenses(), &settings.currency_symbol)
    );
}

pub fn handle_edit(
    service: &mut ExpenseService<'_>,
    settings: &Settings,
    args: EditArgs,
) -> ExpenseResult<()> {
    let field: ExpenseField = args.field.parse()?;
    let edit = ExpenseEdit::parse(field, &args.value)?;

    let edited = service.edit(args.index, edit)?;
    println!("Expense edited successfully!");
    println!(
        "{}",
        format_expense_row(args.index, edited, &settings.currency_symbol)
    );
    Ok(())
}

pub fn handle_delete(service: &mut ExpenseService<'_>, index: usize) -> ExpenseResult<()> {
    let removed = service.delete(index)?;
    println!("Expense deleted successfully!");
    println!("Removed: {} ({})", removed.description, removed.amount);
    Ok(())
}

pub fn handle_summary(service: &ExpenseService<'_>, settings: &Settings) {
    print!(
        "{}",
        format_summary(&service.summary(), &settings.currency_symbol)
    );
}
