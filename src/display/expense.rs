//! Expense display formatting

use crate::models::{Expense, ExpenseField};

/// Format one expense as a numbered listing line
pub fn format_expense_row(position: usize, expense: &Expense, currency: &str) -> String {
    format!(
        "{}. Date: {}, Amount: {}, Description: {}, Category: {}",
        position,
        expense.date,
        expense.amount.format_with_symbol(currency),
        expense.description,
        expense.category
    )
}

/// Format all expenses with their 1-based positions
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::from("Recorded Expenses:\n");
    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format_expense_row(i + 1, expense, currency));
        output.push('\n');
    }
    output
}

/// Format the editable fields of one expense as a numbered menu
pub fn format_expense_fields(expense: &Expense) -> String {
    let mut output = String::new();
    for (i, field) in ExpenseField::ALL.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}: {}\n",
            i + 1,
            capitalize(field.name()),
            field.value_of(expense)
        ));
    }
    output
}

/// Uppercase the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
