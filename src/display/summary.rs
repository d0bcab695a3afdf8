//! Summary display formatting

use super::expense::capitalize;
use super::report::{format_percentage, separator};
use crate::reports::ExpenseSummary;

/// Format the expense summary view
///
/// An empty ledger shows an explicit "No expenses recorded." state instead of
/// an average.
pub fn format_summary(summary: &ExpenseSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "Total Amount Spent: {}\n",
        summary.total_spent.format_with_symbol(currency)
    ));

    if summary.is_empty() {
        output.push_str("\nNo expenses recorded.\n");
        return output;
    }

    output.push_str("\nCategory Breakdown:\n");
    for entry in &summary.categories {
        output.push_str(&format!(
            "{}: {} ({})\n",
            capitalize(&entry.category),
            entry.total.format_with_symbol(currency),
            format_percentage(entry.percentage)
        ));
    }

    if let Some(average) = summary.average_spent {
        output.push_str(&format!(
            "\nAverage Spending per Expense: {}\n",
            average.format_with_symbol(currency)
        ));
    }

    output
}
