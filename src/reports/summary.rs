//! Expense summary
//!
//! Totals, per-category totals and the average spend per expense, computed
//! from the current ledger. Nothing here is persisted.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Expense, Money};

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Number of expenses in this category
    pub count: usize,
    /// Share of the overall total, 0-100
    pub percentage: f64,
}

/// Sum of every amount; zero for an empty ledger
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Totals grouped by category, in order of each category's first appearance
///
/// Categories with no expenses are not listed.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut order: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
            order.push(CategoryTotal {
                category: expense.category.clone(),
                total: Money::zero(),
                count: 0,
                percentage: 0.0,
            });
            order.len() - 1
        });
        order[slot].total += expense.amount;
        order[slot].count += 1;
    }

    let grand_total = total_spent(expenses);
    if !grand_total.is_zero() {
        for entry in &mut order {
            entry.percentage = entry.total.cents() as f64 / grand_total.cents() as f64 * 100.0;
        }
    }

    order
}

/// Average amount per expense; `None` when there are no expenses
pub fn average_spent(expenses: &[Expense]) -> Option<Money> {
    total_spent(expenses).divide(expenses.len())
}

/// All summary figures for a ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub expense_count: usize,
    pub total_spent: Money,
    pub categories: Vec<CategoryTotal>,
    /// `None` means no expenses are recorded
    pub average_spent: Option<Money>,
}

impl ExpenseSummary {
    pub fn generate(expenses: &[Expense]) -> Self {
        Self {
            expense_count: expenses.len(),
            total_spent: total_spent(expenses),
            categories: category_totals(expenses),
            average_spent: average_spent(expenses),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// Total for a category, if it has any expenses
    pub fn category_total(&self, category: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }
}
