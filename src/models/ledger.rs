//! In-memory record store
//!
//! Expenses are kept in entry order. Positions are 1-based and recomputed
//! from the current ordering: deleting an expense shifts every later
//! position down by one.

use super::expense::{Expense, ExpenseEdit};
use crate::error::{ExpenseError, ExpenseResult};

/// The ordered collection of expenses for one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from already-ordered expenses
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Add an expense at the end
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// All expenses in entry order
    pub fn get_all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get the expense at a 1-based position
    pub fn get(&self, index: usize) -> ExpenseResult<&Expense> {
        let pos = self.position(index)?;
        Ok(&self.expenses[pos])
    }

    /// Change one field of the expense at a 1-based position
    ///
    /// Returns the expense as it was before the edit.
    pub fn edit(&mut self, index: usize, edit: ExpenseEdit) -> ExpenseResult<Expense> {
        let pos = self.position(index)?;
        let before = self.expenses[pos].clone();
        self.expenses[pos].apply(edit);
        Ok(before)
    }

    /// Remove the expense at a 1-based position and return it
    pub fn delete(&mut self, index: usize) -> ExpenseResult<Expense> {
        let pos = self.position(index)?;
        Ok(self.expenses.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn position(&self, index: usize) -> ExpenseResult<usize> {
        if index < 1 || index > self.expenses.len() {
            return Err(ExpenseError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn expense(description: &str, cents: i64, category: &str) -> Expense {
        Expense::new("2024-01-01", Money::from_cents(cents), description, category)
    }

    fn two_expenses() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.append(expense("lunch", 1000, "food"));
        ledger.append(expense("bus", 2000, "transportation"));
        ledger
    }

    #[test]
    fn test_append_keeps_entry_order() {
        let ledger = two_expenses();
        let descriptions: Vec<_> = ledger.get_all().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["lunch", "bus"]);
    }

    #[test]
    fn test_edit_changes_one_field() {
        let mut ledger = two_expenses();
        let before = ledger
            .edit(1, ExpenseEdit::Category("utilities".into()))
            .unwrap();

        assert_eq!(before.category, "food");
        let edited = ledger.get(1).unwrap();
        assert_eq!(edited.category, "utilities");
        assert_eq!(edited.description, "lunch");
        assert_eq!(edited.amount, Money::from_cents(1000));
    }

    #[test]
    fn test_index_bounds() {
        let mut ledger = two_expenses();
        assert!(matches!(
            ledger.edit(0, ExpenseEdit::Date("2024-02-02".into())),
            Err(ExpenseError::IndexOutOfRange { index: 0, len: 2 })
        ));
        assert!(matches!(
            ledger.delete(3),
            Err(ExpenseError::IndexOutOfRange { index: 3, len: 2 })
        ));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_delete_shifts_positions() {
        let mut ledger = two_expenses();
        let removed = ledger.delete(1).unwrap();
        assert_eq!(removed.description, "lunch");
        assert_eq!(ledger.get(1).unwrap().description, "bus");
        assert!(ledger.get(2).is_err());
    }

    #[test]
    fn test_double_delete_on_single_record() {
        let mut ledger = Ledger::new();
        ledger.append(expense("lunch", 1250, "food"));

        ledger.delete(1).unwrap();
        assert!(ledger.is_empty());
        assert!(matches!(
            ledger.delete(1),
            Err(ExpenseError::IndexOutOfRange { index: 1, len: 0 })
        ));
    }
}
