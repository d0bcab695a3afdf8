//! Expense service
//!
//! The session context handed to the front end. It owns the ledger and the
//! category registry for the session, validates every write against the
//! registry, and saves the whole ledger after each successful mutation.
//!
//! If a save fails the mutation stays in memory and the error is returned.
//! Memory and disk then disagree until the next successful save.

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::export::{export_to_path, ExportFormat};
use crate::models::expense::validate_amount;
use crate::models::{normalize_label, CategoryRegistry, Expense, ExpenseEdit, Ledger, Money};
use crate::reports::ExpenseSummary;
use crate::storage::Storage;
use std::path::Path;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: String,
    pub amount: Money,
    pub description: String,
    pub category: String,
}

/// Service for ledger management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    ledger: Ledger,
    registry: CategoryRegistry,
}

impl<'a> ExpenseService<'a> {
    /// Start a session from persisted state
    ///
    /// Under `AutoAdmit`, categories found in the loaded expenses join the
    /// registry.
    pub fn load(storage: &'a Storage, settings: &Settings) -> ExpenseResult<Self> {
        let registry = CategoryRegistry::new(&settings.categories, settings.category_policy);
        let expenses = storage.expenses.load()?;
        Ok(Self::with_expenses(storage, expenses, registry))
    }

    /// Start a session from already-loaded expenses
    ///
    /// Stored category labels are normalized to lowercase.
    pub fn with_expenses(
        storage: &'a Storage,
        mut expenses: Vec<Expense>,
        mut registry: CategoryRegistry,
    ) -> Self {
        for (i, expense) in expenses.iter_mut().enumerate() {
            let label = normalize_label(&expense.category);
            if label != expense.category {
                debug!(
                    position = i + 1,
                    from = %expense.category,
                    to = %label,
                    "normalized category"
                );
                expense.category = label;
            }

            if registry.observe(&expense.category) {
                info!(category = %expense.category, "admitted category from stored expenses");
            } else if !registry.contains(&expense.category) {
                warn!(
                    category = %expense.category,
                    "stored expense uses a category outside the registry"
                );
            }
        }

        debug!(
            count = expenses.len(),
            categories = registry.len(),
            policy = %registry.policy(),
            "session ready"
        );

        Self {
            storage,
            ledger: Ledger::from_expenses(expenses),
            registry,
        }
    }

    /// All expenses in entry order
    pub fn expenses(&self) -> &[Expense] {
        self.ledger.get_all()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Extend the registry with a label. Returns `true` if it was new.
    pub fn admit_category(&mut self, label: &str) -> bool {
        let admitted = self.registry.admit(label);
        if admitted {
            info!(category = %label.trim().to_lowercase(), "admitted category");
        }
        admitted
    }

    /// Record a new expense at the end of the ledger
    ///
    /// The category must already be in the registry.
    pub fn add(&mut self, input: NewExpense) -> ExpenseResult<&Expense> {
        let category = self.registry.validate(&input.category)?;
        validate_amount(input.amount)?;

        let expense = Expense::new(input.date, input.amount, input.description, category);
        expense.validate()?;

        self.ledger.append(expense);
        let position = self.ledger.len();
        self.persist()?;

        let added = self.ledger.get(position)?;
        self.storage.log_create(position, added);
        debug!(position, "added expense");
        Ok(added)
    }

    /// Change one field of the expense at a 1-based position
    pub fn edit(&mut self, index: usize, edit: ExpenseEdit) -> ExpenseResult<&Expense> {
        // Check the position first so a bad index is reported as such
        self.ledger.get(index)?;

        let edit = match edit {
            ExpenseEdit::Category(label) => ExpenseEdit::Category(self.registry.validate(&label)?),
            ExpenseEdit::Amount(amount) => {
                validate_amount(amount)?;
                ExpenseEdit::Amount(amount)
            }
            other => other,
        };

        let before = self.ledger.edit(index, edit)?;
        self.persist()?;

        let after = self.ledger.get(index)?;
        self.storage.log_update(index, &before, after);
        debug!(position = index, "edited expense");
        Ok(after)
    }

    /// Remove the expense at a 1-based position
    ///
    /// Every later position shifts down by one.
    pub fn delete(&mut self, index: usize) -> ExpenseResult<Expense> {
        let removed = self.ledger.delete(index)?;
        self.persist()?;

        self.storage.log_delete(index, &removed);
        debug!(position = index, "deleted expense");
        Ok(removed)
    }

    /// Summary figures for the current ledger
    pub fn summary(&self) -> ExpenseSummary {
        ExpenseSummary::generate(self.ledger.get_all())
    }

    /// Export the current ledger to `destination`
    pub fn export(&self, destination: &Path, format: ExportFormat) -> ExpenseResult<()> {
        export_to_path(self.ledger.get_all(), &self.registry, destination, format)
    }

    fn persist(&self) -> ExpenseResult<()> {
        self.storage.expenses.save(self.ledger.get_all()).map_err(|e| {
            warn!(error = %e, "ledger changed in memory but could not be saved");
            e
        })
    }
}
