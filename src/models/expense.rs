//! Expense record model
//!
//! An expense has no identity beyond its position in the ledger. Keys that
//! are not one of the four known fields are kept in `extra` so a file written
//! by another tool survives a load/save cycle untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// A single spending event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date as entered (`YYYY-MM-DD` by convention, stored verbatim)
    pub date: String,

    /// Amount spent
    pub amount: Money,

    /// Free-form description
    pub description: String,

    /// Lowercase category label
    pub category: String,

    /// Unknown keys carried through persistence unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Expense {
    /// Create a new expense; the category is normalized to lowercase
    pub fn new(
        date: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        category: impl AsRef<str>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            description: description.into(),
            category: category.as_ref().trim().to_lowercase(),
            extra: Map::new(),
        }
    }

    /// Validate the record's own fields
    ///
    /// Category membership is checked against the registry separately.
    pub fn validate(&self) -> ExpenseResult<()> {
        validate_amount(self.amount)?;
        validate_category_label(&self.category)?;
        Ok(())
    }

    /// Apply a single-field edit
    pub fn apply(&mut self, edit: ExpenseEdit) {
        match edit {
            ExpenseEdit::Date(date) => self.date = date,
            ExpenseEdit::Amount(amount) => self.amount = amount,
            ExpenseEdit::Description(description) => self.description = description,
            ExpenseEdit::Category(category) => self.category = category.trim().to_lowercase(),
        }
    }
}

pub(crate) fn validate_amount(amount: Money) -> ExpenseResult<()> {
    if amount.is_negative() {
        return Err(ExpenseError::Validation(format!(
            "Amount cannot be negative: {}",
            amount
        )));
    }
    Ok(())
}

pub(crate) fn validate_category_label(category: &str) -> ExpenseResult<()> {
    if category.trim().is_empty() {
        return Err(ExpenseError::Validation("Category cannot be empty".into()));
    }
    Ok(())
}

/// The editable fields of an expense, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Date,
    Amount,
    Description,
    Category,
}

impl ExpenseField {
    pub const ALL: [ExpenseField; 4] = [
        ExpenseField::Date,
        ExpenseField::Amount,
        ExpenseField::Description,
        ExpenseField::Category,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExpenseField::Date => "date",
            ExpenseField::Amount => "amount",
            ExpenseField::Description => "description",
            ExpenseField::Category => "category",
        }
    }

    /// Current value of this field rendered as text
    pub fn value_of(&self, expense: &Expense) -> String {
        match self {
            ExpenseField::Date => expense.date.clone(),
            ExpenseField::Amount => expense.amount.format_plain(),
            ExpenseField::Description => expense.description.clone(),
            ExpenseField::Category => expense.category.clone(),
        }
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExpenseField {
    type Err = ExpenseError;

    /// Accepts field names or the menu digits `1`-`4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "date" => Ok(ExpenseField::Date),
            "2" | "amount" => Ok(ExpenseField::Amount),
            "3" | "description" => Ok(ExpenseField::Description),
            "4" | "category" => Ok(ExpenseField::Category),
            other => Err(ExpenseError::Validation(format!(
                "Unknown field '{}'. Expected date, amount, description or category",
                other
            ))),
        }
    }
}

/// A new value for exactly one field of an expense
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseEdit {
    Date(String),
    Amount(Money),
    Description(String),
    Category(String),
}

impl ExpenseEdit {
    /// Build an edit from raw text, parsing the amount if needed
    pub fn parse(field: ExpenseField, value: &str) -> ExpenseResult<Self> {
        Ok(match field {
            ExpenseField::Date => ExpenseEdit::Date(value.trim().to_string()),
            ExpenseField::Amount => ExpenseEdit::Amount(Money::parse(value)?),
            ExpenseField::Description => ExpenseEdit::Description(value.to_string()),
            ExpenseField::Category => ExpenseEdit::Category(value.trim().to_lowercase()),
        })
    }

    pub fn field(&self) -> ExpenseField {
        match self {
            ExpenseEdit::Date(_) => ExpenseField::Date,
            ExpenseEdit::Amount(_) => ExpenseField::Amount,
            ExpenseEdit::Description(_) => ExpenseField::Description,
            ExpenseEdit::Category(_) => ExpenseField::Category,
        }
    }
}
