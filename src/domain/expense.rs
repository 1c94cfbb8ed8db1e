//! Expense records and the fixed category set offered by the add form.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::common::Categorized;

/// A single spending entry. Expenses carry no identifier; their list position
/// is the only handle the client has.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub category: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

impl Categorized for Expense {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Categories the expense form accepts and the charts aggregate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpenseCategory {
    Food,
    Entertainment,
    Bills,
    Savings,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Food,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Bills,
        ExpenseCategory::Savings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Savings => "Savings",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|category| category.as_str()).collect()
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown category `{trimmed}`"))
    }
}
