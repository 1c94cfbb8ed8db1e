//! Expense screen: list, category charts, add form with optimistic append.

use tracing::{info, warn};

use super::{
    aggregates::{bar_series, pie_slices, CategoryTotal},
    ViewError, ViewResult,
};
use crate::{
    client::{ApiClient, DataSource},
    domain::{Expense, ExpenseCategory},
    errors::{ClientError, ClientResult, ValidationErrors},
};

pub const ADD_SUCCESS_MESSAGE: &str = "Expense added successfully!";
pub const ADD_FAILURE_MESSAGE: &str = "Failed to add expense. Please try again.";

/// Raw values typed into the add-expense form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub category: String,
    pub amount: String,
}

impl ExpenseForm {
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Checks the form before anything is sent.
    pub fn validate(&self) -> Result<Expense, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let category = if self.category.trim().is_empty() {
            errors.category = Some("Please select a category".into());
            None
        } else {
            match self.category.parse::<ExpenseCategory>() {
                Ok(category) => Some(category),
                Err(_) => {
                    errors.category = Some(format!(
                        "Please select a category ({})",
                        ExpenseCategory::names().join(", ")
                    ));
                    None
                }
            }
        };

        let raw_amount = self.amount.trim();
        let amount = if raw_amount.is_empty() {
            errors.amount = Some("Please enter an amount".into());
            None
        } else {
            match raw_amount.parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => Some(value),
                _ => {
                    errors.amount = Some("Please enter a valid positive amount".into());
                    None
                }
            }
        };

        match (category, amount) {
            (Some(category), Some(amount)) if errors.is_empty() => {
                Ok(Expense::new(category.as_str(), amount))
            }
            _ => Err(errors),
        }
    }
}

/// Result of a valid add: the expense is always in the local list, whether or
/// not the backend accepted it.
#[derive(Debug)]
pub enum AddOutcome {
    Synced,
    LocalOnly(ClientError),
}

#[derive(Debug, Clone)]
pub struct ExpensesView {
    expenses: Vec<Expense>,
    source: DataSource,
    success_message: Option<String>,
    general_error: Option<String>,
}

impl ExpensesView {
    pub fn load(client: &ApiClient) -> ClientResult<Self> {
        let fetched = client.list_expenses()?;
        info!(count = fetched.data.len(), source = ?fetched.source, "expenses loaded");
        Ok(Self::from_parts(fetched.data, fetched.source))
    }

    pub fn from_parts(expenses: Vec<Expense>, source: DataSource) -> Self {
        Self {
            expenses,
            source,
            success_message: None,
            general_error: None,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn pie_slices(&self) -> Vec<CategoryTotal> {
        pie_slices(&self.expenses)
    }

    pub fn bar_series(&self) -> Vec<CategoryTotal> {
        bar_series(&self.expenses)
    }

    /// Validates, appends locally, then tries the backend. Validation failures
    /// never reach the network. A failed create keeps the local entry.
    pub fn add(&mut self, client: &ApiClient, form: &ExpenseForm) -> ViewResult<AddOutcome> {
        self.success_message = None;
        self.general_error = None;

        let expense = form.validate()?;
        self.expenses.push(expense.clone());

        match client.create_expense(&expense) {
            Ok(()) => {
                self.success_message = Some(ADD_SUCCESS_MESSAGE.into());
                Ok(AddOutcome::Synced)
            }
            Err(err) => {
                warn!(category = %expense.category, error = %err, "expense kept locally only");
                self.general_error = Some(ADD_FAILURE_MESSAGE.into());
                Ok(AddOutcome::LocalOnly(err))
            }
        }
    }

    /// Local-only removal by list position.
    pub fn remove(&mut self, index: usize) -> ViewResult<Expense> {
        if index >= self.expenses.len() {
            return Err(ViewError::NoSuchExpense(index));
        }
        Ok(self.expenses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_and_non_positive_amounts() {
        for raw in ["", "   ", "-5", "0", "abc", "NaN"] {
            let errors = ExpenseForm::new("Food", raw).validate().unwrap_err();
            assert!(errors.amount.is_some(), "`{raw}` should be rejected");
            assert!(errors.category.is_none());
        }
    }

    #[test]
    fn reports_every_invalid_field() {
        let errors = ExpenseForm::default().validate().unwrap_err();
        assert_eq!(errors.category.as_deref(), Some("Please select a category"));
        assert_eq!(errors.amount.as_deref(), Some("Please enter an amount"));
    }

    #[test]
    fn normalizes_category_case() {
        let expense = ExpenseForm::new("bills", "42.10").validate().unwrap();
        assert_eq!(expense, Expense::new("Bills", 42.10));
    }

    #[test]
    fn remove_checks_bounds() {
        let mut view = ExpensesView::from_parts(
            vec![Expense::new("Food", 1.0), Expense::new("Bills", 2.0)],
            DataSource::Remote,
        );
        assert!(matches!(view.remove(5), Err(ViewError::NoSuchExpense(5))));
        assert_eq!(view.remove(0).unwrap(), Expense::new("Food", 1.0));
        assert_eq!(view.expenses(), &[Expense::new("Bills", 2.0)]);
    }
}
