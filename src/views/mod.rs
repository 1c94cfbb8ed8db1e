//! Per-screen state containers.
//!
//! Each container owns its own fetched copy of the data it renders. Nothing is
//! shared between screens: a budget edited in [`budget::BudgetView`] is not
//! reflected in an already-loaded [`dashboard::DashboardView`].

pub mod aggregates;
pub mod budget;
pub mod chat;
pub mod dashboard;
pub mod edit;
pub mod expenses;
pub mod forecast;
pub mod stocks;
pub mod whatif;

use thiserror::Error;

use crate::errors::{ClientError, ValidationErrors};

pub use budget::BudgetView;
pub use chat::ChatSession;
pub use dashboard::DashboardView;
pub use expenses::{AddOutcome, ExpenseForm, ExpensesView};
pub use forecast::ForecastView;
pub use stocks::StocksView;
pub use whatif::WhatIfView;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("no budget for category `{0}`")]
    UnknownCategory(String),
    #[error("no expense at position {0}")]
    NoSuchExpense(usize),
    #[error("no budget is being edited; use `budget edit <category>` first")]
    NotEditing,
    #[error("nothing to run; adjust a category first")]
    NoPendingChanges,
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type ViewResult<T> = Result<T, ViewError>;
