//! Overview screen: budget totals plus predicted savings.

use std::thread;

use tracing::info;

use super::aggregates::{budget_totals, budget_usage, total_predicted_savings, BudgetTotals, BudgetUsage};
use crate::{
    client::{ApiClient, DataSource},
    domain::{Budget, Forecast},
    errors::ClientResult,
};

#[derive(Debug, Clone)]
pub struct DashboardView {
    budgets: Vec<Budget>,
    forecast: Forecast,
    budgets_source: DataSource,
    forecast_source: DataSource,
}

impl DashboardView {
    /// Fetches budgets and forecast side by side and waits for both.
    pub fn load(client: &ApiClient) -> ClientResult<Self> {
        let (budgets, forecast) = thread::scope(|scope| {
            let forecast = scope.spawn(|| client.get_forecast());
            let budgets = client.list_budgets();
            let forecast = forecast
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (budgets, forecast)
        });
        let (budgets, forecast) = (budgets?, forecast?);
        info!(
            budgets = budgets.data.len(),
            forecast = forecast.data.len(),
            "dashboard loaded"
        );
        Ok(Self {
            budgets: budgets.data,
            forecast: forecast.data,
            budgets_source: budgets.source,
            forecast_source: forecast.source,
        })
    }

    pub fn from_parts(budgets: Vec<Budget>, forecast: Forecast) -> Self {
        Self {
            budgets,
            forecast,
            budgets_source: DataSource::Remote,
            forecast_source: DataSource::Remote,
        }
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn forecast(&self) -> &Forecast {
        &self.forecast
    }

    /// True when any panel is showing placeholder data.
    pub fn uses_fallback(&self) -> bool {
        self.budgets_source == DataSource::Fallback || self.forecast_source == DataSource::Fallback
    }

    pub fn totals(&self) -> BudgetTotals {
        budget_totals(&self.budgets)
    }

    pub fn predicted_savings(&self) -> f64 {
        total_predicted_savings(&self.forecast)
    }

    pub fn usages(&self) -> impl Iterator<Item = (&Budget, BudgetUsage)> {
        self.budgets.iter().map(|budget| (budget, budget_usage(budget)))
    }
}
