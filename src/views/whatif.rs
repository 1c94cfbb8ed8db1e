//! What-if screen: hypothetical per-category budget deltas.

use tracing::info;

use super::{
    aggregates::{budget_totals, what_if_comparison, BudgetTotals, WhatIfRow},
    edit::parse_field,
    ViewError, ViewResult,
};
use crate::{
    client::{ApiClient, DataSource},
    domain::{Budget, WhatIfAdjustments},
    errors::ClientResult,
};

/// Shown when a scenario cannot be computed at all.
pub const RUN_FAILURE_MESSAGE: &str = "Error running analysis. Please try again.";

#[derive(Debug, Clone)]
pub struct WhatIfView {
    original: Vec<Budget>,
    adjusted: Vec<Budget>,
    adjustments: WhatIfAdjustments,
    has_changes: bool,
    source: DataSource,
}

impl WhatIfView {
    pub fn load(client: &ApiClient) -> ClientResult<Self> {
        let fetched = client.list_budgets()?;
        Ok(Self::from_parts(fetched.data, fetched.source))
    }

    pub fn from_parts(budgets: Vec<Budget>, source: DataSource) -> Self {
        Self {
            adjusted: budgets.clone(),
            original: budgets,
            adjustments: WhatIfAdjustments::new(),
            has_changes: false,
            source,
        }
    }

    pub fn original(&self) -> &[Budget] {
        &self.original
    }

    pub fn adjusted(&self) -> &[Budget] {
        &self.adjusted
    }

    pub fn adjustments(&self) -> &WhatIfAdjustments {
        &self.adjustments
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    /// Records a delta for a loaded category. The raw value is parsed leniently:
    /// anything that is not a number counts as zero.
    pub fn set_adjustment(&mut self, category: &str, raw: &str) -> ViewResult<f64> {
        let name = self
            .original
            .iter()
            .map(|budget| budget.category.as_str())
            .find(|name| *name == category)
            .or_else(|| {
                self.original
                    .iter()
                    .map(|budget| budget.category.as_str())
                    .find(|name| name.eq_ignore_ascii_case(category))
            })
            .ok_or_else(|| ViewError::UnknownCategory(category.to_string()))?
            .to_string();
        let delta = parse_field(raw);
        self.adjustments.insert(name, delta);
        self.has_changes = true;
        Ok(delta)
    }

    /// Computes the scenario through the backend. Pending changes are cleared
    /// only when a result comes back.
    pub fn run(&mut self, client: &ApiClient) -> ViewResult<DataSource> {
        if !self.has_changes {
            return Err(ViewError::NoPendingChanges);
        }
        let fetched = client.run_what_if(&self.adjustments)?;
        info!(source = ?fetched.source, categories = self.adjustments.len(), "what-if computed");
        self.adjusted = fetched.data;
        self.has_changes = false;
        Ok(fetched.source)
    }

    pub fn reset(&mut self) {
        self.adjustments.clear();
        self.adjusted = self.original.clone();
        self.has_changes = false;
    }

    pub fn comparison(&self) -> Vec<WhatIfRow> {
        what_if_comparison(&self.original, &self.adjusted)
    }

    pub fn total_change(&self) -> f64 {
        self.adjustments.values().sum()
    }

    /// Totals over the adjusted scenario.
    pub fn adjusted_totals(&self) -> BudgetTotals {
        budget_totals(&self.adjusted)
    }
}
