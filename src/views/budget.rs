//! Budget screen: list, usage bars, inline edits saved through the backend.

use tracing::info;

use super::{
    aggregates::{budget_usage, BudgetUsage},
    edit::{parse_field, BudgetDraft, EditState},
    ViewError, ViewResult,
};
use crate::{
    client::{ApiClient, DataSource},
    domain::{
        common::{find_by_category, find_by_category_mut},
        Budget,
    },
    errors::ClientResult,
};

#[derive(Debug, Clone)]
pub struct BudgetView {
    budgets: Vec<Budget>,
    source: DataSource,
    edit: EditState,
}

impl BudgetView {
    pub fn load(client: &ApiClient) -> ClientResult<Self> {
        let fetched = client.list_budgets()?;
        info!(count = fetched.data.len(), source = ?fetched.source, "budgets loaded");
        Ok(Self::from_parts(fetched.data, fetched.source))
    }

    pub fn from_parts(budgets: Vec<Budget>, source: DataSource) -> Self {
        Self {
            budgets,
            source,
            edit: EditState::Viewing,
        }
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn usages(&self) -> impl Iterator<Item = (&Budget, BudgetUsage)> {
        self.budgets.iter().map(|budget| (budget, budget_usage(budget)))
    }

    /// Viewing → Editing. Starting an edit on another category replaces any
    /// draft in progress.
    pub fn begin_edit(&mut self, category: &str) -> ViewResult<BudgetDraft> {
        let budget = find_by_category(&self.budgets, category)
            .ok_or_else(|| ViewError::UnknownCategory(category.to_string()))?;
        let draft = BudgetDraft::snapshot(budget);
        self.edit = EditState::begin(budget);
        Ok(draft)
    }

    pub fn set_total_budget(&mut self, raw: &str) -> ViewResult<f64> {
        let draft = self.edit.draft_mut().ok_or(ViewError::NotEditing)?;
        draft.total_budget = parse_field(raw);
        Ok(draft.total_budget)
    }

    pub fn set_spent(&mut self, raw: &str) -> ViewResult<f64> {
        let draft = self.edit.draft_mut().ok_or(ViewError::NotEditing)?;
        draft.spent = parse_field(raw);
        Ok(draft.spent)
    }

    /// Editing → Viewing without a network call. Returns whether a draft was discarded.
    pub fn cancel(&mut self) -> bool {
        let was_editing = self.edit != EditState::Viewing;
        self.edit = EditState::Viewing;
        was_editing
    }

    /// Sends the draft to the backend. The local entry changes only after the
    /// backend accepts it; on failure the draft stays open for retry or cancel.
    pub fn save(&mut self, client: &ApiClient) -> ViewResult<Budget> {
        let (category, draft) = match &self.edit {
            EditState::Editing { category, draft } => (category.clone(), *draft),
            EditState::Viewing => return Err(ViewError::NotEditing),
        };
        let current = find_by_category_mut(&mut self.budgets, &category)
            .ok_or_else(|| ViewError::UnknownCategory(category.clone()))?;
        let updated = draft.apply_to(current);

        client.update_budget(&category, &updated)?;

        *current = updated.clone();
        self.edit = EditState::Viewing;
        info!(category = %category, "budget saved");
        Ok(updated)
    }
}
