//! Viewing/Editing state for inline budget edits.

use crate::domain::Budget;

/// Numeric fields captured when editing starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetDraft {
    pub total_budget: f64,
    pub spent: f64,
}

impl BudgetDraft {
    pub fn snapshot(budget: &Budget) -> Self {
        Self {
            total_budget: budget.total_budget,
            spent: budget.spent,
        }
    }

    /// A zero field, which is also what an empty or unparsable input becomes,
    /// keeps the budget's current value.
    pub fn apply_to(&self, budget: &Budget) -> Budget {
        Budget {
            category: budget.category.clone(),
            total_budget: or_current(self.total_budget, budget.total_budget),
            spent: or_current(self.spent, budget.spent),
        }
    }
}

fn or_current(value: f64, current: f64) -> f64 {
    if value == 0.0 {
        current
    } else {
        value
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing {
        category: String,
        draft: BudgetDraft,
    },
}

impl EditState {
    pub fn begin(budget: &Budget) -> Self {
        EditState::Editing {
            category: budget.category.clone(),
            draft: BudgetDraft::snapshot(budget),
        }
    }

    pub fn is_editing(&self, category: &str) -> bool {
        matches!(self, EditState::Editing { category: current, .. } if current == category)
    }

    pub fn draft_mut(&mut self) -> Option<&mut BudgetDraft> {
        match self {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Viewing => None,
        }
    }
}

/// Parses a numeric input field; anything unparsable counts as zero.
pub fn parse_field(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_snapshots_numeric_fields() {
        let budget = Budget::new("Food", 500.0, 250.0);
        let state = EditState::begin(&budget);
        assert!(state.is_editing("Food"));
        assert!(!state.is_editing("Bills"));
        match state {
            EditState::Editing { draft, .. } => {
                assert_eq!(draft.apply_to(&budget), budget);
            }
            EditState::Viewing => panic!("expected editing state"),
        }
    }

    #[test]
    fn zero_fields_keep_current_values() {
        let budget = Budget::new("Food", 500.0, 250.0);
        let draft = BudgetDraft {
            total_budget: 0.0,
            spent: parse_field("nope"),
        };
        assert_eq!(draft.apply_to(&budget), budget);

        let draft = BudgetDraft {
            total_budget: 650.0,
            spent: 0.0,
        };
        assert_eq!(draft.apply_to(&budget), Budget::new("Food", 650.0, 250.0));
    }

    #[test]
    fn unparsable_fields_become_zero() {
        assert_eq!(parse_field("12.5"), 12.5);
        assert_eq!(parse_field(" 7 "), 7.0);
        assert_eq!(parse_field("abc"), 0.0);
        assert_eq!(parse_field(""), 0.0);
        assert_eq!(parse_field("inf"), 0.0);
    }
}
