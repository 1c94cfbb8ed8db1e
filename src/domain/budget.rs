use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::Categorized;

/// Spending allowance for one category.
///
/// `spent` and `total_budget` are edited independently; `spent` exceeding
/// `total_budget` is a normal, displayable state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: String,
    pub total_budget: f64,
    pub spent: f64,
}

impl Budget {
    pub fn new(category: impl Into<String>, total_budget: f64, spent: f64) -> Self {
        Self {
            category: category.into(),
            total_budget,
            spent,
        }
    }
}

impl Categorized for Budget {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Sparse per-category deltas; a missing category means no adjustment.
pub type WhatIfAdjustments = BTreeMap<String, f64>;

/// Body of `POST /whatif/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WhatIfRequest {
    pub adjustments: WhatIfAdjustments,
}
