//! Placeholder payloads served when a read cannot reach the backend.

use crate::domain::{Budget, Expense, Forecast, StockSeries, WhatIfAdjustments};

pub const CHAT_APOLOGY: &str = "I'm sorry, I'm having trouble connecting to the AI service. \
Please make sure the backend is running and try again.";

pub fn expenses() -> Vec<Expense> {
    vec![
        Expense::new("Food", 250.0),
        Expense::new("Entertainment", 100.0),
        Expense::new("Bills", 300.0),
        Expense::new("Savings", 200.0),
    ]
}

pub fn budgets() -> Vec<Budget> {
    vec![
        Budget::new("Food", 500.0, 250.0),
        Budget::new("Entertainment", 200.0, 100.0),
        Budget::new("Bills", 350.0, 300.0),
        Budget::new("Savings", 400.0, 200.0),
    ]
}

pub fn forecast() -> Forecast {
    [
        ("Food", 250.0),
        ("Entertainment", 100.0),
        ("Bills", 50.0),
        ("Savings", 200.0),
    ]
    .into_iter()
    .map(|(category, savings)| (category.to_string(), savings))
    .collect()
}

pub fn stocks() -> StockSeries {
    [
        ("AAPL", [150.25, 151.30, 149.80, 152.10, 151.75]),
        ("GOOGL", [2800.50, 2815.20, 2795.80, 2820.10, 2810.25]),
        ("MSFT", [300.15, 302.40, 298.90, 305.20, 303.85]),
        ("TSLA", [200.50, 205.30, 198.75, 208.90, 206.45]),
        ("AMZN", [3200.25, 3220.50, 3195.80, 3235.10, 3215.75]),
    ]
    .into_iter()
    .map(|(ticker, prices)| (ticker.to_string(), prices.to_vec()))
    .collect()
}

/// Applies each adjustment to the matching budget total. Categories without an
/// adjustment keep their total; `spent` and ordering are untouched.
pub fn simulate_what_if(baseline: &[Budget], adjustments: &WhatIfAdjustments) -> Vec<Budget> {
    baseline
        .iter()
        .map(|budget| Budget {
            total_budget: budget.total_budget
                + adjustments.get(&budget.category).copied().unwrap_or(0.0),
            ..budget.clone()
        })
        .collect()
}
