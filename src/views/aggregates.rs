//! Derived display values computed from fetched state.
//!
//! Everything here is a pure function recomputed on every render; the datasets
//! are a handful of entries so nothing is cached.

use crate::domain::{common::find_by_category, Budget, Expense, ExpenseCategory, Forecast};

/// Usage share above which a budget is flagged as close to its limit.
pub const NEAR_LIMIT_PERCENT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetHealth {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetUsage {
    pub remaining: f64,
    /// Raw `spent / total_budget * 100`, unclamped. `None` when the total is zero.
    pub percentage: Option<f64>,
    pub over_budget: bool,
}

impl BudgetUsage {
    /// Progress bar fill in percent, clamped to `0..=100`.
    pub fn bar_width(&self) -> f64 {
        self.percentage.map(|p| p.clamp(0.0, 100.0)).unwrap_or(0.0)
    }

    pub fn near_limit(&self) -> bool {
        !self.over_budget && self.percentage.is_some_and(|p| p > NEAR_LIMIT_PERCENT)
    }

    pub fn health(&self) -> BudgetHealth {
        if self.over_budget {
            BudgetHealth::Red
        } else if self.near_limit() {
            BudgetHealth::Yellow
        } else {
            BudgetHealth::Green
        }
    }
}

pub fn budget_usage(budget: &Budget) -> BudgetUsage {
    let percentage = if budget.total_budget == 0.0 {
        None
    } else {
        Some(budget.spent / budget.total_budget * 100.0)
    };
    BudgetUsage {
        remaining: budget.total_budget - budget.spent,
        percentage,
        over_budget: budget.spent > budget.total_budget,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

/// Sums expenses per fixed category, in the fixed category order. Expenses
/// outside the set are ignored. Every category is present, zero or not.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    ExpenseCategory::ALL
        .into_iter()
        .map(|category| CategoryTotal {
            category,
            total: expenses
                .iter()
                .filter(|expense| expense.category == category.as_str())
                .map(|expense| expense.amount)
                .sum(),
        })
        .collect()
}

/// Pie view: categories with a zero total are left out.
pub fn pie_slices(expenses: &[Expense]) -> Vec<CategoryTotal> {
    category_totals(expenses)
        .into_iter()
        .filter(|slice| slice.total > 0.0)
        .collect()
}

/// Bar view: all fixed categories, including empty ones.
pub fn bar_series(expenses: &[Expense]) -> Vec<CategoryTotal> {
    category_totals(expenses)
}

/// Percent change from the first to the last price; 0 with fewer than two points.
pub fn stock_change(prices: &[f64]) -> f64 {
    match (prices.first(), prices.last()) {
        (Some(first), Some(last)) if prices.len() >= 2 => (last - first) / first * 100.0,
        _ => 0.0,
    }
}

pub fn average_price(prices: &[f64]) -> Option<f64> {
    if prices.is_empty() {
        None
    } else {
        Some(prices.iter().sum::<f64>() / prices.len() as f64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockQuote {
    pub ticker: String,
    pub latest: Option<f64>,
    pub average: Option<f64>,
    pub change_percent: f64,
}

pub fn stock_quote(ticker: &str, prices: &[f64]) -> StockQuote {
    StockQuote {
        ticker: ticker.to_string(),
        latest: prices.last().copied(),
        average: average_price(prices),
        change_percent: stock_change(prices),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketSummary {
    pub average_change: f64,
    pub best_performer: Option<String>,
    pub tracked: usize,
}

pub fn market_summary(quotes: &[StockQuote]) -> MarketSummary {
    let average_change = if quotes.is_empty() {
        0.0
    } else {
        quotes.iter().map(|q| q.change_percent).sum::<f64>() / quotes.len() as f64
    };
    let best_performer = quotes
        .iter()
        .fold(None::<&StockQuote>, |best, quote| match best {
            Some(current) if current.change_percent >= quote.change_percent => Some(current),
            _ => Some(quote),
        })
        .map(|quote| quote.ticker.clone());
    MarketSummary {
        average_change,
        best_performer,
        tracked: quotes.len(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhatIfRow {
    pub category: String,
    pub original_total: f64,
    pub adjusted_total: f64,
    pub change: f64,
    pub remaining: f64,
}

/// Pairs each original budget with its adjusted counterpart by category. A
/// missing counterpart means the total is unchanged.
pub fn what_if_comparison(original: &[Budget], adjusted: &[Budget]) -> Vec<WhatIfRow> {
    original
        .iter()
        .map(|budget| {
            let adjusted_total = find_by_category(adjusted, &budget.category)
                .map(|entry| entry.total_budget)
                .unwrap_or(budget.total_budget);
            WhatIfRow {
                category: budget.category.clone(),
                original_total: budget.total_budget,
                adjusted_total,
                change: adjusted_total - budget.total_budget,
                remaining: adjusted_total - budget.spent,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetTotals {
    pub total_budget: f64,
    pub total_spent: f64,
}

impl BudgetTotals {
    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_spent
    }
}

pub fn budget_totals(budgets: &[Budget]) -> BudgetTotals {
    budgets
        .iter()
        .fold(BudgetTotals::default(), |acc, budget| BudgetTotals {
            total_budget: acc.total_budget + budget.total_budget,
            total_spent: acc.total_spent + budget.spent,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Saving,
    Overspending,
    Neutral,
}

pub fn outlook(predicted_savings: f64) -> Outlook {
    if predicted_savings > 0.0 {
        Outlook::Saving
    } else if predicted_savings < 0.0 {
        Outlook::Overspending
    } else {
        Outlook::Neutral
    }
}

pub fn total_predicted_savings(forecast: &Forecast) -> f64 {
    forecast.values().sum()
}
