//! Render-time number formatting. Values stay unrounded until they reach here.

use colored::Colorize;

use crate::cli::output::current_preferences;
use crate::views::aggregates::BudgetHealth;

/// Cells in a usage bar.
pub const BAR_CELLS: usize = 20;

/// Shown where a percentage cannot be computed.
pub const NO_PERCENT: &str = "—";

pub fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value.abs())
    }
}

/// Money with an explicit sign, for deltas.
pub fn signed_money(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", money(value))
    } else {
        money(value)
    }
}

pub fn percent(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format!("{value:.decimals$}%"),
        None => NO_PERCENT.to_string(),
    }
}

pub fn signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

/// Fixed-width bar for a fill value in `0..=100`.
pub fn progress_bar(fill_percent: f64) -> String {
    let filled = ((fill_percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    let (on, off) = if current_preferences().plain_mode {
        ('#', '.')
    } else {
        ('█', '░')
    };
    format!(
        "[{}{}]",
        on.to_string().repeat(filled),
        off.to_string().repeat(BAR_CELLS - filled)
    )
}

pub fn health_colored(text: String, health: BudgetHealth) -> String {
    if current_preferences().plain_mode {
        return text;
    }
    match health {
        BudgetHealth::Green => text.green().to_string(),
        BudgetHealth::Yellow => text.yellow().to_string(),
        BudgetHealth::Red => text.red().to_string(),
    }
}

/// Green for gains, red for losses.
pub fn trend_colored(text: String, value: f64) -> String {
    if current_preferences().plain_mode || value == 0.0 {
        return text;
    }
    if value > 0.0 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}
