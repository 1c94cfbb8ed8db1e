use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::{health_colored, money, percent, progress_bar, trend_colored};
use crate::cli::ui::table::{Table, TableColumn};
use crate::client::DataSource;
use crate::domain::Budget;
use crate::views::aggregates::BudgetUsage;
use crate::views::DashboardView;

use super::note_source;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "dashboard",
        "Overview of budgets, spending and predicted savings",
        "dashboard",
        cmd_dashboard,
    )]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.navigate(|view: &mut DashboardView, _client, config| {
        output::section("Dashboard");
        if view.uses_fallback() {
            note_source(DataSource::Fallback);
        }

        let totals = view.totals();
        let savings = view.predicted_savings();
        output::info(format!("  Total budget      : {}", money(totals.total_budget)));
        output::info(format!("  Total spent       : {}", money(totals.total_spent)));
        output::info(format!("  Remaining         : {}", money(totals.remaining())));
        output::info(format!(
            "  Predicted savings : {}",
            trend_colored(money(savings), savings)
        ));

        output::section("Budget overview");
        if view.budgets().is_empty() {
            output::info("No budgets yet.");
            return Ok(());
        }
        output::block(usage_table(view.usages()));
        if config.notifications.budget_alerts {
            for (budget, usage) in view.usages() {
                print_alert(budget, &usage);
            }
        }
        Ok(())
    })
}

/// Shared by the dashboard and budget screens.
pub(crate) fn usage_table<'a>(rows: impl Iterator<Item = (&'a Budget, BudgetUsage)>) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Spent"),
        TableColumn::right("Budget"),
        TableColumn::right("Remaining"),
        TableColumn::right("Used"),
        TableColumn::left("Progress"),
    ]);
    for (budget, usage) in rows {
        table.push(vec![
            budget.category.clone(),
            money(budget.spent),
            money(budget.total_budget),
            money(usage.remaining),
            percent(usage.percentage, 1),
            health_colored(progress_bar(usage.bar_width()), usage.health()),
        ]);
    }
    table.render()
}

pub(crate) fn print_alert(budget: &Budget, usage: &BudgetUsage) {
    if usage.over_budget {
        output::warning(format!(
            "{} is over budget by {}.",
            budget.category,
            money(-usage.remaining)
        ));
    } else if usage.near_limit() {
        output::warning(format!(
            "{} has used {} of its budget.",
            budget.category,
            percent(usage.percentage, 1)
        ));
    }
}
