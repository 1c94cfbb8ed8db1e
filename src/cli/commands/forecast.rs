use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::{money, trend_colored};
use crate::cli::ui::table::{Table, TableColumn};
use crate::views::aggregates::Outlook;
use crate::views::ForecastView;

use super::note_source;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "forecast",
        "Predicted savings per category",
        "forecast",
        cmd_forecast,
    )]
}

fn outlook_label(outlook: Outlook) -> &'static str {
    match outlook {
        Outlook::Saving => "Saving",
        Outlook::Overspending => "Overspending",
        Outlook::Neutral => "Neutral",
    }
}

fn cmd_forecast(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.navigate(|view: &mut ForecastView, _client, _config| {
        output::section("Forecast");
        note_source(view.source());
        if view.is_empty() {
            output::info("No forecast available.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            TableColumn::left("Category"),
            TableColumn::right("Predicted savings"),
            TableColumn::left("Outlook"),
        ]);
        for (category, savings, outlook) in view.entries() {
            table.push(vec![
                category.to_string(),
                trend_colored(money(savings), savings),
                outlook_label(outlook).to_string(),
            ]);
        }
        output::block(table.render());

        let total = view.total();
        output::info(format!(
            "Total predicted savings: {}",
            trend_colored(money(total), total)
        ));
        Ok(())
    })
}
