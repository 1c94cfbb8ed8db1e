use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::{money, signed_percent, trend_colored};
use crate::cli::ui::table::{Table, TableColumn};
use crate::views::StocksView;

use super::note_source;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "stocks",
        "Market overview for tracked tickers",
        "stocks",
        cmd_stocks,
    )]
}

fn cmd_stocks(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.navigate(|view: &mut StocksView, _client, _config| {
        output::section("Stocks");
        note_source(view.source());

        let quotes = view.quotes();
        if quotes.is_empty() {
            output::info("No market data available.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            TableColumn::left("Ticker"),
            TableColumn::right("Latest"),
            TableColumn::right("Average"),
            TableColumn::right("Change"),
        ]);
        for quote in &quotes {
            table.push(vec![
                quote.ticker.clone(),
                quote.latest.map(money).unwrap_or_else(|| "-".into()),
                quote.average.map(money).unwrap_or_else(|| "-".into()),
                trend_colored(signed_percent(quote.change_percent), quote.change_percent),
            ]);
        }
        output::block(table.render());

        let summary = view.summary();
        output::info(format!("Tracked stocks : {}", summary.tracked));
        output::info(format!(
            "Average change : {}",
            trend_colored(signed_percent(summary.average_change), summary.average_change)
        ));
        if let Some(best) = summary.best_performer {
            output::info(format!("Best performer : {best}"));
        }
        Ok(())
    })
}
