use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::{money, signed_money, trend_colored};
use crate::cli::ui::table::{Table, TableColumn};
use crate::views::whatif::RUN_FAILURE_MESSAGE;
use crate::views::{ViewError, WhatIfView};

use super::note_source;

const USAGE: &str = "whatif [show|set <category> <delta>|run|reset]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "whatif",
        "Try budget adjustments before committing to them",
        USAGE,
        cmd_whatif,
    )]
}

fn cmd_whatif(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None => context.navigate(|view: &mut WhatIfView, _client, _config| {
            note_source(view.source());
            render(view);
            Ok(())
        }),
        Some("show") => context.with_view(|view: &mut WhatIfView, _client, _config| {
            render(view);
            Ok(())
        }),
        Some("set") => {
            let (category, raw) = match args {
                [_, category, raw] => (*category, *raw),
                _ => return Err(CommandError::usage("whatif set <category> <delta>")),
            };
            context.with_view(|view: &mut WhatIfView, _client, _config| {
                let delta = view.set_adjustment(category, raw)?;
                output::info(format!(
                    "Adjustment for {category}: {}. Use `whatif run` to apply.",
                    signed_money(delta)
                ));
                Ok(())
            })
        }
        Some("run") => context.with_view(|view: &mut WhatIfView, client, _config| {
            match view.run(client) {
                Ok(source) => {
                    note_source(source);
                    render(view);
                    Ok(())
                }
                Err(ViewError::Client(err)) => {
                    output::error(RUN_FAILURE_MESSAGE);
                    output::hint(err);
                    Ok(())
                }
                Err(err) => Err(err.into()),
            }
        }),
        Some("reset") => context.with_view(|view: &mut WhatIfView, _client, _config| {
            view.reset();
            output::info("Scenario reset to current budgets.");
            Ok(())
        }),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown whatif action `{other}`. Usage: {USAGE}"
        ))),
    }
}

fn render(view: &WhatIfView) {
    output::section("What-if analysis");
    if view.original().is_empty() {
        output::info("No budgets to adjust.");
        return;
    }

    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Adjustment"),
        TableColumn::right("Original"),
        TableColumn::right("Adjusted"),
        TableColumn::right("Change"),
        TableColumn::right("Remaining"),
    ]);
    for row in view.comparison() {
        let pending = view.adjustments().get(&row.category).copied().unwrap_or(0.0);
        table.push(vec![
            row.category.clone(),
            signed_money(pending),
            money(row.original_total),
            money(row.adjusted_total),
            trend_colored(signed_money(row.change), row.change),
            money(row.remaining),
        ]);
    }
    output::block(table.render());

    let change = view.total_change();
    let totals = view.adjusted_totals();
    output::info(format!(
        "Total budget change : {}",
        trend_colored(signed_money(change), change)
    ));
    output::info(format!("New total budget    : {}", money(totals.total_budget)));
    output::info(format!("Remaining budget    : {}", money(totals.remaining())));
    if view.has_changes() {
        output::hint("Pending adjustments; run `whatif run` to apply them.");
    }
}
