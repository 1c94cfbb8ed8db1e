use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::money;
use crate::views::edit::EditState;
use crate::views::BudgetView;

use super::dashboard::{print_alert, usage_table};
use super::note_source;

const USAGE: &str = "budget [list|edit <category>|set <total|spent> <value>|save|cancel]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Review budgets and edit totals or spending",
        USAGE,
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None | Some("list") => context.navigate(|view: &mut BudgetView, _client, config| {
            note_source(view.source());
            render(view, config.notifications.budget_alerts);
            Ok(())
        }),
        Some("edit") => {
            let category = args
                .get(1)
                .ok_or_else(|| CommandError::usage("budget edit <category>"))?;
            context.with_view(|view: &mut BudgetView, _client, _config| {
                let draft = view.begin_edit(category)?;
                output::info(format!(
                    "Editing {category}: total {}, spent {}.",
                    money(draft.total_budget),
                    money(draft.spent)
                ));
                output::hint("Use `budget set total|spent <value>`, then `budget save` or `budget cancel`.");
                Ok(())
            })
        }
        Some("set") => {
            let (field, raw) = match args {
                [_, field, raw] => (field.to_lowercase(), *raw),
                _ => return Err(CommandError::usage("budget set <total|spent> <value>")),
            };
            context.with_view(|view: &mut BudgetView, _client, _config| {
                let value = match field.as_str() {
                    "total" => view.set_total_budget(raw)?,
                    "spent" => view.set_spent(raw)?,
                    _ => return Err(CommandError::usage("budget set <total|spent> <value>")),
                };
                output::info(format!("Draft {field} set to {}.", money(value)));
                Ok(())
            })
        }
        Some("save") => context.with_view(|view: &mut BudgetView, client, _config| {
            match view.save(client) {
                Ok(budget) => {
                    output::success(format!(
                        "Saved {}: total {}, spent {}.",
                        budget.category,
                        money(budget.total_budget),
                        money(budget.spent)
                    ));
                    Ok(())
                }
                Err(err) => {
                    if view.edit_state() != &EditState::Viewing {
                        output::hint("Draft kept; retry `budget save` or `budget cancel`.");
                    }
                    Err(err.into())
                }
            }
        }),
        Some("cancel") => context.with_view(|view: &mut BudgetView, _client, _config| {
            if view.cancel() {
                output::info("Edit discarded.");
            } else {
                output::info("Nothing to cancel.");
            }
            Ok(())
        }),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown budget action `{other}`. Usage: {USAGE}"
        ))),
    }
}

fn render(view: &BudgetView, alerts: bool) {
    output::section("Budget");
    if view.budgets().is_empty() {
        output::info("No budgets yet.");
        return;
    }
    output::block(usage_table(view.usages()));
    if alerts {
        for (budget, usage) in view.usages() {
            print_alert(budget, &usage);
        }
    }
}
