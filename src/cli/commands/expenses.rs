use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::{money, percent, progress_bar};
use crate::cli::ui::table::{Table, TableColumn};
use crate::views::aggregates::CategoryTotal;
use crate::views::{AddOutcome, ExpenseForm, ExpensesView};

use super::note_source;

const USAGE: &str = "expenses [list|add <category> <amount>|remove <number>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "expenses",
        "List, add and remove expenses",
        USAGE,
        cmd_expenses,
    )]
}

fn cmd_expenses(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None => context.navigate(|view: &mut ExpensesView, _client, _config| {
            note_source(view.source());
            render(view);
            Ok(())
        }),
        Some("list") => context.with_view(|view: &mut ExpensesView, _client, _config| {
            render(view);
            Ok(())
        }),
        Some("add") => {
            let form = match args {
                [_, category, amount] => ExpenseForm::new(*category, *amount),
                [_, category] => ExpenseForm::new(*category, ""),
                [_] => ExpenseForm::default(),
                _ => return Err(CommandError::usage("expenses add <category> <amount>")),
            };
            // Checked before mounting so a bad form never reaches the backend.
            form.validate()?;
            context.with_view(|view: &mut ExpensesView, client, _config| {
                match view.add(client, &form)? {
                    AddOutcome::Synced => {
                        output::success(view.success_message().unwrap_or_default());
                    }
                    AddOutcome::LocalOnly(err) => {
                        output::error(view.general_error().unwrap_or_default());
                        output::hint(format!("Kept locally: {err}"));
                    }
                }
                Ok(())
            })
        }
        Some("remove") => {
            let number = args
                .get(1)
                .and_then(|raw| raw.parse::<usize>().ok())
                .filter(|number| *number > 0)
                .ok_or_else(|| CommandError::usage("expenses remove <number>"))?;
            context.with_view(|view: &mut ExpensesView, _client, _config| {
                let removed = view.remove(number - 1)?;
                output::success(format!(
                    "Removed {} expense of {} (not synced).",
                    removed.category,
                    money(removed.amount)
                ));
                Ok(())
            })
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown expenses action `{other}`. Usage: {USAGE}"
        ))),
    }
}

fn render(view: &ExpensesView) {
    output::section("Expenses");
    if view.expenses().is_empty() {
        output::info("No expenses recorded.");
        return;
    }

    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
    ]);
    for (idx, expense) in view.expenses().iter().enumerate() {
        table.push(vec![
            (idx + 1).to_string(),
            expense.category.clone(),
            money(expense.amount),
        ]);
    }
    output::block(table.render());

    output::section("Spending by category");
    output::block(distribution_table(&view.pie_slices()));

    output::section("Category totals");
    output::block(totals_table(&view.bar_series()));
}

/// Share of the total per non-empty category.
fn distribution_table(slices: &[CategoryTotal]) -> String {
    let sum: f64 = slices.iter().map(|slice| slice.total).sum();
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Total"),
        TableColumn::right("Share"),
    ]);
    for slice in slices {
        let share = (sum > 0.0).then(|| slice.total / sum * 100.0);
        table.push(vec![
            slice.category.to_string(),
            money(slice.total),
            percent(share, 1),
        ]);
    }
    table.render()
}

/// Every category, scaled against the largest total.
fn totals_table(series: &[CategoryTotal]) -> String {
    let max = series.iter().map(|entry| entry.total).fold(0.0, f64::max);
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Total"),
        TableColumn::left(""),
    ]);
    for entry in series {
        let fill = if max > 0.0 { entry.total / max * 100.0 } else { 0.0 };
        table.push(vec![
            entry.category.to_string(),
            money(entry.total),
            progress_bar(fill),
        ]);
    }
    table.render()
}
