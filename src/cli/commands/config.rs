use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::table::{Table, TableColumn};

const USAGE: &str = "config [show|set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change profile, notification and backend settings",
        USAGE,
        cmd_config,
    )
    .with_aliases(&["settings"])]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None | Some("show") => {
            show(context);
            Ok(())
        }
        Some("set") => {
            let (key, value) = match args {
                [_, key, value @ ..] if !value.is_empty() => (*key, value.join(" ")),
                _ => return Err(CommandError::usage("config set <key> <value>")),
            };
            context.update_setting(key, &value)?;
            output::success(format!("Saved {key}."));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown config action `{other}`. Usage: {USAGE}"
        ))),
    }
}

fn show(context: &ShellContext) {
    output::section("Settings");
    let mut table = Table::new(vec![TableColumn::left("Key"), TableColumn::left("Value")]);
    for (key, value) in context.config.entries() {
        table.push(vec![key.to_string(), value]);
    }
    output::block(table.render());
    output::hint(format!(
        "Stored in {}",
        context.config_manager.path().display()
    ));
}
