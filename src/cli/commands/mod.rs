pub mod budget;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod expenses;
pub mod forecast;
pub mod stocks;
pub mod system;
pub mod whatif;

use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::client::DataSource;

const ROOT_COMMAND_ORDER: &[&str] = &[
    "dashboard",
    "expenses",
    "budget",
    "forecast",
    "whatif",
    "stocks",
    "chat",
    "suggest",
    "config",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(dashboard::definitions());
    commands.extend(expenses::definitions());
    commands.extend(budget::definitions());
    commands.extend(forecast::definitions());
    commands.extend(whatif::definitions());
    commands.extend(stocks::definitions());
    commands.extend(chat::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

/// Tells the user when a screen is showing placeholder data.
pub(crate) fn note_source(source: DataSource) {
    if source == DataSource::Fallback {
        output::warning("Backend unreachable; showing demo data.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_has_a_fixed_position() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        let names: Vec<_> = registry.list().iter().map(|entry| entry.name).collect();
        assert_eq!(names, ROOT_COMMAND_ORDER);
    }
}
