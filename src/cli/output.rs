use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// No colors and ASCII-only decorations.
    pub plain_mode: bool,
    pub quiet_mode: bool,
}

impl OutputPreferences {
    /// Plain output when `NO_COLOR` is set, as most terminals expect.
    pub fn from_env() -> Self {
        Self {
            plain_mode: std::env::var_os("NO_COLOR").is_some(),
            quiet_mode: false,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    if prefs.plain_mode {
        colored::control::set_override(false);
    }
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind, plain: bool) -> &'static str {
    match (kind, plain) {
        (MessageKind::Success, false) => "✔ ",
        (MessageKind::Success, true) => "OK: ",
        (MessageKind::Warning, false) => "⚠ ",
        (MessageKind::Warning, true) => "WARNING: ",
        (MessageKind::Error, false) => "✖ ",
        (MessageKind::Error, true) => "ERROR: ",
        (MessageKind::Hint, _) => "hint: ",
        (MessageKind::Info | MessageKind::Section, _) => "",
    }
}

/// Formats a message the way [`print`] would emit it.
pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let prefs = current_preferences();
    let text = match kind {
        MessageKind::Section => format!("=== {} ===", message.to_string().trim()),
        _ => format!("{}{}", label(kind, prefs.plain_mode), message),
    };

    if prefs.plain_mode {
        return text;
    }

    match kind {
        MessageKind::Success => text.green().to_string(),
        MessageKind::Warning => text.yellow().to_string(),
        MessageKind::Error => text.red().to_string(),
        MessageKind::Hint => text.dimmed().to_string(),
        MessageKind::Section => text.bold().to_string(),
        MessageKind::Info => text,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    if prefs.quiet_mode && matches!(kind, MessageKind::Hint) {
        return;
    }
    let formatted = styled(kind, message);
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints pre-rendered, possibly multi-line text unchanged.
pub fn block(text: impl fmt::Display) {
    println!("{text}");
}
