use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use tracing::{info, warn};

use crate::{
    client::ApiClient,
    config::{Config, ConfigManager, DEFAULT_API_BASE_URL},
    errors::ClientResult,
    views::{
        BudgetView, ChatSession, DashboardView, ExpensesView, ForecastView, StocksView, WhatIfView,
    },
};

use super::{
    commands,
    core::{CliError, CommandError, CommandResult, LoopControl},
    output::{self, OutputPreferences},
    registry::{CommandEntry, CommandRegistry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// The screen currently on display. Replaced on every navigation, so each
/// screen starts from a fresh fetch.
pub enum Screen {
    Dashboard(DashboardView),
    Expenses(ExpensesView),
    Budget(BudgetView),
    Forecast(ForecastView),
    WhatIf(WhatIfView),
    Stocks(StocksView),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard(_) => "dashboard",
            Screen::Expenses(_) => "expenses",
            Screen::Budget(_) => "budget",
            Screen::Forecast(_) => "forecast",
            Screen::WhatIf(_) => "whatif",
            Screen::Stocks(_) => "stocks",
        }
    }
}

/// A view container that can be mounted as the current [`Screen`].
pub trait Mountable: Sized {
    fn load(client: &ApiClient) -> ClientResult<Self>;
    fn into_screen(self) -> Screen;
    fn from_screen(screen: Screen) -> Result<Self, Screen>;
}

macro_rules! mountable {
    ($view:ty, $variant:ident) => {
        impl Mountable for $view {
            fn load(client: &ApiClient) -> ClientResult<Self> {
                <$view>::load(client)
            }

            fn into_screen(self) -> Screen {
                Screen::$variant(self)
            }

            fn from_screen(screen: Screen) -> Result<Self, Screen> {
                match screen {
                    Screen::$variant(view) => Ok(view),
                    other => Err(other),
                }
            }
        }
    };
}

mountable!(DashboardView, Dashboard);
mountable!(ExpensesView, Expenses);
mountable!(BudgetView, Budget);
mountable!(ForecastView, Forecast);
mountable!(WhatIfView, WhatIf);
mountable!(StocksView, Stocks);

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    /// Stored settings with environment overrides applied.
    pub config: Config,
    pub client: ApiClient,
    pub screen: Option<Screen>,
    /// Survives navigation, like a side panel.
    pub chat: ChatSession,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        output::set_preferences(OutputPreferences::from_env());

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::new()?;
        let mut config = config_manager.load()?;
        config.apply_env_overrides()?;

        let client = match ApiClient::from_config(&config) {
            Ok(client) => client,
            Err(err) => {
                output::warning(format!("{err}; using {DEFAULT_API_BASE_URL} instead."));
                config.api_base_url = DEFAULT_API_BASE_URL.to_string();
                ApiClient::from_config(&config)?
            }
        };
        info!(api = %config.api_base_url, fallback = %config.fallback, "shell started");

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            client,
            screen: None,
            chat: ChatSession::new(),
            running: true,
        })
    }

    pub(crate) fn prompt(&self) -> String {
        match &self.screen {
            Some(screen) => format!("smartsaver ({})> ", screen.name()),
            None => "smartsaver> ".to_string(),
        }
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Drops the current screen and mounts a freshly loaded `V`.
    pub(crate) fn navigate<V, T>(
        &mut self,
        f: impl FnOnce(&mut V, &ApiClient, &Config) -> Result<T, CommandError>,
    ) -> Result<T, CommandError>
    where
        V: Mountable,
    {
        self.screen = None;
        self.with_view(f)
    }

    /// Runs `f` against the mounted `V`, navigating to it first when another
    /// screen (or none) is showing.
    pub(crate) fn with_view<V, T>(
        &mut self,
        f: impl FnOnce(&mut V, &ApiClient, &Config) -> Result<T, CommandError>,
    ) -> Result<T, CommandError>
    where
        V: Mountable,
    {
        let mut view = match self.screen.take().map(V::from_screen) {
            Some(Ok(view)) => view,
            _ => V::load(&self.client)?,
        };
        let result = f(&mut view, &self.client, &self.config);
        self.screen = Some(view.into_screen());
        result
    }

    /// Persists one setting and rebuilds the client from the result. Nothing
    /// is written when the new value leaves the client unusable.
    pub(crate) fn update_setting(&mut self, key: &str, value: &str) -> CommandResult {
        let mut stored = self.config_manager.load()?;
        stored.set(key, value)?;

        let mut effective = stored.clone();
        effective.apply_env_overrides()?;
        let client = ApiClient::from_config(&effective)?;

        self.config_manager.save(&stored)?;
        self.config = effective;
        self.client = client;
        info!(key, "setting updated");
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &input.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Validation(errors) => {
                for message in errors.messages() {
                    output::error(message);
                }
            }
            CommandError::Client(err) => {
                warn!(error = %err, "command failed");
                output::error(format!("Request failed: {err}"));
                output::hint("Check `config show` and that the backend is running.");
            }
            other => output::error(other),
        }
        Ok(())
    }

    pub(crate) fn print_warning(&self, message: &str) {
        output::warning(message);
    }
}
