use serde::{Deserialize, Serialize};
use std::{
    env, fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{errors::ConfigError, utils::paths};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "SMARTSAVER_API_URL";
pub const FALLBACK_ENV: &str = "SMARTSAVER_FALLBACK";

/// What a failed read should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Substitute the built-in placeholder payload so views stay renderable.
    #[default]
    Demo,
    /// Surface the failure to the caller.
    Strict,
}

impl FallbackMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackMode::Demo => "demo",
            FallbackMode::Strict => "strict",
        }
    }
}

impl fmt::Display for FallbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "demo" | "offline" => Ok(FallbackMode::Demo),
            "strict" => Ok(FallbackMode::Strict),
            other => Err(ConfigError::Invalid(format!(
                "fallback must be `demo` or `strict`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "User".into(),
            email: "user@example.com".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notifications {
    /// Warn when a budget nears or passes its limit.
    pub budget_alerts: bool,
    pub spending_reports: bool,
    pub ai_insights: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            budget_alerts: true,
            spending_reports: true,
            ai_insights: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub fallback: FallbackMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    pub profile: Profile,
    pub notifications: Notifications,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            fallback: FallbackMode::default(),
            user_id: None,
            request_timeout_secs: None,
            profile: Profile::default(),
            notifications: Notifications::default(),
        }
    }
}

impl Config {
    /// Keys accepted by [`Config::set`], in display order.
    pub const KEYS: &'static [&'static str] = &[
        "api_base_url",
        "fallback",
        "user_id",
        "request_timeout_secs",
        "profile.name",
        "profile.email",
        "notifications.budget_alerts",
        "notifications.spending_reports",
        "notifications.ai_insights",
    ];

    /// Applies `SMARTSAVER_API_URL` and `SMARTSAVER_FALLBACK` on top of the stored values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
        if let Ok(mode) = env::var(FALLBACK_ENV) {
            self.fallback = mode.parse()?;
        }
        Ok(())
    }

    /// Updates a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "api_base_url" => {
                if value.is_empty() {
                    return Err(ConfigError::Invalid("api_base_url cannot be empty".into()));
                }
                self.api_base_url = value.to_string();
            }
            "fallback" => self.fallback = value.parse()?,
            "user_id" => self.user_id = optional(value),
            "request_timeout_secs" => {
                self.request_timeout_secs = match optional(value) {
                    None => None,
                    Some(raw) => Some(raw.parse().map_err(|_| {
                        ConfigError::Invalid(format!("`{raw}` is not a number of seconds"))
                    })?),
                }
            }
            "profile.name" => self.profile.name = value.to_string(),
            "profile.email" => self.profile.email = value.to_string(),
            "notifications.budget_alerts" => self.notifications.budget_alerts = flag(value)?,
            "notifications.spending_reports" => {
                self.notifications.spending_reports = flag(value)?
            }
            "notifications.ai_insights" => self.notifications.ai_insights = flag(value)?,
            other => {
                return Err(ConfigError::Invalid(format!(
                    "unknown setting `{other}`; expected one of: {}",
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Key/value pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api_base_url", self.api_base_url.clone()),
            ("fallback", self.fallback.to_string()),
            (
                "user_id",
                self.user_id.clone().unwrap_or_else(|| "-".into()),
            ),
            (
                "request_timeout_secs",
                self.request_timeout_secs
                    .map(|secs| secs.to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
            ("profile.name", self.profile.name.clone()),
            ("profile.email", self.profile.email.clone()),
            (
                "notifications.budget_alerts",
                self.notifications.budget_alerts.to_string(),
            ),
            (
                "notifications.spending_reports",
                self.notifications.spending_reports.to_string(),
            ),
            (
                "notifications.ai_insights",
                self.notifications.ai_insights.to_string(),
            ),
        ]
    }
}

fn optional(value: &str) -> Option<String> {
    match value {
        "" | "-" | "none" => None,
        other => Some(other.to_string()),
    }
}

fn flag(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(ConfigError::Invalid(format!("`{other}` is not a boolean"))),
    }
}

/// Loads and stores [`Config`] as JSON inside the application directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the stored configuration, or defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.fallback, FallbackMode::Demo);
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.set("fallback", "strict").unwrap();
        config.set("user_id", "u-42").unwrap();
        config.set("notifications.budget_alerts", "off").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.fallback, FallbackMode::Strict);
        assert_eq!(loaded.user_id.as_deref(), Some("u-42"));
        assert!(!loaded.notifications.budget_alerts);
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"api_base_url":"http://127.0.0.1:9000"}"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(loaded.profile, Profile::default());
    }

    #[test]
    fn unknown_keys_and_bad_values_are_rejected() {
        let mut config = Config::default();
        assert!(config.set("theme", "dark").is_err());
        assert!(config.set("fallback", "sometimes").is_err());
        assert!(config.set("request_timeout_secs", "soon").is_err());
        config.set("request_timeout_secs", "5").unwrap();
        assert_eq!(config.request_timeout_secs, Some(5));
        config.set("request_timeout_secs", "none").unwrap();
        assert_eq!(config.request_timeout_secs, None);
    }
}
