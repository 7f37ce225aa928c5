//! Configuration settings for Ticketdesk.

use crate::i18n::Locale;
use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `TICKETDESK_API__BASE_URL`.
pub const ENV_PREFIX: &str = "TICKETDESK";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);

        match path {
            Some(path) => Self::from_sources(&path, true, env),
            None => Self::from_sources(&default_config_path(), false, env),
        }
    }

    /// Layer defaults, an optional TOML file and environment variables.
    pub fn from_sources(path: &Path, required: bool, env: Environment) -> crate::Result<Self> {
        tracing::debug!(path = %path.display(), required, "loading configuration");

        config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| crate::Error::config(e.to_string()))
            .and_then(|config| {
                config.api.validate()?;
                Ok(config)
            })
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Booking API base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Pre-issued bearer token sent with every request.
    pub auth_token: Option<String>,
}

impl ApiConfig {
    /// Reject settings that would make every request fail.
    pub fn validate(&self) -> crate::Result<()> {
        if self.timeout_secs == 0 {
            return Err(crate::Error::config("api.timeout_secs must be at least 1"));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            auth_token: None,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Language for labels and notifications.
    pub locale: Locale,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            locale: Locale::En,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Open the selected order.
    pub select: String,
    /// Go back.
    pub back: String,
    /// Refresh data.
    pub refresh: String,
    /// Cancel the selected order.
    pub cancel_order: String,
    /// Delete the selected order.
    pub delete_order: String,
    /// Dismiss the current notification.
    pub dismiss: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            refresh: "r".to_string(),
            cancel_order: "c".to_string(),
            delete_order: "d".to_string(),
            dismiss: "x".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_missing_optional_file_yields_defaults() {
        let config =
            Config::from_sources(Path::new("/nonexistent/ticketdesk.toml"), false, env_from(&[]))
                .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let result =
            Config::from_sources(Path::new("/nonexistent/ticketdesk.toml"), true, env_from(&[]));
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_file_then_env_override() {
        let dir = std::env::temp_dir().join(format!("ticketdesk-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://tickets.example\"\ntimeout_secs = 5\n\n[ui]\nlocale = \"zh\"\n",
        )
        .unwrap();

        let config = Config::from_sources(
            &path,
            true,
            env_from(&[("TICKETDESK_API__TIMEOUT_SECS", "12")]),
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://tickets.example");
        assert_eq!(config.api.timeout_secs, 12);
        assert_eq!(config.ui.locale, Locale::Zh);
        assert_eq!(config.keybindings, KeyBindings::default());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Config::from_sources(
            Path::new("/nonexistent/ticketdesk.toml"),
            false,
            env_from(&[("TICKETDESK_API__TIMEOUT_SECS", "0")]),
        );
        assert!(matches!(result, Err(crate::Error::Config(msg)) if msg.contains("timeout_secs")));
    }

    #[test]
    fn test_save_round_trips_through_load() {
        let dir = std::env::temp_dir().join(format!("ticketdesk-save-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.api.auth_token = Some("secret".into());
        config.save(Some(path.clone())).unwrap();

        let loaded = Config::from_sources(&path, true, env_from(&[])).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).ok();
    }
}
