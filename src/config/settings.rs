//! Configuration settings for the dashboard client.

use crate::state::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "DLT_API_BASE_URL";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from the default location, then apply the
    /// environment override.
    pub fn load_or_default() -> crate::Result<Self> {
        let mut config = Self::load(None)?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
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

    /// Apply `DLT_API_BASE_URL` when set and non-empty.
    pub fn apply_env(&mut self) {
        self.apply_base_url(std::env::var(BASE_URL_ENV).ok());
    }

    fn apply_base_url(&mut self, value: Option<String>) {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            tracing::debug!(base_url = %url, "Using base URL from environment");
            self.api.base_url = url;
        }
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
    /// Backend base URL, including the `/api` prefix.
    pub base_url: String,
    /// Default request timeout in seconds.
    pub timeout_secs: u64,
    /// Timeout for the backtest call in seconds.
    pub backtest_timeout_secs: u64,
    /// Token storage file (defaults to the data directory).
    pub token_path: Option<PathBuf>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn backtest_timeout(&self) -> Duration {
        Duration::from_secs(self.backtest_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 30,
            backtest_timeout_secs: 120,
            token_path: None,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial theme.
    pub theme: Theme,
    /// Start with the sidebar collapsed.
    pub sidebar_collapsed: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sidebar_collapsed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.timeout(), Duration::from_millis(30_000));
        assert_eq!(config.api.backtest_timeout(), Duration::from_millis(120_000));
        assert_eq!(config.ui.theme, Theme::Dark);
        assert!(!config.ui.sidebar_collapsed);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://dlt.example.com/api"

            [ui]
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://dlt.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.theme, Theme::Light);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf").join("config.toml");

        let mut config = Config::default();
        config.api.timeout_secs = 10;
        config.save(Some(path.clone())).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempdir().unwrap();
        let loaded = Config::load(Some(dir.path().join("nope.toml"))).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_base_url_override() {
        let mut config = Config::default();
        config.apply_base_url(Some("  ".into()));
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        config.apply_base_url(Some("http://10.0.0.2/api".into()));
        assert_eq!(config.api.base_url, "http://10.0.0.2/api");
    }
}
