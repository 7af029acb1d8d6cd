//! Backend location, resolved once before the application is mounted.

use crate::CONFIG_URL;
use gloo::net::http::Request;
use log::{debug, warn};
use once_cell::sync::{Lazy, OnceCell};
use serde::Deserialize;
use thiserror::Error;

/// Used when `config.json` is missing or unreadable.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();
static FALLBACK: Lazy<AppConfig> = Lazy::new(AppConfig::default);

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL every resource path is appended to, without a trailing slash.
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot fetch configuration: {0}")]
    Fetch(#[from] gloo::net::Error),
    #[error("configuration request responded with {0}")]
    Status(u16),
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AppConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_json::from_str(raw)?;
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}

/// Fetches `config.json` served next to the bundle.
pub async fn fetch_config() -> Result<AppConfig, ConfigError> {
    let response = Request::get(CONFIG_URL).send().await?;
    if !response.ok() {
        return Err(ConfigError::Status(response.status()));
    }
    let raw = response.text().await?;
    AppConfig::parse(&raw)
}

/// Resolves the configuration on first call; later calls return the stored value.
pub async fn load_config() -> &'static AppConfig {
    if let Some(config) = CONFIG.get() {
        return config;
    }
    let config = match fetch_config().await {
        Ok(config) => {
            debug!("Loaded configuration from {CONFIG_URL}: {config:?}");
            config
        }
        Err(err) => {
            warn!("Using default backend {DEFAULT_API_URL}: {err}");
            AppConfig::default()
        }
    };
    init(config)
}

/// Stores the configuration. The first value wins.
pub fn init(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

/// The stored configuration, or the defaults if nothing was loaded yet.
/// Reading early never prevents a later [`init`].
pub fn get() -> &'static AppConfig {
    stored_or_default(&CONFIG)
}

fn stored_or_default(cell: &OnceCell<AppConfig>) -> &AppConfig {
    match cell.get() {
        Some(config) => config,
        None => {
            warn!("Configuration read before it was loaded, using {DEFAULT_API_URL}");
            &*FALLBACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_trailing_slashes() {
        let config =
            AppConfig::parse(r#"{"apiUrl": "https://records.example.org/api//"}"#).unwrap();
        assert_eq!(config.api_url, "https://records.example.org/api");
    }

    #[test]
    fn parse_rejects_missing_url() {
        assert!(matches!(
            AppConfig::parse(r#"{"apiURL": "x"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn early_read_leaves_the_cell_empty() {
        let cell = OnceCell::new();
        assert_eq!(stored_or_default(&cell), &AppConfig::default());
        assert!(cell.get().is_none());

        let loaded = AppConfig {
            api_url: "http://loaded.test".to_string(),
        };
        assert!(cell.set(loaded.clone()).is_ok());
        assert_eq!(stored_or_default(&cell), &loaded);
    }

    #[test]
    fn configuration_is_never_replaced() {
        let first = init(AppConfig {
            api_url: "http://first.test".to_string(),
        });
        let second = init(AppConfig {
            api_url: "http://second.test".to_string(),
        });
        assert_eq!(first, second);
        assert_eq!(get(), first);
    }
}
