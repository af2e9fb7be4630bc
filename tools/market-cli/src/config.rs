//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use market_data::{RemoteConfig, RetryPolicy, TimeoutConfig, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "MARKET_API_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Listing API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Local catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config file: {}", path))
    }

    /// Parse config text as JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Apply `MARKET_API_URL` when set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        let url = std::env::var(API_URL_ENV).ok();
        self.with_api_url(url)
    }

    fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Client settings for the listing API.
    pub fn remote_config(&self) -> RemoteConfig {
        let timeout = TimeoutConfig::from_total(Duration::from_millis(self.api.timeout_ms));

        RemoteConfig::new(&self.api.base_url)
            .with_timeout(timeout)
            .with_retry(RetryPolicy::new(self.api.max_retries))
            .with_max_pages(self.api.max_pages)
    }
}

/// Listing API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// API root URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after the first failed request.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Upper bound on listing pages fetched per load.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    4_000
}

fn default_max_retries() -> u32 {
    2
}

fn default_max_pages() -> u32 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            max_pages: default_max_pages(),
        }
    }
}

/// Local catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Always use the built-in catalog.
    #[serde(default)]
    pub offline: bool,

    /// Where favorites are stored, relative to the working directory.
    #[serde(default = "default_favorites_file")]
    pub favorites_file: String,
}

fn default_favorites_file() -> String {
    ".market/favorites.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            offline: false,
            favorites_file: default_favorites_file(),
        }
    }
}

/// Generate a default market.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Marketplace CLI configuration

[api]
base_url = "{base_url}"
timeout_ms = {timeout_ms}
max_retries = {max_retries}
max_pages = {max_pages}

[catalog]
# Set to true to skip the listing API and browse the built-in catalog.
offline = false
favorites_file = "{favorites_file}"
"#,
        base_url = DEFAULT_API_URL,
        timeout_ms = default_timeout_ms(),
        max_retries = default_max_retries(),
        max_pages = default_max_pages(),
        favorites_file = default_favorites_file(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = CliConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = CliConfig::parse(
            r#"
[api]
base_url = "https://market.example.com/api/v1"
"#,
            false,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://market.example.com/api/v1");
        assert_eq!(config.api.timeout_ms, 4_000);
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            r#"{"catalog": {"offline": true, "favorites_file": "favs.json"}}"#,
            true,
        )
        .unwrap();

        assert!(config.catalog.offline);
        assert_eq!(config.catalog.favorites_file, "favs.json");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(CliConfig::parse("[api\nbase_url = 1", false).is_err());
    }

    #[test]
    fn test_api_url_override() {
        let config =
            CliConfig::default().with_api_url(Some(" http://10.0.0.2:8000/api/v1 ".into()));
        assert_eq!(config.api.base_url, "http://10.0.0.2:8000/api/v1");

        let config = CliConfig::default().with_api_url(Some("  ".into()));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);

        let config = CliConfig::default().with_api_url(None);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_remote_config_mapping() {
        let mut config = CliConfig::default();
        config.api.timeout_ms = 2_000;
        config.api.max_retries = 0;
        config.api.max_pages = 3;

        let remote = config.remote_config();
        assert_eq!(remote.base_url, DEFAULT_API_URL);
        assert_eq!(remote.timeout.total, Duration::from_millis(2_000));
        assert_eq!(remote.retry.max_retries, 0);
        assert_eq!(remote.max_pages, 3);
    }
}
