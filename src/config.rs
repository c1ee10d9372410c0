//! Client configuration
//!
//! `ClientConfig` is loaded from a YAML file, the environment, or both
//! (environment wins), then validated before a client is built from it.
//!
//! ```yaml
//! base_url: http://www.omdbapi.com/
//! api_key: abcd1234
//! timeout_ms: 120000
//! page_size: 10
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Public OMDb endpoint
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Environment variable for the endpoint
pub const ENV_BASE_URL: &str = "OMDB_BASE_URL";
/// Environment variable for the API key
pub const ENV_API_KEY: &str = "OMDB_API_KEY";
/// Older name for the API key variable, still honoured
pub const ENV_API_KEY_LEGACY: &str = "APIKEY";
/// Environment variable for the request timeout
pub const ENV_TIMEOUT_MS: &str = "OMDB_TIMEOUT_MS";
/// Environment variable for the page size
pub const ENV_PAGE_SIZE: &str = "OMDB_PAGE_SIZE";

/// Settings needed to talk to the search endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API credential, sent as `apikey=<key>`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Items per search page served upstream
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE.get()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            page_size: default_page_size(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("timeout_ms", &self.timeout_ms)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl ClientConfig {
    /// Parse a YAML document
    ///
    /// Values are not validated here, so a file may be completed by
    /// environment or flag overrides. Call [`validate`](Self::validate) once
    /// every layer is applied.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML file, unvalidated like [`from_yaml_str`](Self::from_yaml_str)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from an environment lookup
    ///
    /// Takes the lookup as a closure so callers (and tests) can supply
    /// something other than the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }

        if let Some(key) = lookup(ENV_API_KEY).or_else(|| lookup(ENV_API_KEY_LEGACY)) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            self.timeout_ms = raw
                .parse()
                .map_err(|e| Error::invalid_value(ENV_TIMEOUT_MS, format!("{e}")))?;
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = raw
                .parse()
                .map_err(|e| Error::invalid_value(ENV_PAGE_SIZE, format!("{e}")))?;
        }

        Ok(())
    }

    /// Check that the config can produce a working client
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;

        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        if self.timeout_ms == 0 {
            return Err(Error::invalid_value("timeout_ms", "must be at least 1"));
        }
        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(self.timeout())
            .build()
    }

    /// Credential derived from this config
    pub fn auth_config(&self) -> AuthConfig {
        match &self.api_key {
            Some(key) => AuthConfig::api_key(key),
            None => AuthConfig::None,
        }
    }
}
