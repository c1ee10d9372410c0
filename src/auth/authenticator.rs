//! Authenticator implementation
//!
//! Applies the configured credential to outgoing requests.

use super::types::{AuthConfig, Location, DEFAULT_API_KEY_PARAM};
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The underlying configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,

            AuthConfig::ApiKey {
                location,
                header_name,
                query_param,
                value,
            } => match location {
                Location::Query => {
                    let param = query_param.as_deref().unwrap_or(DEFAULT_API_KEY_PARAM);
                    req.query(&[(param, value.as_str())])
                }
                Location::Header => {
                    let header = header_name.as_deref().unwrap_or("Authorization");
                    req.header(header, value.as_str())
                }
            },
        }
    }
}
