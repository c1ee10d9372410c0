//! Auth configuration types

use serde::{Deserialize, Serialize};

/// Query parameter OMDb reads the key from
pub const DEFAULT_API_KEY_PARAM: &str = "apikey";

/// Location for API key placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Place in query parameter
    #[default]
    Query,
    /// Place in HTTP header
    Header,
}

/// Authentication configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// API Key authentication (query or header)
    ApiKey {
        /// Where to place the API key
        location: Location,
        /// Header name (for header location)
        header_name: Option<String>,
        /// Query parameter name (for query location)
        query_param: Option<String>,
        /// The API key value
        value: String,
    },
}

impl AuthConfig {
    /// API key passed as `apikey=<key>`
    pub fn api_key(value: impl Into<String>) -> Self {
        Self::ApiKey {
            location: Location::Query,
            header_name: None,
            query_param: None,
            value: value.into(),
        }
    }

    /// API key passed in a request header
    pub fn api_key_header(header_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            location: Location::Header,
            header_name: Some(header_name.into()),
            query_param: None,
            value: value.into(),
        }
    }

    /// Whether any credential is configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

// Keys never show up in logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::ApiKey {
                location,
                header_name,
                query_param,
                ..
            } => f
                .debug_struct("ApiKey")
                .field("location", location)
                .field("header_name", header_name)
                .field("query_param", query_param)
                .field("value", &"***")
                .finish(),
        }
    }
}
