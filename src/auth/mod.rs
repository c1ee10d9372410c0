//! Authentication module
//!
//! Supports: API Key (query parameter or header)
//!
//! OMDb authenticates every request with an `apikey` query parameter.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, Location, DEFAULT_API_KEY_PARAM};
