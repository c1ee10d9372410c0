//! # omdb-search
//!
//! A paginating client for the OMDb movie search API.
//!
//! ## Features
//!
//! - **Full aggregation**: fetch every page of a search and return one
//!   ordered list
//! - **Explicit pages**: fetch exactly one page on request
//! - **Point lookups**: by IMDb id or exact title
//! - **All-or-nothing**: any failure aborts the call, no partial results
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use omdb_search::{ClientConfig, Result, SearchClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = SearchClient::from_config(&config)?;
//!
//!     let items = client.search("stem", None).await?;
//!     let detail = client.get_by_id(&items[0].imdb_id).await?;
//!     println!("{} directed by {}", detail.title, detail.director);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      SearchClient                        │
//! │  search() → Vec<ResultItem>   get_by_id()   get_by_title()│
//! └──────────────────────────────────────────────────────────┘
//!                │                           │
//! ┌──────────────┴─────────┬─────────────────┴───────────────┐
//! │  Pagination            │  Transport (HttpClient)         │
//! │  page count, state     │  auth, status mapping, JSON     │
//! └────────────────────────┴─────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// API key authentication
pub mod auth;

/// HTTP transport
pub mod http;

/// Page-count arithmetic
pub mod pagination;

/// Wire and query types
pub mod model;

/// Search aggregation and lookups
pub mod search;

/// Client configuration
pub mod config;

/// Logging setup
pub mod logging;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use model::{Rating, ResultItem, SearchOptions, SearchQuery, SearchResponse};
pub use search::{SearchClient, SearchEvent, SearchObserver};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
