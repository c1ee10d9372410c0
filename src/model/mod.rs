//! Data model module
//!
//! Serde types for the OMDb wire format and the caller-facing query types.
//!
//! # Overview
//!
//! Every descriptive field is kept as an opaque string. The upstream format
//! is inconsistent (numeric-looking fields such as `Metascore` may hold
//! `"N/A"`), so the only value ever parsed as a number is the search
//! response's `totalResults`.

mod types;

pub use types::{Rating, ResultItem, SearchOptions, SearchQuery, SearchResponse};
