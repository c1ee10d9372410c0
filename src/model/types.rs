//! Wire and query types
//!
//! Field names follow the OMDb JSON exactly through serde renames.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One `(source, value)` rating pair, e.g. `("Rotten Tomatoes", "92%")`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    #[serde(rename = "Source", deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(rename = "Value", deserialize_with = "null_as_default")]
    pub value: String,
}

/// A single title as returned by a point lookup or inside a search page
///
/// Search pages only populate `Title`, `Year`, `imdbID`, `Type` and
/// `Poster`; every other field is left empty in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultItem {
    #[serde(rename = "Title", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "Year", deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(rename = "Rated", deserialize_with = "null_as_default")]
    pub rated: String,
    #[serde(rename = "Released", deserialize_with = "null_as_default")]
    pub released: String,
    #[serde(rename = "Runtime", deserialize_with = "null_as_default")]
    pub runtime: String,
    #[serde(rename = "Genre", deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(rename = "Director", deserialize_with = "null_as_default")]
    pub director: String,
    #[serde(rename = "Writer", deserialize_with = "null_as_default")]
    pub writer: String,
    #[serde(rename = "Actors", deserialize_with = "null_as_default")]
    pub actors: String,
    #[serde(rename = "Plot", deserialize_with = "null_as_default")]
    pub plot: String,
    #[serde(rename = "Language", deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(rename = "Country", deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(rename = "Awards", deserialize_with = "null_as_default")]
    pub awards: String,
    #[serde(rename = "Poster", deserialize_with = "null_as_default")]
    pub poster: String,
    #[serde(rename = "Ratings", deserialize_with = "null_as_default")]
    pub ratings: Vec<Rating>,
    #[serde(rename = "Metascore", deserialize_with = "null_as_default")]
    pub metascore: String,
    #[serde(rename = "imdbRating", deserialize_with = "null_as_default")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes", deserialize_with = "null_as_default")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID", deserialize_with = "null_as_default")]
    pub imdb_id: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub item_type: String,
    #[serde(rename = "DVD", deserialize_with = "null_as_default")]
    pub dvd: String,
    #[serde(rename = "BoxOffice", deserialize_with = "null_as_default")]
    pub box_office: String,
    #[serde(rename = "Production", deserialize_with = "null_as_default")]
    pub production: String,
    #[serde(rename = "Website", deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(rename = "Response", deserialize_with = "null_as_default")]
    pub response: String,
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Items on this page, in server order
    #[serde(rename = "Search", deserialize_with = "null_as_default")]
    pub items: Vec<ResultItem>,
    /// Decimal string; empty when the server omitted it
    #[serde(rename = "totalResults", deserialize_with = "null_as_default")]
    pub total_results: String,
    /// `"True"` or `"False"`
    #[serde(rename = "Response", deserialize_with = "null_as_default")]
    pub response: String,
    /// Server-side error message, present when `Response` is `"False"`
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Caller options for a search
///
/// Passing options switches the search into explicit-page mode: exactly
/// one page is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// 1-based page number
    pub page: u32,
}

impl SearchOptions {
    /// Options requesting a single page
    pub fn page(page: u32) -> Self {
        Self { page }
    }
}

/// A validated search request, built once per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    explicit_page: Option<u32>,
}

impl SearchQuery {
    /// Validate a term and optional page selection
    ///
    /// Blank terms and page `0` are rejected before any request is built.
    pub fn new(term: impl Into<String>, options: Option<SearchOptions>) -> Result<Self> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(Error::invalid_query("search term must not be empty"));
        }
        if let Some(SearchOptions { page: 0 }) = options {
            return Err(Error::invalid_query("page numbers start at 1"));
        }
        Ok(Self {
            term,
            explicit_page: options.map(|o| o.page),
        })
    }

    /// The search term, as given
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The page the caller pinned, if any
    pub fn explicit_page(&self) -> Option<u32> {
        self.explicit_page
    }

    /// Whether this query fetches every page
    pub fn is_full_aggregation(&self) -> bool {
        self.explicit_page.is_none()
    }
}
