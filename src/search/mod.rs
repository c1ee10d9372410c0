//! Search module
//!
//! Paginating search aggregation and point lookups.
//!
//! # Overview
//!
//! `SearchClient::search` fetches the first page, reads `totalResults`,
//! derives the page count and then fetches pages `2..=N` one after another,
//! appending each page's items in order. Any failure aborts the whole call:
//! the caller gets either every item or an error, never a partial list.
//!
//! ```text
//! Init ──▶ FirstPageFetched ──┬──▶ Done            (explicit page, or one page)
//!                             └──▶ Paginating ──▶ Done
//!              any error ─────────────────────▶ Failed
//! ```

mod events;

pub use events::{NullObserver, SearchEvent, SearchObserver, TracingObserver};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig, Transport};
use crate::model::{ResultItem, SearchOptions, SearchQuery, SearchResponse};
use crate::pagination::{parse_total_results, PaginationState, DEFAULT_PAGE_SIZE};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Query parameter carrying the search term
pub const PARAM_SEARCH: &str = "s";
/// Query parameter carrying an identifier lookup
pub const PARAM_ID: &str = "i";
/// Query parameter carrying a title lookup
pub const PARAM_TITLE: &str = "t";
/// Query parameter carrying the 1-based page number
pub const PARAM_PAGE: &str = "page";

/// Request for one search page; `page` is omitted for the implicit first page
pub fn search_request(term: &str, page: Option<u64>) -> RequestConfig {
    let request = RequestConfig::new().query(PARAM_SEARCH, term);
    match page {
        Some(page) => request.query(PARAM_PAGE, page.to_string()),
        None => request,
    }
}

/// Request for an identifier lookup
pub fn id_request(id: &str) -> RequestConfig {
    RequestConfig::new().query(PARAM_ID, id)
}

/// Request for an exact title lookup
pub fn title_request(title: &str) -> RequestConfig {
    RequestConfig::new().query(PARAM_TITLE, title)
}

/// Search client for the OMDb API
///
/// Stateless between calls: each call owns its own accumulator, so one
/// client can serve concurrent callers.
pub struct SearchClient {
    transport: Arc<dyn Transport>,
    observer: Arc<dyn SearchObserver>,
    page_size: NonZeroU32,
}

impl SearchClient {
    /// Create a client over any transport, with default page size and
    /// tracing observer
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            observer: Arc::new(TracingObserver),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Build an HTTP-backed client from validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let page_size = NonZeroU32::new(config.page_size)
            .ok_or_else(|| Error::invalid_value("page_size", "must be at least 1"))?;
        let http = HttpClient::with_auth(config.http_config(), config.auth_config())?;
        Ok(Self::new(Arc::new(http)).with_page_size(page_size))
    }

    /// Replace the observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Override the assumed upstream page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: NonZeroU32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Page size used for page-count derivation
    pub fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    /// Search for `term`
    ///
    /// With `options` set, exactly that page is returned. Without, every
    /// page is fetched and the items are concatenated in page order.
    pub async fn search(
        &self,
        term: &str,
        options: Option<SearchOptions>,
    ) -> Result<Vec<ResultItem>> {
        self.run_search(term, options, None).await
    }

    /// Like [`search`](Self::search), checking `cancel` before every request
    ///
    /// A request already in flight is never interrupted.
    pub async fn search_with_cancel(
        &self,
        term: &str,
        options: Option<SearchOptions>,
        cancel: &CancellationToken,
    ) -> Result<Vec<ResultItem>> {
        self.run_search(term, options, Some(cancel)).await
    }

    /// Look up a single title by IMDb identifier
    pub async fn get_by_id(&self, id: &str) -> Result<ResultItem> {
        if id.trim().is_empty() {
            return Err(Error::invalid_query("id must not be empty"));
        }
        self.send(&id_request(id), None).await
    }

    /// Look up a single title by exact name
    ///
    /// The server picks the match; no disambiguation happens here.
    pub async fn get_by_title(&self, title: &str) -> Result<ResultItem> {
        if title.trim().is_empty() {
            return Err(Error::invalid_query("title must not be empty"));
        }
        self.send(&title_request(title), None).await
    }

    async fn run_search(
        &self,
        term: &str,
        options: Option<SearchOptions>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<ResultItem>> {
        let query = SearchQuery::new(term, options)?;

        let first = self
            .fetch_page(&query, query.explicit_page().map(u64::from), cancel)
            .await?;
        let total_results = parse_count(&first)?;
        let mut items = first.items;

        if !query.is_full_aggregation() {
            self.observer.on_event(&SearchEvent::AggregationComplete {
                items: items.len(),
                total_results,
                pages_fetched: 1,
                full_aggregation: false,
                count_matches: true,
            });
            return Ok(items);
        }

        let mut state =
            PaginationState::from_first_page(total_results, self.page_size, items.len());
        self.observer.on_event(&SearchEvent::PageCountComputed {
            total_results,
            total_pages: state.total_pages,
        });

        for page in state.pages_remaining() {
            let next = self.fetch_page(&query, Some(page), cancel).await?;
            debug!(page, items = next.items.len(), "page fetched");
            state.record_page(page, next.items.len());
            items.extend(next.items);
        }

        self.observer.on_event(&SearchEvent::AggregationComplete {
            items: items.len(),
            total_results,
            pages_fetched: state.pages_fetched(),
            full_aggregation: true,
            count_matches: state.is_consistent(),
        });
        Ok(items)
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: Option<u64>,
        cancel: Option<&CancellationToken>,
    ) -> Result<SearchResponse> {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(Error::Cancelled {
                page: page.unwrap_or(1),
            });
        }
        self.send(&search_request(query.term(), page), page).await
    }

    async fn send<T: DeserializeOwned>(&self, request: &RequestConfig, page: Option<u64>) -> Result<T> {
        self.observer.on_event(&SearchEvent::RequestSent {
            query: request.query_string(),
            page,
        });
        let body = self.transport.fetch(request).await?;
        serde_json::from_value(body).map_err(|e| Error::decode(e.to_string()))
    }
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

/// Parse the first page's count, carrying the server's own error text
fn parse_count(first: &SearchResponse) -> Result<u64> {
    parse_total_results(&first.total_results).map_err(|err| match (err, &first.error) {
        (Error::CountParse { value, message }, Some(upstream)) => {
            Error::count_parse(value, format!("{message} (server: {upstream})"))
        }
        (err, _) => err,
    })
}
