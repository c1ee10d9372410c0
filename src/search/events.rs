//! Search observability hook
//!
//! The aggregator reports progress through a `SearchObserver` instead of
//! writing to the console. `TracingObserver` is the default and turns each
//! event into a `tracing` record.

use tracing::{info, warn};

/// Something worth reporting during a search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A request is about to be handed to the transport
    RequestSent {
        /// URL-encoded query string, credentials excluded
        query: String,
        /// Page requested, if the request carries one
        page: Option<u64>,
    },

    /// The first page has been read and the page count derived
    PageCountComputed {
        /// Count reported by the server
        total_results: u64,
        /// Pages spanning that count
        total_pages: u64,
    },

    /// A search call finished successfully
    AggregationComplete {
        /// Items returned to the caller
        items: usize,
        /// Count reported by the server
        total_results: u64,
        /// Requests issued
        pages_fetched: u64,
        /// False in explicit-page mode
        full_aggregation: bool,
        /// Accumulated items equal the reported total; always true in
        /// explicit-page mode, where no total is checked
        count_matches: bool,
    },
}

impl SearchEvent {
    /// Short stable name, handy for filtering
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestSent { .. } => "request_sent",
            Self::PageCountComputed { .. } => "page_count_computed",
            Self::AggregationComplete { .. } => "aggregation_complete",
        }
    }

    /// Full aggregation that ended with a different count than reported
    pub fn is_count_mismatch(&self) -> bool {
        matches!(
            self,
            Self::AggregationComplete {
                count_matches: false,
                ..
            }
        )
    }
}

/// Receives search events
pub trait SearchObserver: Send + Sync {
    /// Called synchronously at each step of a search
    fn on_event(&self, event: &SearchEvent);
}

impl<F> SearchObserver for F
where
    F: Fn(&SearchEvent) + Send + Sync,
{
    fn on_event(&self, event: &SearchEvent) {
        self(event);
    }
}

/// Emits events as structured `tracing` records
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_event(&self, event: &SearchEvent) {
        match event {
            SearchEvent::RequestSent { query, page } => {
                info!(query = %query, page = ?page, "request sent");
            }
            SearchEvent::PageCountComputed {
                total_results,
                total_pages,
            } => {
                info!(total_results, total_pages, "page count computed");
            }
            SearchEvent::AggregationComplete {
                items,
                total_results,
                pages_fetched,
                full_aggregation,
                count_matches,
            } => {
                if !count_matches {
                    warn!(
                        items,
                        total_results,
                        pages_fetched,
                        "aggregated item count differs from reported total"
                    );
                } else {
                    info!(
                        items,
                        total_results, pages_fetched, full_aggregation, "search complete"
                    );
                }
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn on_event(&self, _event: &SearchEvent) {}
}
