//! Pagination types and arithmetic

use crate::error::{Error, Result};
use std::num::NonZeroU32;

/// Items per page served by the search endpoint
///
/// Undocumented upstream; override through `ClientConfig::page_size` if the
/// server changes it.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

/// Number of pages needed to hold `total_results` items
///
/// Integer ceiling division.
pub fn total_pages(total_results: u64, page_size: NonZeroU32) -> u64 {
    let page_size = u64::from(page_size.get());
    let mut pages = total_results / page_size;
    if total_results % page_size != 0 {
        pages += 1;
    }
    pages
}

/// Parse the `totalResults` field of a search response
///
/// Only plain non-negative decimal integers are accepted. An empty or
/// missing field is an error, never zero.
pub fn parse_total_results(raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|e| Error::count_parse(raw, e.to_string()))
}

/// Tracks one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Last page fetched (1-based, 0 before the first fetch)
    pub page: u64,
    /// Pages the result set spans
    pub total_pages: u64,
    /// Count reported by the first page
    pub total_results: u64,
    /// Items accumulated so far
    pub total_fetched: u64,
}

impl PaginationState {
    /// Start a run from the first page's reported count
    pub fn from_first_page(
        total_results: u64,
        page_size: NonZeroU32,
        first_page_items: usize,
    ) -> Self {
        Self {
            page: 1,
            total_pages: total_pages(total_results, page_size),
            total_results,
            total_fetched: first_page_items as u64,
        }
    }

    /// Page numbers still to fetch, in order
    pub fn pages_remaining(&self) -> std::ops::RangeInclusive<u64> {
        (self.page + 1)..=self.total_pages
    }

    /// Record a fetched page
    pub fn record_page(&mut self, page: u64, items: usize) {
        self.page = page;
        self.total_fetched += items as u64;
    }

    /// Whether the accumulated count matches the reported total
    pub fn is_consistent(&self) -> bool {
        self.total_fetched == self.total_results
    }

    /// Requests issued so far, counting the first page
    pub fn pages_fetched(&self) -> u64 {
        self.page
    }
}
