//! Pagination module
//!
//! Page-count derivation and per-run pagination state.
//!
//! # Overview
//!
//! The search endpoint never reports its page size, so the size is a
//! configured constant (`DEFAULT_PAGE_SIZE`, observed to be 10). The total
//! number of pages is derived from the first page's `totalResults`.

mod types;

pub use types::{parse_total_results, total_pages, PaginationState, DEFAULT_PAGE_SIZE};

#[cfg(test)]
mod tests;
