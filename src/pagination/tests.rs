//! Tests for pagination module

use super::*;
use crate::error::Error;
use std::num::NonZeroU32;
use test_case::test_case;

fn size(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

// ============================================================================
// Page Count Tests
// ============================================================================

#[test_case(0, 0 ; "no results")]
#[test_case(1, 1 ; "single item")]
#[test_case(9, 1 ; "short first page")]
#[test_case(10, 1 ; "exactly one page")]
#[test_case(11, 2 ; "one item spills over")]
#[test_case(95, 10 ; "partial last page")]
#[test_case(100, 10 ; "exact multiple")]
#[test_case(101, 11 ; "one past exact multiple")]
fn test_total_pages_default_size(total: u64, expected: u64) {
    assert_eq!(total_pages(total, DEFAULT_PAGE_SIZE), expected);
}

#[test]
fn test_total_pages_custom_size() {
    assert_eq!(total_pages(95, size(20)), 5);
    assert_eq!(total_pages(100, size(20)), 5);
    assert_eq!(total_pages(7, size(1)), 7);
}

#[test]
fn test_default_page_size() {
    assert_eq!(DEFAULT_PAGE_SIZE.get(), 10);
    assert_eq!(total_pages(u64::MAX, size(1)), u64::MAX);
}

// ============================================================================
// Count Parsing Tests
// ============================================================================

#[test]
fn test_parse_total_results() {
    assert_eq!(parse_total_results("0").unwrap(), 0);
    assert_eq!(parse_total_results("412").unwrap(), 412);
}

#[test_case("" ; "empty")]
#[test_case("N/A" ; "placeholder")]
#[test_case("-5" ; "negative")]
#[test_case(" 12" ; "padded")]
#[test_case("1.5" ; "fractional")]
fn test_parse_total_results_rejects(raw: &str) {
    let err = parse_total_results(raw).unwrap_err();
    match err {
        Error::CountParse { value, .. } => assert_eq!(value, raw),
        other => panic!("Expected CountParse, got {other:?}"),
    }
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_from_first_page() {
    let state = PaginationState::from_first_page(95, DEFAULT_PAGE_SIZE, 10);
    assert_eq!(state.page, 1);
    assert_eq!(state.total_pages, 10);
    assert_eq!(state.total_fetched, 10);
    assert_eq!(state.pages_remaining().collect::<Vec<_>>(), (2..=10u64).collect::<Vec<_>>());
}

#[test]
fn test_pagination_state_nothing_remaining() {
    let state = PaginationState::from_first_page(0, DEFAULT_PAGE_SIZE, 0);
    assert_eq!(state.pages_remaining().count(), 0);
    assert!(state.is_consistent());

    let state = PaginationState::from_first_page(7, DEFAULT_PAGE_SIZE, 7);
    assert_eq!(state.pages_remaining().count(), 0);
}

#[test]
fn test_pagination_state_record_page() {
    let mut state = PaginationState::from_first_page(25, DEFAULT_PAGE_SIZE, 10);
    state.record_page(2, 10);
    state.record_page(3, 5);

    assert_eq!(state.pages_fetched(), 3);
    assert_eq!(state.total_fetched, 25);
    assert!(state.is_consistent());
}

#[test]
fn test_pagination_state_short_page_is_inconsistent() {
    let mut state = PaginationState::from_first_page(25, DEFAULT_PAGE_SIZE, 10);
    state.record_page(2, 10);
    state.record_page(3, 3);

    assert!(!state.is_consistent());
}
