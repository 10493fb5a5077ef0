//! Pagination arithmetic for the data table.
//!
//! The engine derives display numbers and resolves navigation requests
//! to page numbers; it never changes the page itself. The caller owns
//! the state and re-renders with data for the requested page.

use crate::types::PaginationState;
use serde::{Deserialize, Serialize};

/// A footer navigation action
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PageRequest {
    First,
    Previous,
    Next,
    Last,
}

/// Derived display numbers for the pagination footer
///
/// start_item/end_item are 1-based positions for "Showing X to Y of Z";
/// both are 0 for an empty table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageSummary {
    pub total_pages: usize,
    pub start_item: usize,
    pub end_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationState {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self { page, page_size, total }
    }

    /// Page size with the caller's value passed through untouched
    ///
    /// No page recomputation happens here; callers that want to jump
    /// back to page 1 on a size change do so themselves.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Derived numbers for the current state
    ///
    /// Out-of-range inputs clamp rather than fail: page_size is treated
    /// as at least 1 and page is pulled into the valid range before the
    /// arithmetic.
    pub fn summary(&self) -> PageSummary {
        let page_size = self.page_size.max(1);
        let total_pages = self.total.div_ceil(page_size);

        if self.total == 0 {
            return PageSummary {
                total_pages: 0,
                start_item: 0,
                end_item: 0,
                has_previous: false,
                has_next: false,
            };
        }

        let page = self.page.clamp(1, total_pages);
        PageSummary {
            total_pages,
            start_item: (page - 1) * page_size + 1,
            end_item: (page * page_size).min(self.total),
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }

    /// Page number a navigation request resolves to
    ///
    /// None when the request is disabled at the current position
    /// (first/previous on page 1, next/last on the final page).
    pub fn resolve(&self, request: PageRequest) -> Option<usize> {
        let summary = self.summary();
        if summary.total_pages == 0 {
            return None;
        }

        let page = self.page.clamp(1, summary.total_pages);
        match request {
            PageRequest::First if page > 1 => Some(1),
            PageRequest::Previous if page > 1 => Some(page - 1),
            PageRequest::Next if page < summary.total_pages => Some(page + 1),
            PageRequest::Last if page < summary.total_pages => Some(summary.total_pages),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_numbers() {
        let state = PaginationState::new(1, 10, 50);
        let summary = state.summary();

        assert_eq!(summary.total_pages, 5);
        assert_eq!(summary.start_item, 1);
        assert_eq!(summary.end_item, 10);
        assert!(!summary.has_previous);
        assert!(summary.has_next);
    }

    #[test]
    fn test_last_page_numbers() {
        let state = PaginationState::new(5, 10, 50);
        let summary = state.summary();

        assert_eq!(summary.start_item, 41);
        assert_eq!(summary.end_item, 50);
        assert!(!summary.has_next);
    }

    #[test]
    fn test_short_last_page() {
        let state = PaginationState::new(3, 20, 45);
        let summary = state.summary();

        assert_eq!(summary.total_pages, 3);
        assert_eq!(summary.start_item, 41);
        assert_eq!(summary.end_item, 45);
    }

    #[test]
    fn test_navigation_resolution() {
        let state = PaginationState::new(3, 10, 50);

        assert_eq!(state.resolve(PageRequest::First), Some(1));
        assert_eq!(state.resolve(PageRequest::Previous), Some(2));
        assert_eq!(state.resolve(PageRequest::Next), Some(4));
        assert_eq!(state.resolve(PageRequest::Last), Some(5));
    }

    #[test]
    fn test_navigation_disabled_at_edges() {
        let first = PaginationState::new(1, 10, 50);
        assert_eq!(first.resolve(PageRequest::First), None);
        assert_eq!(first.resolve(PageRequest::Previous), None);
        assert_eq!(first.resolve(PageRequest::Next), Some(2));

        let last = PaginationState::new(5, 10, 50);
        assert_eq!(last.resolve(PageRequest::Next), None);
        assert_eq!(last.resolve(PageRequest::Last), None);
        assert_eq!(last.resolve(PageRequest::Previous), Some(4));
    }

    #[test]
    fn test_empty_table() {
        let state = PaginationState::new(1, 10, 0);
        let summary = state.summary();

        assert_eq!(summary.total_pages, 0);
        assert_eq!(summary.start_item, 0);
        assert_eq!(summary.end_item, 0);
        assert!(!summary.has_previous);
        assert!(!summary.has_next);
        assert_eq!(state.resolve(PageRequest::Next), None);
        assert_eq!(state.resolve(PageRequest::First), None);
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        // Page far past the end reads as the last page
        let past = PaginationState::new(99, 10, 50);
        let summary = past.summary();
        assert_eq!(summary.start_item, 41);
        assert_eq!(summary.end_item, 50);
        assert_eq!(past.resolve(PageRequest::Previous), Some(4));

        // Page 0 reads as page 1
        let zero = PaginationState::new(0, 10, 50);
        assert_eq!(zero.summary().start_item, 1);
        assert_eq!(zero.resolve(PageRequest::Previous), None);

        // Zero page size treated as 1
        let tiny = PaginationState::new(1, 0, 3);
        assert_eq!(tiny.summary().total_pages, 3);
    }

    #[test]
    fn test_page_size_change_keeps_page() {
        let state = PaginationState::new(3, 10, 50).with_page_size(25);
        assert_eq!(state.page, 3);
        assert_eq!(state.page_size, 25);
        // Derived numbers clamp the now out-of-range page
        assert_eq!(state.summary().total_pages, 2);
        assert_eq!(state.summary().start_item, 26);
    }
}
