//! Paging primitives shared by every entity screen.

use serde::{Deserialize, Serialize};

/// Page sizes the grid footer offers.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 15, 20, 50];

/// Page size used before the user has picked one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// A request for one page of an entity listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    /// Builds a request, clamping `page` to at least 1.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_ITEMS_PER_PAGE)
    }
}

/// One page of results plus the pagination metadata the backend reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub per_page: usize,
}

impl<T> PageResult<T> {
    /// Maps the items while keeping the pagination metadata intact.
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            current_page: self.current_page,
            per_page: self.per_page,
        }
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Windowed page-number strip for the grid footer; `None` marks an ellipsis.
#[derive(Debug, Clone, Serialize)]
pub struct PagerStrip {
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl PagerStrip {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            pages,
            page: current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_clamps_zero_page() {
        let req = PageRequest::new(0, 15);
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 15);
    }

    #[test]
    fn empty_listing_yields_no_pager_entries() {
        let strip = PagerStrip::new(1, 0);
        assert!(strip.pages.is_empty());
    }

    #[test]
    fn short_listing_has_no_ellipsis() {
        let strip = PagerStrip::new(1, 3);
        assert_eq!(strip.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn long_listing_elides_middle_pages() {
        let strip = PagerStrip::new(10, 30);
        assert!(strip.pages.contains(&None));
        assert!(strip.pages.contains(&Some(10)));
        assert_eq!(strip.pages.first(), Some(&Some(1)));
        assert_eq!(strip.pages.last(), Some(&Some(30)));
    }

    #[test]
    fn map_items_keeps_metadata() {
        let page = PageResult {
            items: vec![1, 2, 3],
            total_items: 25,
            total_pages: 3,
            current_page: 1,
            per_page: 10,
        };
        let mapped = page.map_items(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.total_items, 25);
        assert_eq!(mapped.total_pages, 3);
    }
}
