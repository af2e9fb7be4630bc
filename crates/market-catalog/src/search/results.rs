//! Listing pagination and price facet.

use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Pagination state of a remote listing page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub size: u32,
    /// Total number of matching listings.
    pub total: u64,
    /// Total number of pages.
    pub pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Build pagination from the listing envelope. `pages` is one when there
    /// are no results so a page 1 always exists.
    pub fn new(page: u32, size: u32, total: u64) -> Self {
        let page = page.max(1);
        let size = size.max(1);
        let pages = if total == 0 {
            1
        } else {
            total.div_ceil(u64::from(size)) as u32
        };

        Self {
            page,
            size,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }

    /// Offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, super::DEFAULT_PAGE_SIZE, 0)
    }
}

/// Observed price span of a set of listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceSpan {
    pub min: Price,
    pub max: Price,
}

impl PriceSpan {
    pub fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(!p.has_next);
        assert!(p.is_last());
    }

    #[test]
    fn test_pagination_empty_listing() {
        let p = Pagination::new(1, 20, 0);
        assert_eq!(p.pages, 1);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(Pagination::default(), p);
    }

    #[test]
    fn test_pagination_clamps_zero_page() {
        let p = Pagination::new(0, 0, 3);
        assert_eq!(p.page, 1);
        assert_eq!(p.size, 1);
        assert_eq!(p.pages, 3);
    }
}
