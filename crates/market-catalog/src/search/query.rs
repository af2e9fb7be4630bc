//! Remote listing query parameters.

use crate::catalog::{Location, Section};
use crate::price::Price;
use crate::search::SearchFilters;
use serde::{Deserialize, Serialize};

/// Default listing page size.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size the listing endpoint serves.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Query for the paginated product listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingQuery {
    /// Free text matched against title, description and tags server-side.
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<Location>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    /// Sent as `product_type`.
    pub condition: Option<Section>,
    /// Listing status; the backend defaults to `active`.
    pub status: Option<String>,
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub size: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingQuery {
    pub fn new() -> Self {
        Self {
            search: None,
            category: None,
            location: None,
            min_price: None,
            max_price: None,
            condition: None,
            status: Some("active".to_string()),
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Translate storefront filters into listing parameters.
    pub fn from_filters(filters: &SearchFilters) -> Self {
        let mut query = Self::new().with_search(filters.query.clone());
        query.location = filters.location;
        query.condition = filters.condition;
        if let Some(bounds) = filters.price_range {
            query.min_price = bounds.min;
            query.max_price = bounds.max;
        }
        query
    }

    /// Set the text query. Blank text clears it.
    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        let q = q.trim();
        self.search = (!q.is_empty()).then(|| q.to_string());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_condition(mut self, condition: Section) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Set pagination. Page 0 becomes 1; size 0 falls back to the default
    /// and anything above the maximum is capped.
    pub fn with_pagination(mut self, page: u32, size: u32) -> Self {
        self.page = page.max(1);
        self.size = match size {
            0 => DEFAULT_PAGE_SIZE,
            s => s.min(MAX_PAGE_SIZE),
        };
        self
    }

    /// Same query, another page.
    pub fn page(&self, page: u32) -> Self {
        let size = self.size;
        self.clone().with_pagination(page, size)
    }

    /// Query-string pairs in a stable order, skipping unset fields.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];

        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(location) = self.location {
            pairs.push(("location", location.as_str().to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", min.to_decimal().to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", max.to_decimal().to_string()));
        }
        if let Some(condition) = self.condition {
            pairs.push(("product_type", condition.api_name().to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::PriceBounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_pairs() {
        let pairs = ListingQuery::new().to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("size", "20".to_string()),
                ("status", "active".to_string()),
            ]
        );
    }

    #[test]
    fn test_pagination_clamping() {
        let q = ListingQuery::new().with_pagination(0, 500);
        assert_eq!((q.page, q.size), (1, MAX_PAGE_SIZE));

        let q = ListingQuery::new().with_pagination(3, 0);
        assert_eq!((q.page, q.size), (3, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_from_filters() {
        let filters = SearchFilters::new()
            .with_query("  bici ")
            .with_location(Location::Valencia)
            .with_condition(Section::SecondHand)
            .with_price_range(PriceBounds::new(
                Some(Price::euros(100)),
                Some(Price::from_cents(24950)),
            ));
        let pairs = ListingQuery::from_filters(&filters).page(2).to_query_pairs();

        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("size", "20".to_string()),
                ("search", "bici".to_string()),
                ("location", "Valencia".to_string()),
                ("min_price", "100".to_string()),
                ("max_price", "249.5".to_string()),
                ("product_type", "second_hand".to_string()),
                ("status", "active".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let q = ListingQuery::new().with_search("   ");
        assert_eq!(q.search, None);
    }
}
