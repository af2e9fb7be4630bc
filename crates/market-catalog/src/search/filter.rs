//! Search filters and the per-category product filter.

use crate::catalog::{Location, Product, Section};
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds. An absent bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Price>,
}

impl PriceBounds {
    pub fn new(min: Option<Price>, max: Option<Price>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: Price) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: Price) -> Self {
        Self::new(None, Some(max))
    }

    /// Check a price against both bounds.
    pub fn contains(&self, price: Price) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }

    /// `min > max`: nothing can match.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

/// Filters selected in the storefront.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Free text typed in the search box.
    #[serde(default)]
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceBounds>,
    /// Section the user picked. Not applied by the filter pass; callers
    /// narrow with [`crate::catalog::Categories::narrow_to`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Section>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_price_range(mut self, bounds: PriceBounds) -> Self {
        self.price_range = Some(bounds);
        self
    }

    pub fn with_condition(mut self, condition: Section) -> Self {
        self.condition = Some(condition);
        self
    }

    /// True when no field narrows anything.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.location.is_none()
            && self.price_range.is_none()
            && self.condition.is_none()
    }

    fn matches_location(&self, product: &Product) -> bool {
        self.location.map_or(true, |location| product.location == location)
    }

    fn matches_price(&self, product: &Product) -> bool {
        match (&self.price_range, product.price) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(bounds), Some(price)) => bounds.contains(price),
        }
    }
}

/// Filter one category's listings.
///
/// Stages run in order: title substring match on the trimmed, case-folded
/// query; exact location; price range (unpriced listings never pass a price
/// range). Input order is preserved and the input is left untouched.
pub fn filter_products(
    products: &[Product],
    query: &str,
    filters: Option<&SearchFilters>,
) -> Vec<Product> {
    let needle = query.trim().to_lowercase();

    products
        .iter()
        .filter(|product| needle.is_empty() || product.title.to_lowercase().contains(&needle))
        .filter(|product| filters.map_or(true, |f| f.matches_location(product)))
        .filter(|product| filters.map_or(true, |f| f.matches_price(product)))
        .cloned()
        .collect()
}
