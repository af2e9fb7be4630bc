//! Product and location types.

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Cities where listings can be picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Madrid,
    Barcelona,
    Valencia,
    Sevilla,
}

impl Location {
    /// Every served city, in display order.
    pub const ALL: [Location; 4] = [
        Location::Madrid,
        Location::Barcelona,
        Location::Valencia,
        Location::Sevilla,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Madrid => "Madrid",
            Location::Barcelona => "Barcelona",
            Location::Valencia => "Valencia",
            Location::Sevilla => "Sevilla",
        }
    }

    /// Flag shown next to the city name.
    pub fn emoji(&self) -> &'static str {
        "\u{1f1ea}\u{1f1f8}"
    }
}

impl FromStr for Location {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownLocation(s.to_string()))
    }
}

// Locations sort by name so facet lists read alphabetically.
impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Listing title, the only searchable text.
    pub title: String,
    /// Image URI.
    pub image: String,
    /// Pickup city.
    pub location: Location,
    /// Asking price. Absent for free listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl Product {
    /// Create a product without a price.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            location,
            price: None,
        }
    }

    /// Set the asking price.
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }
}
