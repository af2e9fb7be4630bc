//! Marketplace catalog types and the category filter engine.
//!
//! This crate provides the domain model of the storefront catalog and the
//! pure functions that search and filter it:
//!
//! - **Catalog**: Products, categories, the three listing sections
//! - **Search**: Filters, the category filter pass, location and price facets
//! - **Listing**: Remote listing query parameters and pagination
//! - **Favorites**: The set of favorited product ids
//!
//! # Example
//!
//! ```rust
//! use market_catalog::prelude::*;
//!
//! let mut catalog = Categories::new();
//! catalog.insert(
//!     Section::Free,
//!     "home",
//!     Category::new("🏠", "Hogar").with_items(vec![Product::new(
//!         "5",
//!         "Lámpara de Mesa",
//!         "https://images.example.com/lamp.jpg",
//!         Location::Madrid,
//!     )]),
//! );
//!
//! let filtered = filter_all_categories(&catalog, "lámpara", None);
//! assert_eq!(filtered.product_count(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod catalog;
pub mod favorites;
pub mod search;

pub use catalog::{Categories, Category, CategorySection, Location, Product, Section};
pub use error::CatalogError;
pub use favorites::Favorites;
pub use ids::ProductId;
pub use price::Price;
pub use search::{ListingQuery, PriceBounds, SearchFilters};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{Categories, Category, CategorySection, Location, Product, Section};

    // Favorites
    pub use crate::favorites::Favorites;

    // Search
    pub use crate::search::{
        available_locations, collect_all_products, filter_all_categories, filter_products,
        find_product, price_range, product_by_id, products_in_section, ListingQuery, Pagination,
        PriceBounds, PriceSpan, ProductMatch, SearchFilters,
    };
}
