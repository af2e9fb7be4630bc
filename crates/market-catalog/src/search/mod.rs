//! Search module.
//!
//! Contains the search filters, the category filter pass, facet helpers,
//! and the remote listing query with pagination.

mod engine;
mod filter;
mod query;
mod results;

pub use engine::{
    available_locations, collect_all_products, filter_all_categories, find_product, price_range,
    product_by_id, products_in_section, ProductMatch,
};
pub use filter::{filter_products, PriceBounds, SearchFilters};
pub use query::{ListingQuery, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use results::{Pagination, PriceSpan};
