//! Catalog provider for the marketplace storefront.
//!
//! This crate provides:
//! - `CatalogSource` - Anything that can produce a `Categories` value
//! - `RemoteCatalog` - Pages through the REST listing endpoint
//! - `StaticCatalog` - The built-in catalog served when the API is down
//! - `FallbackCatalog` - Remote first, static on failure
//! - `RetryPolicy` / `TimeoutConfig` - Outbound request policy
//!
//! # Example
//!
//! ```rust,ignore
//! use market_data::{FallbackCatalog, RemoteCatalog, RemoteConfig, StaticCatalog};
//!
//! let remote = RemoteCatalog::new(RemoteConfig::new("http://localhost:8000/api/v1"))?;
//! let provider = FallbackCatalog::new(remote, StaticCatalog);
//! let loaded = provider.load_catalog().await;
//! println!("{} listings from {}", loaded.catalog.product_count(), loaded.origin);
//! ```

mod api;
mod error;
mod fallback;
mod remote;
mod retry;
mod source;
mod timeout;

pub use api::{group_into_categories, ApiProduct, HealthStatus, PaginatedResponse};
pub use error::FetchError;
pub use fallback::{static_catalog, StaticCatalog};
pub use remote::{RemoteCatalog, RemoteConfig, DEFAULT_API_URL};
pub use retry::{BackoffStrategy, RetryPolicy};
pub use source::{CatalogOrigin, CatalogSource, FallbackCatalog, LoadedCatalog};
pub use timeout::TimeoutConfig;
