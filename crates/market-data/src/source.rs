//! Catalog sources and the remote-then-static fallback.

use std::fmt;

use async_trait::async_trait;
use market_catalog::Categories;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::FetchError;

/// Something that can produce the session catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Load the full catalog.
    async fn load(&self) -> Result<Categories, FetchError>;
}

/// Which source served the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    Remote,
    Fallback,
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A loaded catalog and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Categories,
    pub origin: CatalogOrigin,
    /// Why the primary source was not used, if it failed.
    pub primary_error: Option<String>,
}

/// Load from `primary`; if that fails, serve `fallback` instead.
pub struct FallbackCatalog<P, F> {
    primary: P,
    fallback: F,
}

impl<P: CatalogSource, F: CatalogSource> FallbackCatalog<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Load the catalog, reporting which source served it.
    ///
    /// Fails only when the fallback fails too.
    pub async fn load_catalog(&self) -> Result<LoadedCatalog, FetchError> {
        match self.primary.load().await {
            Ok(catalog) => {
                info!(
                    source = self.primary.name(),
                    listings = catalog.product_count(),
                    "catalog loaded"
                );
                Ok(LoadedCatalog {
                    catalog,
                    origin: CatalogOrigin::Remote,
                    primary_error: None,
                })
            }
            Err(e) => {
                warn!(
                    source = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %e,
                    "catalog source unavailable, using fallback"
                );
                let catalog = self.fallback.load().await?;
                Ok(LoadedCatalog {
                    catalog,
                    origin: CatalogOrigin::Fallback,
                    primary_error: Some(e.to_string()),
                })
            }
        }
    }
}

#[async_trait]
impl<P: CatalogSource, F: CatalogSource> CatalogSource for FallbackCatalog<P, F> {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    async fn load(&self) -> Result<Categories, FetchError> {
        self.load_catalog().await.map(|loaded| loaded.catalog)
    }
}
