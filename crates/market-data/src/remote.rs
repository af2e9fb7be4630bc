//! Listing API client.

use async_trait::async_trait;
use market_catalog::{Categories, ListingQuery};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::api::{group_into_categories, ApiProduct, HealthStatus, PaginatedResponse};
use crate::error::FetchError;
use crate::retry::RetryPolicy;
use crate::source::CatalogSource;
use crate::timeout::TimeoutConfig;

/// Listing API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Settings for the listing API client.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// API root, e.g. `http://localhost:8000/api/v1`.
    pub base_url: String,
    pub timeout: TimeoutConfig,
    pub retry: RetryPolicy,
    /// Query used for the first page; later pages reuse it.
    pub query: ListingQuery,
    /// Stop after this many pages even if the server reports more.
    pub max_pages: u32,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: TimeoutConfig::default(),
            retry: RetryPolicy::default(),
            query: ListingQuery::new().with_pagination(1, market_catalog::search::MAX_PAGE_SIZE),
            max_pages: 10,
        }
    }

    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_query(mut self, query: ListingQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Join `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Health endpoint. It is served at the server root, outside the
    /// versioned API prefix.
    pub fn health_url(&self) -> Result<String, FetchError> {
        reqwest::Url::parse(&self.base_url)
            .and_then(|base| base.join("/health"))
            .map(|url| url.to_string())
            .map_err(|e| FetchError::Request(format!("invalid base URL {}: {}", self.base_url, e)))
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Loads the catalog from the paginated `/products` endpoint.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteCatalog {
    pub fn new(config: RemoteConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout.connect)
            .timeout(config.timeout.total)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Fetch a single listing page.
    pub async fn fetch_page(
        &self,
        query: &ListingQuery,
    ) -> Result<PaginatedResponse<ApiProduct>, FetchError> {
        let url = self.config.endpoint("products");
        self.get_json(&url, &query.to_query_pairs()).await
    }

    /// Call the health endpoint.
    pub async fn health_check(&self) -> Result<HealthStatus, FetchError> {
        let url = self.config.health_url()?;
        self.get_json(&url, &[]).await
    }

    /// Fetch every page of the configured query, up to `max_pages`.
    ///
    /// Stops early on an empty page or once the envelope reports no next page.
    pub async fn fetch_all(&self) -> Result<Vec<ApiProduct>, FetchError> {
        let mut products = Vec::new();
        let mut page = self.config.query.page;

        for _ in 0..self.config.max_pages {
            let response = self.fetch_page(&self.config.query.page(page)).await?;
            let pagination = response.pagination();
            debug!(page, pages = pagination.pages, items = response.items.len(), "listing page");

            let last = response.items.is_empty() || !pagination.has_next;
            products.extend(response.items);
            if last {
                break;
            }
            page += 1;
        }

        Ok(products)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let mut attempt = 0;

        loop {
            match self.send(url, query).await {
                Ok(value) => return Ok(value),
                Err(e) if self.config.retry.should_retry(&e, attempt) => {
                    let delay = self.config.retry.backoff.delay_for_attempt(attempt);
                    debug!(
                        url = %url,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn load(&self) -> Result<Categories, FetchError> {
        let products = self.fetch_all().await?;
        info!(
            listings = products.len(),
            base_url = %self.config.base_url,
            "fetched remote listings"
        );
        Ok(group_into_categories(products))
    }
}
