//! Catalog fetch error types.

use thiserror::Error;

/// Errors that can occur while loading the catalog from the listing API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-success HTTP status.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Request exceeded its deadline.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Could not reach the server.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Body did not match the listing schema.
    #[error("Failed to parse response: {0}")]
    Deserialization(String),

    /// Client could not be built or request could not be formed.
    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// Status code for HTTP errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::Deserialization(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Http {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}
