//! Catalog error types.

use thiserror::Error;

/// Errors raised while building or parsing catalog values.
///
/// The filter engine itself never fails; these cover the conversions at its
/// edges (parsing user input, decoding remote prices).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Location outside the served city set.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// Section name not one of free, secondHand, new.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Price below zero.
    #[error("Negative price: {0}")]
    NegativePrice(f64),

    /// Price that is NaN or infinite.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Price with a fraction of a cent.
    #[error("Price has more than two decimals: {0}")]
    SubCentPrice(f64),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}
