//! Listing price type.
//!
//! Prices are held as integer euro cents so range checks and min/max
//! comparisons stay exact. On the wire (remote API, JSON output) a price is a
//! plain decimal number of euros, matching the backend's float column.

use crate::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const CENT_TOLERANCE: f64 = 1e-6;

/// A non-negative listing price in euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    amount_cents: i64,
}

impl Price {
    /// Create a price from cents. Negative amounts are clamped to zero.
    pub fn from_cents(amount_cents: i64) -> Self {
        Self {
            amount_cents: amount_cents.max(0),
        }
    }

    /// Create a price from whole euros.
    pub fn euros(amount: u32) -> Self {
        Self {
            amount_cents: i64::from(amount) * 100,
        }
    }

    /// Create a price from a decimal euro amount.
    ///
    /// Amounts finer than a cent are rejected rather than rounded, so a
    /// listing at 99.996 can never pass a `min: 100` bound.
    ///
    /// ```
    /// use market_catalog::Price;
    /// let price = Price::from_decimal(49.99).unwrap();
    /// assert_eq!(price.amount_cents(), 4999);
    /// assert!(Price::from_decimal(99.996).is_err());
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, CatalogError> {
        if !amount.is_finite() {
            return Err(CatalogError::InvalidPrice(amount.to_string()));
        }
        if amount < 0.0 {
            return Err(CatalogError::NegativePrice(amount));
        }

        let cents = amount * 100.0;
        let whole_cents = cents.round();
        // Decimal inputs like 49.99 scale to 4998.999...; allow that float noise only.
        if (cents - whole_cents).abs() > CENT_TOLERANCE {
            return Err(CatalogError::SubCentPrice(amount));
        }

        Ok(Self {
            amount_cents: whole_cents as i64,
        })
    }

    /// Amount in cents.
    pub fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    /// Amount as decimal euros.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Format for display, e.g. "399€" or "49.99€".
    pub fn display(&self) -> String {
        if self.amount_cents % 100 == 0 {
            format!("{}€", self.amount_cents / 100)
        } else {
            format!("{:.2}€", self.to_decimal())
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.amount_cents % 100 == 0 {
            serializer.serialize_i64(self.amount_cents / 100)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Price::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_decimal() {
        assert_eq!(Price::from_decimal(49.99).unwrap().amount_cents(), 4999);
        assert_eq!(Price::from_decimal(399.0).unwrap(), Price::euros(399));
    }

    #[test]
    fn test_price_rejects_negative_and_nan() {
        assert_eq!(
            Price::from_decimal(-1.0),
            Err(CatalogError::NegativePrice(-1.0))
        );
        assert!(matches!(
            Price::from_decimal(f64::NAN),
            Err(CatalogError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_price_rejects_sub_cent_amounts() {
        assert_eq!(
            Price::from_decimal(99.996),
            Err(CatalogError::SubCentPrice(99.996))
        );
        assert!(Price::from_decimal(0.001).is_err());
        assert_eq!(Price::from_decimal(0.07).unwrap().amount_cents(), 7);
        assert_eq!(Price::from_decimal(1299.99).unwrap().amount_cents(), 129_999);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::euros(399).display(), "399€");
        assert_eq!(Price::from_cents(4999).display(), "49.99€");
    }

    #[test]
    fn test_price_ordering() {
        assert!(Price::euros(89) < Price::euros(399));
        assert_eq!(Price::from_cents(-5), Price::default());
    }

    #[test]
    fn test_price_json() {
        assert_eq!(serde_json::to_string(&Price::euros(89)).unwrap(), "89");
        assert_eq!(serde_json::to_string(&Price::from_cents(1250)).unwrap(), "12.5");

        let price: Price = serde_json::from_str("129.5").unwrap();
        assert_eq!(price.amount_cents(), 12950);
        assert!(serde_json::from_str::<Price>("-3").is_err());
        assert!(serde_json::from_str::<Price>("99.996").is_err());
    }
}
