//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Errors that can occur when creating a [`Price`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be greater than zero (got {0})")]
    NotPositive(Decimal),
}

/// A unit price, always strictly greater than zero.
///
/// Amounts are kept in the currency's standard unit (dollars, not cents).
/// `Display` renders the shortest decimal form, so `999.99` stays `999.99`,
/// `10.50` becomes `10.5` and `10.00` becomes `10`.
///
/// ```
/// use order_desk_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(1050, 2)).unwrap();
/// assert_eq!(price.to_string(), "10.5");
/// assert!(Price::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if `amount <= 0`.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive(amount));
        }
        Ok(Self(amount))
    }

    /// The amount as a decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}
