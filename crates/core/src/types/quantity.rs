//! Order line quantity.

use core::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Errors that can occur when creating a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// The value has a fractional part.
    #[error("quantity must be a whole number (got {0})")]
    NotInteger(Decimal),
    /// The value is zero or negative.
    #[error("quantity must be greater than zero (got {0})")]
    NotPositive(Decimal),
}

/// A positive whole number of units.
///
/// Backed by a `Decimal` so that it multiplies with a [`Price`](super::Price)
/// amount without conversion. The integer check runs before the sign check,
/// so `-2.5` reports [`QuantityError::NotInteger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a quantity from any value convertible to `Decimal`.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotInteger`] for fractional values and
    /// [`QuantityError::NotPositive`] for values `<= 0`.
    pub fn new(value: impl Into<Decimal>) -> Result<Self, QuantityError> {
        let value = value.into();
        if !value.fract().is_zero() {
            return Err(QuantityError::NotInteger(value));
        }
        if value <= Decimal::ZERO {
            return Err(QuantityError::NotPositive(value));
        }
        Ok(Self(value.normalize()))
    }

    /// The quantity as a decimal.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
