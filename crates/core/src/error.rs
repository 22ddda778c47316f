//! Validation errors raised while constructing entities.
//!
//! Every variant renders a fixed, human-readable message. Callers that need
//! to branch on the failure category use [`ValidationError::kind`].

use serde::Serialize;
use thiserror::Error;

use crate::types::{EmailError, PriceError, QuantityError};

/// Broad category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required field was empty or absent.
    MissingRequiredField,
    /// A field was present but badly shaped (email).
    InvalidFormat,
    /// A collaborator does not expose a required operation.
    MissingCapability,
    /// A field had the wrong type (price not numeric, quantity not integer).
    InvalidType,
    /// A numeric field was out of range (price or quantity `<= 0`).
    OutOfRange,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField => write!(f, "missing_required_field"),
            Self::InvalidFormat => write!(f, "invalid_format"),
            Self::MissingCapability => write!(f, "missing_capability"),
            Self::InvalidType => write!(f, "invalid_type"),
            Self::OutOfRange => write!(f, "out_of_range"),
        }
    }
}

/// Errors that can occur when constructing a customer, product or order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // =========================================================================
    // Customer
    // =========================================================================
    #[error("Customer ID is required")]
    MissingCustomerId,

    #[error("Customer name is required")]
    MissingCustomerName,

    /// The email was empty or failed the shape check.
    #[error("Valid email is required")]
    InvalidEmail(#[source] EmailError),

    // =========================================================================
    // Product
    // =========================================================================
    #[error("Product ID is required")]
    MissingProductId,

    #[error("Product name is required")]
    MissingProductName,

    #[error("Valid price is required")]
    MissingPrice,

    #[error("Price must be greater than zero")]
    NonPositivePrice(#[source] PriceError),

    // =========================================================================
    // Order
    // =========================================================================
    #[error("Order ID is required")]
    MissingOrderId,

    #[error("Customer is required")]
    MissingCustomer,

    /// The customer collaborator has no customer-info operation.
    #[error("Customer must implement getCustomerInfo method")]
    CustomerLacksInfo,

    #[error("Product is required")]
    MissingProduct,

    /// The product collaborator has no product-info operation.
    #[error("Product must implement getProductInfo method")]
    ProductLacksInfo,

    /// The product collaborator has no numeric price.
    #[error("Product must have a valid price")]
    ProductLacksPrice,

    #[error("Valid quantity is required")]
    MissingQuantity,

    #[error("Quantity must be an integer")]
    FractionalQuantity(#[source] QuantityError),

    #[error("Quantity must be greater than zero")]
    NonPositiveQuantity(#[source] QuantityError),
}

impl ValidationError {
    /// The category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingCustomerId
            | Self::MissingCustomerName
            | Self::InvalidEmail(EmailError::Empty)
            | Self::MissingProductId
            | Self::MissingProductName
            | Self::MissingPrice
            | Self::MissingOrderId
            | Self::MissingCustomer
            | Self::MissingProduct
            | Self::MissingQuantity => ValidationErrorKind::MissingRequiredField,
            Self::InvalidEmail(_) => ValidationErrorKind::InvalidFormat,
            Self::CustomerLacksInfo | Self::ProductLacksInfo => {
                ValidationErrorKind::MissingCapability
            }
            Self::ProductLacksPrice | Self::FractionalQuantity(_) => {
                ValidationErrorKind::InvalidType
            }
            Self::NonPositivePrice(_) | Self::NonPositiveQuantity(_) => {
                ValidationErrorKind::OutOfRange
            }
        }
    }
}

impl From<EmailError> for ValidationError {
    fn from(err: EmailError) -> Self {
        Self::InvalidEmail(err)
    }
}

impl From<PriceError> for ValidationError {
    fn from(err: PriceError) -> Self {
        Self::NonPositivePrice(err)
    }
}

impl From<QuantityError> for ValidationError {
    fn from(err: QuantityError) -> Self {
        match err {
            QuantityError::NotInteger(_) => Self::FractionalQuantity(err),
            QuantityError::NotPositive(_) => Self::NonPositiveQuantity(err),
        }
    }
}
