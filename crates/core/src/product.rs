//! Product entity.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::capability::{Collaborator, Priced, ProductInfo};
use crate::error::ValidationError;
use crate::types::{Price, ProductId};

/// A product with a validated ID, name and positive unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    product_id: ProductId,
    name: String,
    price: Price,
}

impl Product {
    /// Create a new product.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingProductId`] if `product_id` is empty
    /// - [`ValidationError::MissingProductName`] if `name` is empty
    /// - [`ValidationError::NonPositivePrice`] if `price <= 0`
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::from_parts(product_id.into(), name.into(), Some(price))
    }

    /// Shared by [`Product::new`] and [`ProductDraft`](crate::ProductDraft),
    /// where the price may be absent.
    pub(crate) fn from_parts(
        product_id: String,
        name: String,
        price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        Self::validate(product_id, name, price).inspect_err(|e| {
            tracing::debug!(error = %e, kind = %e.kind(), "Rejected product");
        })
    }

    fn validate(
        product_id: String,
        name: String,
        price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let product_id = ProductId::new(product_id).ok_or(ValidationError::MissingProductId)?;
        if name.is_empty() {
            return Err(ValidationError::MissingProductName);
        }
        let price = Price::new(price.ok_or(ValidationError::MissingPrice)?)?;

        Ok(Self {
            product_id,
            name,
            price,
        })
    }

    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}

impl ProductInfo for Product {
    /// `Product {id}: {name} (${price})`
    fn product_info(&self) -> String {
        format!(
            "Product {}: {} (${})",
            self.product_id, self.name, self.price
        )
    }
}

impl Priced for Product {
    fn price(&self) -> Decimal {
        self.price.amount()
    }
}

impl Collaborator for Product {
    fn as_product_info(&self) -> Option<&dyn ProductInfo> {
        Some(self)
    }

    fn as_priced(&self) -> Option<&dyn Priced> {
        Some(self)
    }
}
