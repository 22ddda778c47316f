//! Unvalidated entity forms, as read from JSON.
//!
//! Every field of a draft is optional so that a missing or `null` value is
//! reported with the same "required" message as an empty one, instead of
//! surfacing as a deserialization error.
//!
//! ```
//! use order_desk_core::OrderDraft;
//!
//! let draft: OrderDraft = serde_json::from_str(r#"{
//!     "orderId": "O1001",
//!     "customer": { "customerId": "123", "name": "John Doe", "email": "john@example.com" },
//!     "product": { "productId": "P101", "name": "Laptop", "price": "999.99" },
//!     "quantity": 2
//! }"#).unwrap();
//!
//! let document = draft.resolve().unwrap();
//! assert_eq!(document.order().format_total_cost(), "1999.98");
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::customer::Customer;
use crate::error::ValidationError;
use crate::order::Order;
use crate::product::Product;
use crate::types::{OrderId, Quantity};

/// A customer whose fields have not been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub customer_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerDraft {
    /// Validate into a [`Customer`]. Absent fields count as empty.
    ///
    /// # Errors
    ///
    /// Same as [`Customer::new`].
    pub fn into_customer(self) -> Result<Customer, ValidationError> {
        Customer::new(
            self.customer_id.unwrap_or_default(),
            self.name.unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
        )
    }
}

/// A product whose fields have not been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

impl ProductDraft {
    /// Validate into a [`Product`].
    ///
    /// # Errors
    ///
    /// Same as [`Product::new`], plus [`ValidationError::MissingPrice`] when
    /// the price is absent.
    pub fn into_product(self) -> Result<Product, ValidationError> {
        Product::from_parts(
            self.product_id.unwrap_or_default(),
            self.name.unwrap_or_default(),
            self.price,
        )
    }
}

/// A complete order document: the order fields plus its customer and
/// product, all unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub order_id: Option<String>,
    pub customer: Option<CustomerDraft>,
    pub product: Option<ProductDraft>,
    pub quantity: Option<Decimal>,
}

impl OrderDraft {
    /// Validate the whole document.
    ///
    /// Checks follow the order construction sequence: order ID, customer
    /// (presence, then its own fields), product (presence, then its own
    /// fields), quantity.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn resolve(self) -> Result<OrderDocument, ValidationError> {
        let order_id = self
            .order_id
            .and_then(OrderId::new)
            .ok_or(ValidationError::MissingOrderId)?;
        let customer = self
            .customer
            .ok_or(ValidationError::MissingCustomer)?
            .into_customer()?;
        let product = self
            .product
            .ok_or(ValidationError::MissingProduct)?
            .into_product()?;
        let quantity = Quantity::new(self.quantity.ok_or(ValidationError::MissingQuantity)?)?;

        tracing::debug!(order_id = %order_id, "Resolved order document");

        Ok(OrderDocument {
            order_id,
            customer,
            product,
            quantity,
        })
    }
}

/// A validated order document that owns its customer and product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDocument {
    order_id: OrderId,
    customer: Customer,
    product: Product,
    quantity: Quantity,
}

impl OrderDocument {
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// An [`Order`] borrowing this document's customer and product.
    #[must_use]
    pub fn order(&self) -> Order<'_> {
        Order::from_validated(
            self.order_id.clone(),
            &self.customer,
            &self.product,
            &self.product,
            self.quantity,
        )
    }
}
