//! Integration tests for Order Desk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-desk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_summary` - End-to-end summaries built from real entities and JSON drafts
//! - `collaborators` - Orders built from test doubles, including call counting
//! - `validation` - Error messages, kinds and check ordering
//!
//! This library holds the shared fixtures and collaborator doubles.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::Cell;

use order_desk_core::{Collaborator, Customer, CustomerInfo, Priced, Product, ProductInfo};
use rust_decimal::Decimal;

/// Expected summary for [`john_doe`] buying two [`laptop`]s as order `O1001`.
pub const JOHN_DOE_LAPTOP_SUMMARY: &str = "Order O1001: Customer 123: John Doe <john@example.com> \
     purchased 2 x Product P101: Laptop ($999.99). Total: $1999.98";

/// Customer `123`, John Doe.
///
/// # Panics
///
/// Never; the fixture values are valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn john_doe() -> Customer {
    Customer::new("123", "John Doe", "john@example.com").unwrap()
}

/// Product `P101`, a laptop at 999.99.
///
/// # Panics
///
/// Never; the fixture values are valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn laptop() -> Product {
    Product::new("P101", "Laptop", Decimal::new(99999, 2)).unwrap()
}

/// JSON order document equivalent to [`JOHN_DOE_LAPTOP_SUMMARY`].
#[must_use]
pub fn order_document_json() -> serde_json::Value {
    serde_json::json!({
        "orderId": "O1001",
        "customer": {
            "customerId": "123",
            "name": "John Doe",
            "email": "john@example.com"
        },
        "product": {
            "productId": "P101",
            "name": "Laptop",
            "price": 999.99
        },
        "quantity": 2
    })
}

/// Customer double returning a canned info string and counting calls.
#[derive(Debug)]
pub struct MockCustomer {
    info: String,
    calls: Cell<usize>,
}

impl MockCustomer {
    #[must_use]
    pub fn new(info: impl Into<String>) -> Self {
        Self {
            info: info.into(),
            calls: Cell::new(0),
        }
    }

    /// Number of `customer_info` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CustomerInfo for MockCustomer {
    fn customer_info(&self) -> String {
        self.calls.set(self.calls.get() + 1);
        self.info.clone()
    }
}

impl Collaborator for MockCustomer {
    fn as_customer_info(&self) -> Option<&dyn CustomerInfo> {
        Some(self)
    }
}

/// Product double with a canned info string and price, counting calls.
#[derive(Debug)]
pub struct MockProduct {
    info: String,
    price: Decimal,
    info_calls: Cell<usize>,
    price_calls: Cell<usize>,
}

impl MockProduct {
    #[must_use]
    pub fn new(info: impl Into<String>, price: Decimal) -> Self {
        Self {
            info: info.into(),
            price,
            info_calls: Cell::new(0),
            price_calls: Cell::new(0),
        }
    }

    /// Number of `product_info` calls so far.
    #[must_use]
    pub fn info_calls(&self) -> usize {
        self.info_calls.get()
    }

    /// Number of `price` calls so far.
    #[must_use]
    pub fn price_calls(&self) -> usize {
        self.price_calls.get()
    }
}

impl ProductInfo for MockProduct {
    fn product_info(&self) -> String {
        self.info_calls.set(self.info_calls.get() + 1);
        self.info.clone()
    }
}

impl Priced for MockProduct {
    fn price(&self) -> Decimal {
        self.price_calls.set(self.price_calls.get() + 1);
        self.price
    }
}

impl Collaborator for MockProduct {
    fn as_product_info(&self) -> Option<&dyn ProductInfo> {
        Some(self)
    }

    fn as_priced(&self) -> Option<&dyn Priced> {
        Some(self)
    }
}

/// The standard mock pair matching [`john_doe`] and [`laptop`].
#[must_use]
pub fn mocks() -> (MockCustomer, MockProduct) {
    (
        MockCustomer::new("Customer 123: John Doe <john@example.com>"),
        MockProduct::new("Product P101: Laptop ($999.99)", Decimal::new(99999, 2)),
    )
}

/// A collaborator that exposes no capabilities.
#[derive(Debug, Clone, Copy)]
pub struct Opaque;

impl Collaborator for Opaque {}
