//! Order Desk Core - Customer, product and order domain types.
//!
//! This crate provides the validated entities used by every Order Desk
//! component:
//! - `cli` - Command-line tool that summarizes JSON order documents
//! - `integration-tests` - Behavioral tests against the public API
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no persistence,
//! no networking. Entities validate on construction and are immutable
//! afterwards, so an `Order` can borrow the same `Customer` and `Product`
//! as any number of other orders.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, prices and quantities
//! - [`capability`] - Traits an order collaborator must expose
//! - [`customer`], [`product`], [`order`] - The entities
//! - [`draft`] - Deserializable, unvalidated forms of the entities
//! - [`error`] - The validation error taxonomy
//!
//! # Example
//!
//! ```
//! use order_desk_core::{Customer, Order, Product};
//! use rust_decimal::Decimal;
//!
//! let customer = Customer::new("123", "John Doe", "john@example.com")?;
//! let product = Product::new("P101", "Laptop", Decimal::new(99999, 2))?;
//! let order = Order::new("O1001", &customer, &product, 2)?;
//!
//! assert_eq!(
//!     order.generate_order_summary(),
//!     "Order O1001: Customer 123: John Doe <john@example.com> purchased \
//!      2 x Product P101: Laptop ($999.99). Total: $1999.98"
//! );
//! # Ok::<(), order_desk_core::ValidationError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod capability;
pub mod customer;
pub mod draft;
pub mod error;
pub mod order;
pub mod product;
pub mod types;

pub use capability::{Collaborator, CustomerInfo, Priced, ProductInfo};
pub use customer::Customer;
pub use draft::{CustomerDraft, OrderDocument, OrderDraft, ProductDraft};
pub use error::{ValidationError, ValidationErrorKind};
pub use order::{Order, OrderBuilder};
pub use product::Product;
pub use types::*;
