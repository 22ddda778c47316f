//! Capabilities an order collaborator can expose.
//!
//! An [`Order`](crate::Order) never names `Customer` or `Product`. It asks
//! each collaborator, through [`Collaborator`], for the operations it needs
//! and fails construction if one is missing. Any type can stand in for a
//! customer or product by implementing the relevant traits, which is how the
//! tests substitute counting doubles.
//!
//! ```
//! use order_desk_core::{Collaborator, CustomerInfo, Order, Product, ValidationError};
//! use rust_decimal::Decimal;
//!
//! struct Walkin;
//!
//! impl CustomerInfo for Walkin {
//!     fn customer_info(&self) -> String {
//!         "Walk-in customer".to_owned()
//!     }
//! }
//!
//! impl Collaborator for Walkin {
//!     fn as_customer_info(&self) -> Option<&dyn CustomerInfo> {
//!         Some(self)
//!     }
//! }
//!
//! let product = Product::new("P7", "Pen", Decimal::ONE)?;
//! let order = Order::new("O7", &Walkin, &product, 3)?;
//! assert_eq!(order.customer_summary(), "Walk-in customer");
//!
//! // A collaborator without product capabilities is rejected.
//! let err = Order::new("O8", &Walkin, &Walkin, 1).unwrap_err();
//! assert_eq!(err, ValidationError::ProductLacksInfo);
//! # Ok::<(), ValidationError>(())
//! ```

use rust_decimal::Decimal;

/// Produces the customer line of an order summary.
pub trait CustomerInfo {
    /// Human-readable description of the customer.
    fn customer_info(&self) -> String;
}

/// Produces the product line of an order summary.
pub trait ProductInfo {
    /// Human-readable description of the product.
    fn product_info(&self) -> String;
}

/// Exposes a numeric unit price.
pub trait Priced {
    /// Price of a single unit.
    fn price(&self) -> Decimal;
}

/// Capability discovery for values passed into an order.
///
/// Every method defaults to `None`; implementors opt in to the roles they
/// can play.
pub trait Collaborator {
    /// This value's customer-info capability, if any.
    fn as_customer_info(&self) -> Option<&dyn CustomerInfo> {
        None
    }

    /// This value's product-info capability, if any.
    fn as_product_info(&self) -> Option<&dyn ProductInfo> {
        None
    }

    /// This value's price, if it has one.
    fn as_priced(&self) -> Option<&dyn Priced> {
        None
    }
}
