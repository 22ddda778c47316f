//! Core value types for Order Desk.
//!
//! This module provides type-safe wrappers for the validated fields of the
//! domain entities.

pub mod email;
pub mod id;
pub mod price;
pub mod quantity;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, PriceError};
pub use quantity::{Quantity, QuantityError};
