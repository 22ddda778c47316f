//! Customer entity.

use serde::Serialize;

use crate::capability::{Collaborator, CustomerInfo};
use crate::error::ValidationError;
use crate::types::{CustomerId, Email};

/// A customer with a validated ID, name and email address.
///
/// There are no setters; a constructed `Customer` stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    customer_id: CustomerId,
    name: String,
    email: Email,
}

impl Customer {
    /// Create a new customer.
    ///
    /// Checks run in order and stop at the first failure: ID, then name,
    /// then email.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingCustomerId`] if `customer_id` is empty
    /// - [`ValidationError::MissingCustomerName`] if `name` is empty
    /// - [`ValidationError::InvalidEmail`] if `email` is empty or malformed
    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        email: &str,
    ) -> Result<Self, ValidationError> {
        Self::validate(customer_id.into(), name.into(), email).inspect_err(|e| {
            tracing::debug!(error = %e, kind = %e.kind(), "Rejected customer");
        })
    }

    fn validate(customer_id: String, name: String, email: &str) -> Result<Self, ValidationError> {
        let customer_id = CustomerId::new(customer_id).ok_or(ValidationError::MissingCustomerId)?;
        if name.is_empty() {
            return Err(ValidationError::MissingCustomerName);
        }
        let email = Email::parse(email)?;

        Ok(Self {
            customer_id,
            name,
            email,
        })
    }

    #[must_use]
    pub const fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }
}

impl CustomerInfo for Customer {
    /// `Customer {id}: {name} <{email}>`
    fn customer_info(&self) -> String {
        format!(
            "Customer {}: {} <{}>",
            self.customer_id, self.name, self.email
        )
    }
}

impl Collaborator for Customer {
    fn as_customer_info(&self) -> Option<&dyn CustomerInfo> {
        Some(self)
    }
}
