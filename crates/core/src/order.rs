//! Order entity and its builder.
//!
//! An [`Order`] borrows its customer and product. It only sees them through
//! the [`capability`](crate::capability) traits, so the same `Customer` and
//! `Product` can back any number of orders, and tests can pass doubles.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::capability::{Collaborator, CustomerInfo, Priced, ProductInfo};
use crate::error::ValidationError;
use crate::types::{OrderId, Quantity};

/// An order for a quantity of one product by one customer.
///
/// All fields are fixed at construction. Every operation is a pure function
/// of them and of the collaborators' answers.
#[derive(Clone)]
pub struct Order<'a> {
    order_id: OrderId,
    customer: &'a dyn CustomerInfo,
    product: &'a dyn ProductInfo,
    pricing: &'a dyn Priced,
    quantity: Quantity,
}

impl<'a> Order<'a> {
    /// Start building an order. Fields left unset count as absent.
    #[must_use]
    pub fn builder() -> OrderBuilder<'a> {
        OrderBuilder::default()
    }

    /// Create an order with every field supplied.
    ///
    /// # Errors
    ///
    /// See [`OrderBuilder::build`].
    pub fn new(
        order_id: impl Into<String>,
        customer: &'a dyn Collaborator,
        product: &'a dyn Collaborator,
        quantity: impl Into<Decimal>,
    ) -> Result<Self, ValidationError> {
        Self::builder()
            .order_id(order_id)
            .customer(customer)
            .product(product)
            .quantity(quantity)
            .build()
    }

    /// Assemble an order from parts whose validation already happened.
    pub(crate) const fn from_validated(
        order_id: OrderId,
        customer: &'a dyn CustomerInfo,
        product: &'a dyn ProductInfo,
        pricing: &'a dyn Priced,
        quantity: Quantity,
    ) -> Self {
        Self {
            order_id,
            customer,
            product,
            pricing,
            quantity,
        }
    }

    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub const fn customer(&self) -> &'a dyn CustomerInfo {
        self.customer
    }

    #[must_use]
    pub const fn product(&self) -> &'a dyn ProductInfo {
        self.product
    }

    /// `quantity × unit price`, unrounded.
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    #[must_use]
    pub fn calculate_total_cost(&self) -> Decimal {
        self.quantity.get().saturating_mul(self.pricing.price())
    }

    /// Total cost with exactly two fractional digits, rounding half away
    /// from zero.
    #[must_use]
    pub fn format_total_cost(&self) -> String {
        let mut total = self
            .calculate_total_cost()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        total.rescale(2);
        total.to_string()
    }

    /// The customer's info string, verbatim.
    #[must_use]
    pub fn customer_summary(&self) -> String {
        self.customer.customer_info()
    }

    /// `{quantity} x {product info}`
    #[must_use]
    pub fn product_summary(&self) -> String {
        format!("{} x {}", self.quantity, self.product.product_info())
    }

    /// `Order {id}: {customer summary} purchased {product summary}. Total: ${total}`
    ///
    /// Calls the customer's and the product's info operation exactly once
    /// each.
    #[must_use]
    pub fn generate_order_summary(&self) -> String {
        let customer = self.customer_summary();
        let product = self.product_summary();
        let total = self.format_total_cost();

        format!(
            "Order {}: {customer} purchased {product}. Total: ${total}",
            self.order_id
        )
    }
}

impl fmt::Debug for Order<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("order_id", &self.order_id)
            .field("quantity", &self.quantity)
            .finish_non_exhaustive()
    }
}

/// Step-by-step construction of an [`Order`].
#[derive(Default)]
pub struct OrderBuilder<'a> {
    order_id: Option<String>,
    customer: Option<&'a dyn Collaborator>,
    product: Option<&'a dyn Collaborator>,
    quantity: Option<Decimal>,
}

impl<'a> OrderBuilder<'a> {
    #[must_use]
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    #[must_use]
    pub fn customer(mut self, customer: &'a dyn Collaborator) -> Self {
        self.customer = Some(customer);
        self
    }

    #[must_use]
    pub fn product(mut self, product: &'a dyn Collaborator) -> Self {
        self.product = Some(product);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: impl Into<Decimal>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Validate the fields and build the order.
    ///
    /// Checks run in this order and stop at the first failure:
    ///
    /// 1. order ID present and non-empty
    /// 2. customer present, then exposes [`CustomerInfo`]
    /// 3. product present, then exposes [`ProductInfo`], then [`Priced`]
    /// 4. quantity present, then a whole number, then greater than zero
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first failed check.
    pub fn build(self) -> Result<Order<'a>, ValidationError> {
        self.validate().inspect_err(|e| {
            tracing::debug!(error = %e, kind = %e.kind(), "Rejected order");
        })
    }

    fn validate(self) -> Result<Order<'a>, ValidationError> {
        let order_id = self
            .order_id
            .and_then(OrderId::new)
            .ok_or(ValidationError::MissingOrderId)?;

        let customer = self
            .customer
            .ok_or(ValidationError::MissingCustomer)?
            .as_customer_info()
            .ok_or(ValidationError::CustomerLacksInfo)?;

        let product = self.product.ok_or(ValidationError::MissingProduct)?;
        let info = product
            .as_product_info()
            .ok_or(ValidationError::ProductLacksInfo)?;
        let pricing = product
            .as_priced()
            .ok_or(ValidationError::ProductLacksPrice)?;

        let quantity = Quantity::new(self.quantity.ok_or(ValidationError::MissingQuantity)?)?;

        Ok(Order::from_validated(
            order_id, customer, info, pricing, quantity,
        ))
    }
}
