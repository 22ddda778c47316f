//! Orders built from collaborator doubles.
//!
//! These tests verify that an order only relies on the capability traits and
//! that summary generation asks each collaborator exactly once.

use order_desk_core::{Collaborator, Order, ValidationError, ValidationErrorKind};
use order_desk_integration_tests::{
    JOHN_DOE_LAPTOP_SUMMARY, MockCustomer, MockProduct, Opaque, john_doe, laptop, mocks,
};
use rust_decimal::Decimal;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_order_with_mocked_dependencies() {
    let (customer, product) = mocks();
    let order = Order::new("O1001", &customer, &product, 2).unwrap();

    assert_eq!(order.order_id().as_str(), "O1001");
    assert_eq!(order.quantity().get(), Decimal::TWO);
    // Construction inspects capabilities without calling them.
    assert_eq!(customer.calls(), 0);
    assert_eq!(product.info_calls(), 0);
}

#[test]
fn test_mock_quantity_not_integer() {
    let (customer, product) = mocks();
    let err = Order::new("O1001", &customer, &product, Decimal::new(25, 1)).unwrap_err();
    assert_eq!(err.to_string(), "Quantity must be an integer");
}

#[test]
fn test_mixed_real_and_mock_collaborators() {
    let customer = john_doe();
    let (_, product) = mocks();
    let order = Order::new("O1001", &customer, &product, 2).unwrap();
    assert_eq!(order.generate_order_summary(), JOHN_DOE_LAPTOP_SUMMARY);
}

// =============================================================================
// Call Counting
// =============================================================================

#[test]
fn test_summary_with_mocks() {
    let (customer, product) = mocks();
    let order = Order::new("O1001", &customer, &product, 2).unwrap();

    assert_eq!(order.generate_order_summary(), JOHN_DOE_LAPTOP_SUMMARY);
    assert_eq!(customer.calls(), 1);
    assert_eq!(product.info_calls(), 1);
}

#[test]
fn test_summary_calls_each_collaborator_once_per_call() {
    let (customer, product) = mocks();
    let order = Order::new("O1001", &customer, &product, 2).unwrap();

    for expected in 1..=3 {
        order.generate_order_summary();
        assert_eq!(customer.calls(), expected);
        assert_eq!(product.info_calls(), expected);
    }
}

#[test]
fn test_helpers_called_separately_do_not_change_summary_calls() {
    let (customer, product) = mocks();
    let order = Order::new("O1001", &customer, &product, 2).unwrap();

    order.customer_summary();
    order.product_summary();
    order.format_total_cost();
    assert_eq!(customer.calls(), 1);
    assert_eq!(product.info_calls(), 1);

    order.generate_order_summary();
    assert_eq!(customer.calls(), 2);
    assert_eq!(product.info_calls(), 2);
}

#[test]
fn test_total_uses_product_price() {
    let (customer, product) = mocks();
    let order = Order::new("O1001", &customer, &product, 2).unwrap();

    assert_eq!(order.calculate_total_cost(), Decimal::new(199_998, 2));
    assert_eq!(product.price_calls(), 1);
}

#[test]
fn test_shared_mock_across_orders() {
    let customer = MockCustomer::new("Customer X");
    let product = MockProduct::new("Product Y", Decimal::ONE);
    let first = Order::new("O1", &customer, &product, 1).unwrap();
    let second = Order::new("O2", &customer, &product, 2).unwrap();

    first.generate_order_summary();
    second.generate_order_summary();
    assert_eq!(customer.calls(), 2);
    assert_eq!(product.info_calls(), 2);
}

// =============================================================================
// Missing Capabilities
// =============================================================================

#[test]
fn test_opaque_customer() {
    let product = laptop();
    let err = Order::new("O1001", &Opaque, &product, 2).unwrap_err();
    assert_eq!(err, ValidationError::CustomerLacksInfo);
    assert_eq!(err.kind(), ValidationErrorKind::MissingCapability);
}

#[test]
fn test_customer_used_as_product() {
    let customer = john_doe();
    let err = Order::new("O1001", &customer, &customer, 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Product must implement getProductInfo method"
    );
}

/// Has product info but no price.
struct Catalogue;

impl order_desk_core::ProductInfo for Catalogue {
    fn product_info(&self) -> String {
        "Product C: Catalogue".to_owned()
    }
}

impl Collaborator for Catalogue {
    fn as_product_info(&self) -> Option<&dyn order_desk_core::ProductInfo> {
        Some(self)
    }
}

#[test]
fn test_product_without_price() {
    let customer = john_doe();
    let err = Order::new("O1001", &customer, &Catalogue, 2).unwrap_err();
    assert_eq!(err.to_string(), "Product must have a valid price");
}
