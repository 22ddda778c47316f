//! End-to-end order summaries built from real entities and JSON drafts.

use order_desk_core::{Customer, CustomerInfo, Order, OrderDraft, Product, ProductInfo};
use order_desk_integration_tests::{JOHN_DOE_LAPTOP_SUMMARY, john_doe, laptop, order_document_json};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Typed Construction
// =============================================================================

#[test]
fn test_summary_from_entities() {
    let customer = john_doe();
    let product = laptop();
    let order = Order::new("O1001", &customer, &product, 2).unwrap();

    assert_eq!(order.generate_order_summary(), JOHN_DOE_LAPTOP_SUMMARY);
}

#[test]
fn test_summary_is_repeatable() {
    let customer = john_doe();
    let product = laptop();
    let order = Order::new("O1001", &customer, &product, 2).unwrap();

    let first = order.generate_order_summary();
    let second = order.generate_order_summary();
    assert_eq!(first, second);
}

#[test]
fn test_summary_parts_compose() {
    let customer = john_doe();
    let product = laptop();
    let order = Order::new("O1001", &customer, &product, 2).unwrap();

    let expected = format!(
        "Order O1001: {} purchased {}. Total: ${}",
        order.customer_summary(),
        order.product_summary(),
        order.format_total_cost()
    );
    assert_eq!(order.generate_order_summary(), expected);
    assert_eq!(order.customer_summary(), customer.customer_info());
    assert_eq!(
        order.product_summary(),
        format!("2 x {}", product.product_info())
    );
}

#[test]
fn test_builder_matches_new() {
    let customer = john_doe();
    let product = laptop();
    let built = Order::builder()
        .order_id("O1001")
        .customer(&customer)
        .product(&product)
        .quantity(2_u32)
        .build()
        .unwrap();

    assert_eq!(built.generate_order_summary(), JOHN_DOE_LAPTOP_SUMMARY);
}

#[test]
fn test_many_orders_share_entities() {
    let customer = john_doe();
    let product = laptop();

    let orders: Vec<Order<'_>> = (1..=5)
        .map(|q| Order::new(format!("O{q}"), &customer, &product, q).unwrap())
        .collect();

    let totals: Vec<String> = orders.iter().map(Order::format_total_cost).collect();
    assert_eq!(
        totals,
        ["999.99", "1999.98", "2999.97", "3999.96", "4999.95"]
    );
    // Entities are untouched by the orders referencing them.
    assert_eq!(customer, john_doe());
    assert_eq!(product, laptop());
}

#[test]
fn test_whole_price_formats_with_two_digits() {
    let customer = Customer::new("C9", "Ada", "ada@example.org").unwrap();
    let product = Product::new("P9", "Cable", Decimal::from(5)).unwrap();
    let order = Order::new("O9", &customer, &product, 3).unwrap();

    assert_eq!(
        order.generate_order_summary(),
        "Order O9: Customer C9: Ada <ada@example.org> purchased 3 x Product P9: Cable ($5). Total: $15.00"
    );
}

// =============================================================================
// JSON Drafts
// =============================================================================

#[test]
fn test_summary_from_json_document() {
    let draft: OrderDraft = serde_json::from_value(order_document_json()).unwrap();
    let document = draft.resolve().unwrap();

    assert_eq!(document.order().generate_order_summary(), JOHN_DOE_LAPTOP_SUMMARY);
}

#[test]
fn test_json_document_quantity_as_whole_float() {
    let mut json = order_document_json();
    json["quantity"] = serde_json::json!(2.0);
    let draft: OrderDraft = serde_json::from_value(json).unwrap();

    let document = draft.resolve().unwrap();
    assert_eq!(document.order().generate_order_summary(), JOHN_DOE_LAPTOP_SUMMARY);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_total_matches_multiplication(quantity in 1_u32..100_000, cents in 1_i64..100_000_000) {
        let customer = john_doe();
        let price = Decimal::new(cents, 2);
        let product = Product::new("P1", "Widget", price).unwrap();
        let order = Order::new("O1", &customer, &product, quantity).unwrap();

        let total = order.calculate_total_cost();
        prop_assert_eq!(total, Decimal::from(quantity) * price);

        let formatted = order.format_total_cost();
        let (whole, fraction) = formatted.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(whole.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(formatted.parse::<Decimal>().unwrap(), total);
    }
}
