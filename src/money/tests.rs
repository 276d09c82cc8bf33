use super::*;
use crate::db::models::{CartLineDetail, MenuItem};

fn line(menu_item_id: i64, price: f64, quantity: i64) -> CartLineDetail {
    CartLineDetail {
        id: menu_item_id,
        menu_item_id,
        quantity,
        menu_item: MenuItem {
            id: menu_item_id,
            name: format!("item-{menu_item_id}"),
            description: None,
            price,
            image_url: None,
        },
    }
}

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    let sum_f64 = a + b;

    // f64 fails
    assert_ne!(sum_f64, 0.3);

    // Decimal succeeds
    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_accumulation_precision() {
    // Sum 0.01 one thousand times
    let mut total = Decimal::ZERO;
    for _ in 0..1000 {
        total += to_decimal(0.01);
    }
    assert_eq!(to_f64(total), 10.0);
}

#[test]
fn test_line_total() {
    assert_eq!(to_f64(line_total(10.99, 3)), 32.97);
    assert_eq!(to_f64(line_total(2.50, 3)), 7.50);
}

#[test]
fn test_cart_totals_empty() {
    let totals = cart_totals(&[]);
    assert_eq!(totals.total_amount, 0.0);
    assert_eq!(totals.total_items, 0);
}

#[test]
fn test_cart_totals_multiple_lines() {
    // Espresso 2.50 x5, croissant 3.50 x2
    let lines = vec![line(1, 2.50, 5), line(2, 3.50, 2)];
    let totals = cart_totals(&lines);
    assert_eq!(totals.total_amount, 19.50);
    assert_eq!(totals.total_items, 7);
}

#[test]
fn test_cart_totals_no_drift_over_many_lines() {
    // 100 lines priced 0.10 each would drift under f64 accumulation
    let lines: Vec<CartLineDetail> = (1..=100).map(|i| line(i, 0.10, 1)).collect();
    let totals = cart_totals(&lines);
    assert_eq!(totals.total_amount, 10.0);
    assert_eq!(totals.total_items, 100);
}

#[test]
fn test_validate_price() {
    assert!(validate_price(2.50).is_ok());
    assert!(validate_price(0.0).is_err());
    assert!(validate_price(-1.0).is_err());
    assert!(validate_price(f64::NAN).is_err());
    assert!(validate_price(f64::INFINITY).is_err());
    assert!(validate_price(2_000_000.0).is_err());
}

#[test]
fn test_validate_quantity() {
    assert!(validate_quantity(1).is_ok());
    assert!(validate_quantity(0).is_err());
    assert!(validate_quantity(-3).is_err());
    assert!(validate_quantity(10_000).is_err());
}
