//! Money calculation utilities using rust_decimal for precision
//!
//! Cart and order totals are computed with `Decimal` internally, then
//! converted to `f64` for storage/serialization. Prices are read from the
//! current catalog at aggregation time, never snapshotted in the cart.

use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;

use crate::db::models::CartLineDetail;
use crate::utils::AppError;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per menu item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per cart line
const MAX_QUANTITY: i64 = 9999;

/// Convert an f64 into a Decimal for calculation
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert a Decimal back to f64, rounded to 2 decimal places
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Validate a menu item price at the request boundary
pub fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() {
        return Err(AppError::validation(format!(
            "price must be a finite number, got {}",
            price
        )));
    }
    if price <= 0.0 {
        return Err(AppError::validation(format!(
            "price must be greater than 0, got {}",
            price
        )));
    }
    if price > MAX_PRICE {
        return Err(AppError::validation(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, price
        )));
    }
    Ok(())
}

/// Validate a cart line quantity at the request boundary
pub fn validate_quantity(quantity: i64) -> Result<(), AppError> {
    if quantity <= 0 {
        return Err(AppError::validation(format!(
            "quantity must be greater than 0, got {}",
            quantity
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }
    Ok(())
}

/// Total for a single cart line: current catalog price × quantity
pub fn line_total(price: f64, quantity: i64) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// Aggregates shared by the cart and order flows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals, rounded to 2 decimal places
    pub total_amount: f64,
    /// Sum of line quantities
    pub total_items: i64,
}

/// Compute cart aggregates over the line items of a cart
pub fn cart_totals(lines: &[CartLineDetail]) -> CartTotals {
    let mut amount = Decimal::ZERO;
    let mut items: i64 = 0;
    for line in lines {
        amount += line_total(line.menu_item.price, line.quantity);
        items += line.quantity;
    }
    CartTotals {
        total_amount: to_f64(amount),
        total_items: items,
    }
}

#[cfg(test)]
mod tests;
