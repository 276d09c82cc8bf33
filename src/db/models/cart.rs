//! Cart Models
//!
//! A cart is identified by its client-supplied session id (unique per cart)
//! and owns its line items. Line items are unique per (cart, menu item);
//! re-adding an item increments the existing line instead of duplicating it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MenuItem;

/// Cart entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cart {
    pub id: i64,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

/// Cart line entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartLine {
    pub id: i64,
    pub cart_id: i64,
    pub menu_item_id: i64,
    pub quantity: i64,
}

/// Cart line joined with its menu item, as served to clients.
/// The embedded menu item carries the current catalog price.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineDetail {
    pub id: i64,
    pub menu_item_id: i64,
    pub quantity: i64,
    pub menu_item: MenuItem,
}

/// Cart with its line items embedded
#[derive(Debug, Clone, Serialize)]
pub struct CartDetail {
    pub id: i64,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub cart_items: Vec<CartLineDetail>,
}

/// Cart plus aggregates, the response shape of every cart endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub cart: CartDetail,
    pub total_amount: f64,
    pub total_items: i64,
}

/// Payload for adding an item to a cart
#[derive(Debug, Clone, Deserialize)]
pub struct CartItemCreate {
    pub menu_item_id: i64,
    pub quantity: i64,
}

/// Payload for setting a cart line quantity
#[derive(Debug, Clone, Deserialize)]
pub struct CartItemUpdate {
    pub quantity: i64,
}
