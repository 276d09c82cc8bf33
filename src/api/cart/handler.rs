//! Cart API Handlers
//!
//! Every mutating flow runs inside a single request-scoped transaction, so
//! a failure mid-flow leaves the cart untouched.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{CartItemCreate, CartItemUpdate, CartSummary};
use crate::db::repository::{CartRepository, MenuItemRepository};
use crate::money;
use crate::utils::{AppError, AppResult};

/// Response for clearing a cart
#[derive(Serialize)]
pub struct ClearCartResponse {
    pub message: &'static str,
}

/// GET /cart/:session_id - get cart contents
///
/// Creates an empty cart for unseen sessions; this read endpoint has a
/// deliberate write side effect.
pub async fn get_cart(
    State(state): State<ServerState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<CartSummary>> {
    let mut tx = state.db.pool.begin().await?;

    let cart = CartRepository::get_or_create(&mut tx, &session_id).await?;
    let summary = CartRepository::load_summary(&mut tx, cart).await?;

    tx.commit().await?;
    Ok(Json(summary))
}

/// POST /cart/:session_id/items - add an item to the cart
///
/// Adding a menu item already present in the cart increments the existing
/// line instead of inserting a second one.
pub async fn add_to_cart(
    State(state): State<ServerState>,
    Path(session_id): Path<String>,
    Json(payload): Json<CartItemCreate>,
) -> AppResult<Json<CartSummary>> {
    money::validate_quantity(payload.quantity)?;

    let mut tx = state.db.pool.begin().await?;

    // Verify the menu item exists
    let menu_item = MenuItemRepository::find_by_id(&mut tx, payload.menu_item_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Menu item {} not found", payload.menu_item_id))
        })?;

    let cart = CartRepository::get_or_create(&mut tx, &session_id).await?;
    CartRepository::upsert_line(&mut tx, cart.id, menu_item.id, payload.quantity).await?;
    let summary = CartRepository::load_summary(&mut tx, cart).await?;

    tx.commit().await?;

    tracing::debug!(session_id = %session_id, menu_item_id = menu_item.id, "Item added to cart");
    Ok(Json(summary))
}

/// PUT /cart/:session_id/items/:item_id - set an item quantity
pub async fn update_cart_item(
    State(state): State<ServerState>,
    Path((session_id, item_id)): Path<(String, i64)>,
    Json(payload): Json<CartItemUpdate>,
) -> AppResult<Json<CartSummary>> {
    money::validate_quantity(payload.quantity)?;

    let mut tx = state.db.pool.begin().await?;

    let cart = CartRepository::get_or_create(&mut tx, &session_id).await?;
    let line = CartRepository::find_line(&mut tx, cart.id, item_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Cart item {} not found", item_id)))?;

    CartRepository::set_line_quantity(&mut tx, line.id, payload.quantity).await?;
    let summary = CartRepository::load_summary(&mut tx, cart).await?;

    tx.commit().await?;
    Ok(Json(summary))
}

/// DELETE /cart/:session_id/items/:item_id - remove an item from the cart
pub async fn remove_from_cart(
    State(state): State<ServerState>,
    Path((session_id, item_id)): Path<(String, i64)>,
) -> AppResult<Json<CartSummary>> {
    let mut tx = state.db.pool.begin().await?;

    let cart = CartRepository::get_or_create(&mut tx, &session_id).await?;
    let deleted = CartRepository::delete_line(&mut tx, cart.id, item_id).await?;
    if !deleted {
        return Err(AppError::not_found(format!(
            "Cart item {} not found",
            item_id
        )));
    }
    let summary = CartRepository::load_summary(&mut tx, cart).await?;

    tx.commit().await?;
    Ok(Json(summary))
}

/// DELETE /cart/:session_id - clear all items from the cart
///
/// A no-op (still 200) when the session has no cart yet.
pub async fn clear_cart(
    State(state): State<ServerState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<ClearCartResponse>> {
    let mut tx = state.db.pool.begin().await?;

    if let Some(cart) = CartRepository::find_by_session(&mut tx, &session_id).await? {
        let removed = CartRepository::clear_lines(&mut tx, cart.id).await?;
        tracing::debug!(session_id = %session_id, removed, "Cart cleared");
    }

    tx.commit().await?;
    Ok(Json(ClearCartResponse {
        message: "Cart cleared successfully",
    }))
}
