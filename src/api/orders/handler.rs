//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Order, OrderConfirmation, OrderStatus};
use crate::db::repository::{CartRepository, OrderRepository};
use crate::money;
use crate::utils::{AppError, AppResult};

/// Query params for creating an order
#[derive(Debug, Deserialize)]
pub struct CreateOrderQuery {
    pub session_id: String,
}

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// Query params for updating an order status
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

/// POST /orders?session_id=... - create an order from the session's cart
///
/// The order snapshots the cart total at this moment; the cart and its
/// lines are deliberately left untouched, so the same cart can be ordered
/// again until the client clears it.
pub async fn create(
    State(state): State<ServerState>,
    Query(query): Query<CreateOrderQuery>,
) -> AppResult<Json<OrderConfirmation>> {
    let mut tx = state.db.pool.begin().await?;

    let cart = CartRepository::find_by_session(&mut tx, &query.session_id)
        .await?
        .ok_or_else(|| AppError::not_found("Cart not found"))?;

    let lines = CartRepository::load_lines(&mut tx, cart.id).await?;
    if lines.is_empty() {
        return Err(AppError::business_rule("Cart is empty"));
    }

    let totals = money::cart_totals(&lines);
    let order = OrderRepository::create(&mut tx, cart.id, totals.total_amount).await?;

    tx.commit().await?;

    tracing::info!(
        order_id = order.id,
        total_amount = order.total_amount,
        total_items = totals.total_items,
        "Order created"
    );

    let message = format!(
        "Thank you for your order! Your order #{} has been placed successfully. \
         Total: ${:.2} for {} items. We'll have it ready soon!",
        order.id, order.total_amount, totals.total_items
    );

    Ok(Json(OrderConfirmation { order, message }))
}

/// GET /orders/:id - get order details
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let mut conn = state.db.pool.acquire().await?;
    let order = OrderRepository::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order))
}

/// GET /orders?skip=&limit= - list orders (paginated)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let mut conn = state.db.pool.acquire().await?;
    let orders = OrderRepository::find_all(&mut conn, query.skip, query.limit).await?;
    Ok(Json(orders))
}

/// PUT /orders/:id?status=... - overwrite an order status
///
/// The status string is matched case-insensitively. Any status is reachable
/// from any status; there is no transition graph and no terminal state.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<Order>> {
    let status = OrderStatus::parse(&query.status).ok_or_else(|| {
        AppError::validation(format!(
            "Invalid status '{}'. Must be one of: pending, completed, cancelled",
            query.status
        ))
    })?;

    let mut tx = state.db.pool.begin().await?;
    let order = OrderRepository::update_status(&mut tx, id, status)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    tx.commit().await?;

    tracing::info!(order_id = order.id, status = status.as_str(), "Order status updated");
    Ok(Json(order))
}
