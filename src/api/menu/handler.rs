//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate};
use crate::db::repository::MenuItemRepository;
use crate::money;
use crate::utils::{AppError, AppResult};

/// GET /menu - list all menu items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let mut conn = state.db.pool.acquire().await?;
    let items = MenuItemRepository::find_all(&mut conn).await?;
    Ok(Json(items))
}

/// GET /menu/:id - get a single menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let mut conn = state.db.pool.acquire().await?;
    let item = MenuItemRepository::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /menu - create a menu item
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    money::validate_price(payload.price)?;

    let mut conn = state.db.pool.acquire().await?;
    let item = MenuItemRepository::create(&mut conn, payload).await?;

    tracing::info!(id = item.id, name = %item.name, "Menu item created");
    Ok(Json(item))
}
