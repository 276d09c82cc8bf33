//! Cart API module
//!
//! Carts are addressed purely by session id; cart ids never appear in the
//! URL surface.

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/cart", cart_routes())
}

fn cart_routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/{session_id}",
            get(handler::get_cart).delete(handler::clear_cart),
        )
        .route("/{session_id}/items", post(handler::add_to_cart))
        .route(
            "/{session_id}/items/{item_id}",
            put(handler::update_cart_item).delete(handler::remove_from_cart),
        )
}
