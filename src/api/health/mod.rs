//! Health check and root routes
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | / | GET | Welcome message | none |
//! | /health | GET | Liveness probe | none |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check router - public routes
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Welcome response for the root path
#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Cafe Order API",
    })
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy as long as the process serves requests)
    status: &'static str,
    /// Version
    version: &'static str,
}

/// Liveness probe; does not touch the database
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
