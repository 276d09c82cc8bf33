//! Cafe Order Server - backend for a cafe/restaurant ordering workflow
//!
//! # Overview
//!
//! Clients browse a menu, build a session-scoped cart and convert the cart
//! into an order. Carts are keyed by a client-supplied session id; orders
//! snapshot the cart total at checkout time.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/     # Configuration, state, HTTP server
//! ├── api/      # HTTP routes and handlers
//! ├── db/       # SQLite layer: models and repositories
//! ├── money/    # Decimal-precise total aggregation
//! └── utils/    # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod money;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::DbService;
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};
