//! Repository Module
//!
//! Direct SQL data access over the SQLite store. Every operation takes an
//! explicit `&mut SqliteConnection`, so a handler can run several repository
//! calls inside one request-scoped transaction.

pub mod cart;
pub mod menu_item;
pub mod order;

// Re-exports
pub use cart::CartRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
mod tests;
