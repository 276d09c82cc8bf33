use crate::core::Config;
use crate::db::DbService;

/// Server state - shared by every request handler
///
/// Cheap to clone; the database service wraps a pooled connection handle.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite-backed database service
    pub db: DbService,
}

impl ServerState {
    /// Create server state from existing parts (used by tests)
    pub fn with_db(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Initialize server state: open the database and apply migrations
    ///
    /// # Panics
    ///
    /// Panics when the database cannot be initialized
    pub async fn initialize(config: &Config) -> Self {
        let db = DbService::new(&config.database_path)
            .await
            .expect("Failed to initialize database");

        Self {
            config: config.clone(),
            db,
        }
    }
}
