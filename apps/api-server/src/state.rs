//! Application state - shared across all handlers.

use std::sync::Arc;

use migration::{DbErr, Migrator, MigratorTrait};

use postboard_core::ports::{PostRepository, UserRepository};
use postboard_infra::{DatabaseConfig, DatabasePool, SqlitePostRepository, SqliteUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub db: DatabasePool,
}

impl AppState {
    /// Connect to the database and make sure the schema exists.
    ///
    /// Any failure here is fatal: the server must not accept traffic
    /// without the `users` and `posts` tables.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = DatabasePool::init(config).await?;

        tracing::info!("Applying schema migrations");
        Migrator::up(db.conn(), None).await?;

        let state = Self::new(db);
        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Build the state on top of an open pool whose schema is already in place.
    pub fn new(db: DatabasePool) -> Self {
        Self {
            users: Arc::new(SqliteUserRepository::new(db.conn().clone())),
            posts: Arc::new(SqlitePostRepository::new(db.conn().clone())),
            db,
        }
    }
}
