use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use postboard_core::error::RepoError;

/// Configuration for the application database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SeaORM connection string, e.g. `sqlite://postboard.db?mode=rwc`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Pooled connection to the application database.
///
/// Each statement checks a connection out of the pool and hands it back when
/// the statement finishes, on success and on error alike.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    conn: DbConn,
}

impl DatabasePool {
    /// Open the pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(
            "Database connected (pool: {}..{})",
            config.min_connections,
            config.max_connections
        );

        Ok(Self { conn })
    }

    /// Wrap an already-open connection, e.g. an in-memory database in tests.
    pub fn from_conn(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Round-trip to the database.
    pub async fn ping(&self) -> Result<(), RepoError> {
        self.conn
            .ping()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}
