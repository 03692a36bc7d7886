//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`:
//! SeaORM entities, the SQLite connection pool and the repositories.

pub mod database;

pub use database::{DatabaseConfig, DatabasePool, SqlitePostRepository, SqliteUserRepository};
