//! Database connection management and repositories.

mod connections;
mod sqlite_base;
pub mod sqlite_repo;

pub mod entity;

pub use connections::{DatabaseConfig, DatabasePool};
pub use sqlite_repo::{SqlitePostRepository, SqliteUserRepository};
