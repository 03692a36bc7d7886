//! Schema migrations for the `users` and `posts` tables.
//!
//! Every table is created with `IF NOT EXISTS`, and applied migrations are
//! recorded in `seaql_migrations`, so `Migrator::up` is safe to run on each boot.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_posts::Migration),
        ]
    }
}
