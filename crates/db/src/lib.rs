//! SeaORM integration for bookshelf: connection factory, entities, schema
//! migrations and the repositories the resource modules call into.

use std::time::Duration;

use anyhow::Context;
use bookshelf_kernel::settings::DatabaseSettings;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

pub mod entity;
pub mod migration;
pub mod model;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use migration::Migrator;

/// Open the shared connection pool described by `settings`.
///
/// Called once at process start; the returned handle is cloned into every
/// module that needs it.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<DatabaseConnection> {
    tracing::info!(
        target: "bookshelf-db",
        max_connections = settings.max_connections,
        "connecting to database"
    );

    let mut options = ConnectOptions::new(settings.url.clone());
    options
        .max_connections(settings.max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .with_context(|| "failed to connect to database")
}

/// Apply every pending migration.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    tracing::info!(target: "bookshelf-db", "applying pending migrations");
    Migrator::up(db, None)
        .await
        .with_context(|| "failed to apply migrations")
}
