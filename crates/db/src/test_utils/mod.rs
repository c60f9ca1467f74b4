//! Test helpers for code that talks to the database.
//!
//! [`TestBuilder`] opens an in-memory SQLite database and runs the real
//! [`Migrator`](crate::Migrator) against it, so tests exercise the same schema
//! (foreign keys included) as production.
//!
//! ```rust,ignore
//! let test = TestBuilder::new().build().await?;
//! let author = factory::create_author(&test.db, "Herbert").await?;
//! ```

pub mod factory;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::Migrator;

/// Test environment holding a migrated database connection.
pub struct TestContext {
    pub db: DatabaseConnection,
}

/// Builder for creating test contexts.
pub struct TestBuilder {
    migrate: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { migrate: true }
    }

    /// Leave the schema empty, e.g. to test the migrations themselves.
    pub fn without_migrations(mut self) -> Self {
        self.migrate = false;
        self
    }

    pub async fn build(self) -> Result<TestContext, DbErr> {
        // A single pooled connection keeps every query on the same in-memory database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(options).await?;

        if self.migrate {
            Migrator::up(&db, None).await?;
        }

        Ok(TestContext { db })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
