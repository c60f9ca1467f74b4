//! Bookshelf application library
//!
//! Wires the books and authors resource modules onto the shared database
//! connection and serves them over HTTP.

pub mod modules;
pub mod utils;

use anyhow::Context;
use axum::Router;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};
use sea_orm::DatabaseConnection;

/// Build a registry holding every resource module bound to `db`
pub fn registry(db: &DatabaseConnection) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, db);
    registry
}

/// Assemble the full HTTP application around an existing connection
pub fn app(db: &DatabaseConnection, settings: &Settings) -> Router {
    bookshelf_http::build_router(&registry(db), settings)
}

/// Connect, migrate, run the module lifecycle and serve until shutdown
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let db = bookshelf_db::connect(&settings.database).await?;

    if settings.database.run_migrations {
        bookshelf_db::migrate(&db).await?;
    }

    let registry = registry(&db);
    let ctx = InitCtx {
        settings: &settings,
        db: &db,
    };

    registry
        .init_all(&ctx)
        .await
        .with_context(|| "failed to initialize modules")?;
    registry
        .start_all(&ctx)
        .await
        .with_context(|| "failed to start modules")?;

    let served = bookshelf_http::start_server(&registry, &settings).await;

    registry
        .stop_all()
        .await
        .with_context(|| "failed to stop modules")?;
    db.close()
        .await
        .with_context(|| "failed to close database connection")?;

    served
}
