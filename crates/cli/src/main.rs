use anyhow::Context;
use bookshelf_db::Migrator;
use bookshelf_kernel::settings::Settings;
use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Books and authors service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Manage the database schema
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum MigrateAction {
    /// Apply every pending migration
    Up,
    /// Roll back the most recent migration
    Down,
    /// Print applied and pending migrations
    Status,
    /// Drop every table and reapply all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;
    bookshelf_telemetry::init(&settings.telemetry)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            tracing::info!(env = ?settings.environment, "starting bookshelf server");
            bookshelf_app::run(settings).await
        }
        Command::Migrate { action } => migrate(&settings, action).await,
    }
}

async fn migrate(settings: &Settings, action: MigrateAction) -> anyhow::Result<()> {
    let db = bookshelf_db::connect(&settings.database).await?;

    tracing::info!(?action, "running migrations");
    let result = match action {
        MigrateAction::Up => Migrator::up(&db, None).await,
        MigrateAction::Down => Migrator::down(&db, Some(1)).await,
        MigrateAction::Status => Migrator::status(&db).await,
        MigrateAction::Fresh => Migrator::fresh(&db).await,
    };
    result.with_context(|| format!("migrate {action:?} failed"))?;

    db.close()
        .await
        .with_context(|| "failed to close database connection")
}
