pub mod authors;
pub mod books;

use bookshelf_kernel::ModuleRegistry;
use sea_orm::DatabaseConnection;

/// Register all project-specific modules with the registry
///
/// Each module receives its own clone of the shared connection handle.
pub fn register_all(registry: &mut ModuleRegistry, db: &DatabaseConnection) {
    registry.register(authors::create_module(db.clone()));
    registry.register(books::create_module(db.clone()));
}
