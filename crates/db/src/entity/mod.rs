//! SeaORM entities for the `authors` and `books` tables.

pub mod author;
pub mod book;
pub mod prelude;
