//! Thin data-access layer over the shared [`sea_orm::DatabaseConnection`].
//!
//! Every method maps to one store operation (plus eager loading of the related
//! entity on reads). Store errors are returned unmodified as [`sea_orm::DbErr`].

pub mod author;
pub mod book;

pub use author::AuthorRepository;
pub use book::BookRepository;

#[cfg(test)]
mod test;
