//! Composite read models returned by the repositories.

use crate::entity::{author, book};

/// A book together with its eagerly loaded author.
///
/// `author` is only `None` if the row it references has vanished, which the
/// foreign key prevents in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookWithAuthor {
    pub book: book::Model,
    pub author: Option<author::Model>,
}

/// An author together with every book they own, ordered by book id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorWithBooks {
    pub author: author::Model,
    pub books: Vec<book::Model>,
}

/// Parameters for inserting a new book.
#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub name: String,
    pub author_id: i32,
}
