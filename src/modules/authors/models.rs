use bookshelf_db::{
    entity::{author, book},
    model::AuthorWithBooks,
};
use serde::{Deserialize, Serialize};

/// Author as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
    /// Books owned by the author, present whenever they were loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<AuthorBook>>,
}

/// A book listed under its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBook {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

impl From<author::Model> for Author {
    fn from(model: author::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            books: None,
        }
    }
}

impl From<book::Model> for AuthorBook {
    fn from(model: book::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            author_id: model.author_id,
        }
    }
}

impl From<AuthorWithBooks> for Author {
    fn from(row: AuthorWithBooks) -> Self {
        Self {
            books: Some(row.books.into_iter().map(AuthorBook::from).collect()),
            ..Self::from(row.author)
        }
    }
}

/// Request model shared by create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorInput {
    pub name: String,
}
