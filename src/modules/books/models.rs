use bookshelf_db::{
    entity::{author, book},
    model::BookWithAuthor,
};
use bookshelf_http::AppError;
use serde::{Deserialize, Serialize};

use crate::utils;

/// Book as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: i32,
    /// Title of the book
    pub name: String,
    /// Identifier of the owning author
    pub author_id: i32,
    /// Owning author, present whenever it was loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<BookAuthor>,
}

/// The author embedded in a book response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookAuthor {
    pub id: i32,
    pub name: String,
}

impl From<book::Model> for Book {
    fn from(model: book::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            author_id: model.author_id,
            author: None,
        }
    }
}

impl From<author::Model> for BookAuthor {
    fn from(model: author::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<BookWithAuthor> for Book {
    fn from(row: BookWithAuthor) -> Self {
        Self {
            author: row.author.map(BookAuthor::from),
            ..Self::from(row.book)
        }
    }
}

/// Request model for creating a new book.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    /// Title of the book
    pub name: String,
    /// Owning author, as a numeric string (`"1"`) or a JSON number
    pub author_id: AuthorIdInput,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AuthorIdInput {
    Number(u64),
    Text(String),
}

impl AuthorIdInput {
    pub fn resolve(&self) -> Result<i32, AppError> {
        match self {
            AuthorIdInput::Number(id) => u32::try_from(*id)
                .ok()
                .and_then(|id| i32::try_from(id).ok())
                .ok_or_else(|| AppError::bad_request(INVALID_AUTHOR_ID)),
            AuthorIdInput::Text(raw) => {
                utils::parse_id(raw).map_err(|_| AppError::bad_request(INVALID_AUTHOR_ID))
            }
        }
    }
}

pub const INVALID_AUTHOR_ID: &str = "Invalid author_id format";

/// Request model for renaming a book.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBook {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn author_id_accepts_string_or_number() {
        let from_text: CreateBook =
            serde_json::from_value(json!({"name": "Dune", "author_id": "1"})).unwrap();
        let from_number: CreateBook =
            serde_json::from_value(json!({"name": "Dune", "author_id": 1})).unwrap();

        assert_eq!(from_text.author_id.resolve().unwrap(), 1);
        assert_eq!(from_number.author_id.resolve().unwrap(), 1);
    }

    #[test]
    fn malformed_author_id_is_bad_request() {
        let input: CreateBook =
            serde_json::from_value(json!({"name": "Dune", "author_id": "one"})).unwrap();
        assert!(matches!(
            input.author_id.resolve(),
            Err(AppError::BadRequest { .. })
        ));

        let too_big = AuthorIdInput::Number(u64::from(u32::MAX) + 1);
        assert!(too_big.resolve().is_err());
    }

    #[test]
    fn book_without_author_omits_author_field() {
        let book = Book::from(book::Model {
            id: 3,
            name: "Dune".to_string(),
            author_id: 1,
        });
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({"id": 3, "name": "Dune", "author_id": 1})
        );
    }

    #[test]
    fn book_with_author_embeds_it() {
        let book = Book::from(BookWithAuthor {
            book: book::Model {
                id: 3,
                name: "Dune".to_string(),
                author_id: 1,
            },
            author: Some(author::Model {
                id: 1,
                name: "Herbert".to_string(),
            }),
        });
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({"id": 3, "name": "Dune", "author_id": 1, "author": {"id": 1, "name": "Herbert"}})
        );
    }
}
