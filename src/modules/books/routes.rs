use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use bookshelf_db::{model::CreateBookParams, repository::BookRepository};
use bookshelf_http::{AppError, Envelope, JsonBody};
use sea_orm::DatabaseConnection;

use super::models::{Book, CreateBook, UpdateBook};
use crate::utils;

pub const BOOK_NOT_FOUND: &str = "Book not found";

/// Shared state for the book handlers
#[derive(Clone)]
pub struct BooksState {
    pub db: DatabaseConnection,
}

/// Registers HTTP routes for the Books module.
pub fn router(state: BooksState) -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/{id}", get(get_book).put(update_book).delete(delete_book))
        .with_state(state)
}

/// `GET /books/{id}`
async fn get_book(
    State(state): State<BooksState>,
    Path(raw_id): Path<String>,
) -> Result<Envelope<Book>, AppError> {
    let id = utils::parse_id(&raw_id)?;

    let book = BookRepository::new(&state.db)
        .get_by_id(id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(BOOK_NOT_FOUND))?;

    Ok(Envelope::ok(book.into()))
}

/// `GET /books`
async fn list_books(State(state): State<BooksState>) -> Result<Envelope<Vec<Book>>, AppError> {
    let books = BookRepository::new(&state.db)
        .get_all()
        .await
        .map_err(AppError::internal)?;

    Ok(Envelope::ok(books.into_iter().map(Book::from).collect()))
}

/// `POST /books`
async fn create_book(
    State(state): State<BooksState>,
    JsonBody(input): JsonBody<CreateBook>,
) -> Result<(StatusCode, Envelope<Book>), AppError> {
    let name = utils::require_name(input.name)?;
    let author_id = input.author_id.resolve()?;

    let book = BookRepository::new(&state.db)
        .create(CreateBookParams { name, author_id })
        .await
        .map_err(|err| AppError::unprocessable(err.to_string()))?;

    tracing::info!(book_id = book.id, author_id, "book created");

    Ok((StatusCode::CREATED, Envelope::ok(book.into())))
}

/// `PUT /books/{id}`
async fn update_book(
    State(state): State<BooksState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<UpdateBook>,
) -> Result<Envelope<Book>, AppError> {
    let id = utils::parse_id(&raw_id)?;
    let name = utils::require_name(input.name)?;
    let repo = BookRepository::new(&state.db);

    let existing = repo
        .get_by_id(id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(BOOK_NOT_FOUND))?;

    let updated = repo
        .update(existing.book, name)
        .await
        .map_err(|err| AppError::bad_request(err.to_string()))?;

    tracing::info!(book_id = updated.id, "book updated");

    Ok(Envelope::ok(Book {
        author: existing.author.map(Into::into),
        ..Book::from(updated)
    }))
}

/// `DELETE /books/{id}`
async fn delete_book(
    State(state): State<BooksState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = utils::parse_id(&raw_id)?;
    let repo = BookRepository::new(&state.db);

    repo.get_by_id(id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(BOOK_NOT_FOUND))?;

    let removed = repo
        .delete(id)
        .await
        .map_err(|err| AppError::unprocessable(err.to_string()))?;

    // Another request may have deleted it between the lookup and the delete.
    if removed == 0 {
        return Err(AppError::not_found(BOOK_NOT_FOUND));
    }

    tracing::info!(book_id = id, "book deleted");

    Ok(StatusCode::NO_CONTENT)
}
