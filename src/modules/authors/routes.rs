use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use bookshelf_db::{model::AuthorWithBooks, repository::AuthorRepository};
use bookshelf_http::{AppError, Envelope, JsonBody};
use sea_orm::DatabaseConnection;

use super::models::{Author, AuthorInput};
use crate::utils;

pub const AUTHOR_NOT_FOUND: &str = "Author not found";

/// Shared state for the author handlers
#[derive(Clone)]
pub struct AuthorsState {
    pub db: DatabaseConnection,
}

/// Registers HTTP routes for the Authors module.
pub fn router(state: AuthorsState) -> Router {
    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route(
            "/{id}",
            get(get_author).put(update_author).delete(delete_author),
        )
        .with_state(state)
}

/// `GET /authors/{id}`
async fn get_author(
    State(state): State<AuthorsState>,
    Path(raw_id): Path<String>,
) -> Result<Envelope<Author>, AppError> {
    let id = utils::parse_id(&raw_id)?;

    let author = AuthorRepository::new(&state.db)
        .get_by_id(id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(AUTHOR_NOT_FOUND))?;

    Ok(Envelope::ok(author.into()))
}

/// `GET /authors`
async fn list_authors(
    State(state): State<AuthorsState>,
) -> Result<Envelope<Vec<Author>>, AppError> {
    let authors = AuthorRepository::new(&state.db)
        .get_all()
        .await
        .map_err(AppError::internal)?;

    Ok(Envelope::ok(authors.into_iter().map(Author::from).collect()))
}

/// `POST /authors`
async fn create_author(
    State(state): State<AuthorsState>,
    JsonBody(input): JsonBody<AuthorInput>,
) -> Result<(StatusCode, Envelope<Author>), AppError> {
    let name = utils::require_name(input.name)?;

    let author = AuthorRepository::new(&state.db)
        .create(name)
        .await
        .map_err(|err| AppError::unprocessable(err.to_string()))?;

    tracing::info!(author_id = author.id, "author created");

    Ok((StatusCode::CREATED, Envelope::ok(author.into())))
}

/// `PUT /authors/{id}`
async fn update_author(
    State(state): State<AuthorsState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<AuthorInput>,
) -> Result<Envelope<Author>, AppError> {
    let id = utils::parse_id(&raw_id)?;
    let name = utils::require_name(input.name)?;
    let repo = AuthorRepository::new(&state.db);

    let existing = repo
        .get_by_id(id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(AUTHOR_NOT_FOUND))?;

    let updated = repo
        .update(existing.author, name)
        .await
        .map_err(|err| AppError::bad_request(err.to_string()))?;

    tracing::info!(author_id = updated.id, "author updated");

    Ok(Envelope::ok(Author::from(AuthorWithBooks {
        author: updated,
        books: existing.books,
    })))
}

/// `DELETE /authors/{id}`
///
/// Authors who still own books are rejected by the store with a 422.
async fn delete_author(
    State(state): State<AuthorsState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = utils::parse_id(&raw_id)?;
    let repo = AuthorRepository::new(&state.db);

    repo.get_by_id(id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(AUTHOR_NOT_FOUND))?;

    let removed = repo
        .delete(id)
        .await
        .map_err(|err| AppError::unprocessable(err.to_string()))?;

    if removed == 0 {
        return Err(AppError::not_found(AUTHOR_NOT_FOUND));
    }

    tracing::info!(author_id = id, "author deleted");

    Ok(StatusCode::NO_CONTENT)
}
