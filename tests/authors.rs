mod common;

use axum::http::StatusCode;
use bookshelf_db::test_utils::factory;
use common::{error_message, TestApp};
use sea_orm::ConnectionTrait;
use serde_json::json;

#[tokio::test]
async fn create_author_then_get_it_with_books() {
    let app = TestApp::new().await;

    let (status, created) = app.post("/api/v1/authors", json!({"name": "Herbert"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["is_valid"], true);
    let id = created["object"]["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, _) = app
        .post("/api/v1/books", json!({"name": "Dune", "author_id": id.to_string()}))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.get(&format!("/api/v1/authors/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["object"]["name"], "Herbert");
    let books = body["object"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], "Dune");
    assert_eq!(books[0]["author_id"], id);
}

#[tokio::test]
async fn list_authors_includes_authors_without_books() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/authors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["object"], json!([]));

    let herbert = factory::create_author(&app.test.db, "Herbert").await.unwrap();
    factory::create_author(&app.test.db, "Le Guin").await.unwrap();
    factory::create_book(&app.test.db, herbert.id, "Dune").await.unwrap();

    let (_, body) = app.get("/api/v1/authors").await;
    let authors = body["object"].as_array().unwrap();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0]["books"].as_array().unwrap().len(), 1);
    assert_eq!(authors[1]["books"], json!([]));
}

#[tokio::test]
async fn invalid_and_missing_author_ids() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/authors/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Invalid ID format");

    let (status, body) = app.get("/api/v1/authors/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Author not found");

    let (status, _) = app.put("/api/v1/authors/999", json!({"name": "X"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/v1/authors/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_author_keeps_books() {
    let app = TestApp::new().await;
    let author = factory::create_author(&app.test.db, "Herbert").await.unwrap();
    factory::create_book(&app.test.db, author.id, "Dune").await.unwrap();
    let uri = format!("/api/v1/authors/{}", author.id);

    let (status, body) = app.put(&uri, json!({"name": "Frank Herbert"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["object"]["id"], author.id);
    assert_eq!(body["object"]["name"], "Frank Herbert");
    assert_eq!(body["object"]["books"][0]["name"], "Dune");

    let (status, _) = app.put(&uri, json!({"title": "wrong field"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_rejected_by_store_is_bad_request() {
    let app = TestApp::new().await;
    let author = factory::create_author(&app.test.db, "Herbert").await.unwrap();
    app.test
        .db
        .execute_unprepared(
            "CREATE TRIGGER authors_read_only BEFORE UPDATE ON authors \
             BEGIN SELECT RAISE(ABORT, 'authors are read-only'); END;",
        )
        .await
        .unwrap();

    let (status, body) = app
        .put(&format!("/api/v1/authors/{}", author.id), json!({"name": "Frank Herbert"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("authors are read-only"));
}

#[tokio::test]
async fn delete_checks_the_author_not_a_book() {
    let app = TestApp::new().await;
    let reader = factory::create_author(&app.test.db, "Reader").await.unwrap();
    let author = factory::create_author(&app.test.db, "Herbert").await.unwrap();
    // A book whose id equals the target author's id must not make the delete succeed.
    factory::create_book(&app.test.db, reader.id, "Dune").await.unwrap();
    factory::create_book(&app.test.db, reader.id, "Dune Messiah").await.unwrap();

    let (status, _) = app.delete(&format!("/api/v1/authors/{}", author.id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.delete(&format!("/api/v1/authors/{}", author.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let missing = author.id + 100;
    let (status, _) = app.delete(&format!("/api/v1/authors/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_author_with_books_is_unprocessable() {
    let app = TestApp::new().await;
    let author = factory::create_author(&app.test.db, "Herbert").await.unwrap();
    factory::create_book(&app.test.db, author.id, "Dune").await.unwrap();

    let (status, body) = app.delete(&format!("/api/v1/authors/{}", author.id)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!error_message(&body).is_empty());

    let (status, _) = app.get(&format!("/api/v1/authors/{}", author.id)).await;
    assert_eq!(status, StatusCode::OK);
}
