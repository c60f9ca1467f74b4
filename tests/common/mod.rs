#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use bookshelf_db::test_utils::{TestBuilder, TestContext};
use bookshelf_kernel::settings::Settings;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub test: TestContext,
}

impl TestApp {
    pub async fn new() -> Self {
        let test = TestBuilder::new()
            .build()
            .await
            .expect("test database should migrate");
        let router = bookshelf_app::app(&test.db, &Settings::default());
        Self { router, test }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Sends a raw body, for exercising malformed JSON.
    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(body) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(body)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

/// Asserts `body` is the failure envelope and returns its message.
pub fn error_message(body: &Value) -> &str {
    assert_eq!(body["is_valid"], Value::Bool(false), "body: {body}");
    assert!(body["object"].is_null(), "body: {body}");
    body["error"].as_str().expect("error should be a string")
}
