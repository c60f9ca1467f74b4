//! Request extractors whose rejections render as the failure envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json`, except a malformed or mistyped body is a 400 envelope
/// instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
