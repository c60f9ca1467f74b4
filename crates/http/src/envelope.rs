//! The `{is_valid, error, object}` wrapper every JSON response is sent in.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Outcome of a request, serialized as
/// `{"is_valid": bool, "error": string, "object": payload | null}`.
///
/// Success carries the payload and an empty `error`; failure carries the
/// message and a `null` object.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Ok(T),
    Err(String),
}

impl<T> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self::Ok(payload)
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self::Err(message.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 3)?;
        match self {
            Envelope::Ok(payload) => {
                state.serialize_field("is_valid", &true)?;
                state.serialize_field("error", "")?;
                state.serialize_field("object", payload)?;
            }
            Envelope::Err(message) => {
                state.serialize_field("is_valid", &false)?;
                state.serialize_field("error", message)?;
                state.serialize_field("object", &Option::<()>::None)?;
            }
        }
        state.end()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
