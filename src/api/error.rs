use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::RedlineError;

/// Error payload returned to the client.
///
/// Feature queries report `"error"`, pin operations report `"failure"`.
#[derive(Debug)]
pub enum ApiError {
    Query(String),
    Pin(String),
}

impl ApiError {
    pub fn query(message: impl Into<String>) -> Self {
        ApiError::Query(message.into())
    }

    pub fn pin(message: impl Into<String>) -> Self {
        ApiError::Pin(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (response_type, message) = match self {
            ApiError::Query(msg) => ("error", msg),
            ApiError::Pin(msg) => ("failure", msg),
        };
        tracing::warn!("Request failed: {}", message);

        Json(json!({
            "response_type": response_type,
            "error": message,
        }))
        .into_response()
    }
}

impl From<RedlineError> for ApiError {
    fn from(err: RedlineError) -> Self {
        ApiError::Query(err.to_string())
    }
}
