use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::validation::ValidationError;

/// Error type for HTTP handlers.
///
/// Every variant is the caller's fault and maps to `400` with a
/// `{kind, field, message}` body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input parsed but failed range validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body was not valid JSON for the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Validation(err) => {
                tracing::debug!(field = %err.field, "Rejected input: {}", err.message);
                json!({
                    "kind": err.kind.as_str(),
                    "field": err.field,
                    "message": err.message,
                })
            }
            ApiError::InvalidBody(msg) => json!({
                "kind": "invalid_body",
                "field": null,
                "message": msg,
            }),
        };

        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}
