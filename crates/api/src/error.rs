use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use xrplace_core::ValidationError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain [`ValidationError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request input failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A bad request with a human-readable message (e.g. malformed JSON).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                let body = json!({
                    "error": "Request validation failed",
                    "code": "VALIDATION_ERROR",
                    "details": err.errors,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            AppError::BadRequest(msg) => {
                let body = json!({
                    "error": msg,
                    "code": "BAD_REQUEST",
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
        }
    }
}
