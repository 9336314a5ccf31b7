use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with. The wire mapping is deliberately
/// coarse: validation failures share one generic 400 body regardless of
/// cause, and storage faults surface as an opaque 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input")]
    Validation,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid input"})),
            )
                .into_response(),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"error": "Rate limit exceeded"})),
            )
                .into_response(),
            ApiError::Storage(e) => {
                error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}
