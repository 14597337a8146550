//! Error handling for the review API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use engstudy_core::ReviewError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Review(ReviewError::InvalidRating(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_rating")
            }
            ApiError::Review(ReviewError::StaleItem { .. }) => (StatusCode::CONFLICT, "stale_item"),
            ApiError::Review(ReviewError::EmptySession) => (StatusCode::CONFLICT, "empty_session"),
            ApiError::Review(ReviewError::ItemNotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Review(ReviewError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_error")
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
