//! Error types for catalog-api

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404). Only the single-entity retrieve handlers
    /// produce this; every other failure surfaces as a 500.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Generic error (500)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": msg })),
            )
                .into_response(),
            ApiError::Other(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": {
                        "code": "INTERNAL_ERROR",
                        "message": err.to_string(),
                    }
                })),
            )
                .into_response(),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
