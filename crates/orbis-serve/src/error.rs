//! Error types and response formatting.
//!
//! [`ApiError`] renders as JSON for `/api/v1`, [`PageError`] as an HTML error
//! page for the browser routes. Both log data-layer failures and hide their
//! detail from the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::render;

/// JSON API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request parameters.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Store, source, or sync failure.
    #[error("data error: {0}")]
    Data(orbis_core::Error),
}

impl From<orbis_core::Error> for ApiError {
    fn from(err: orbis_core::Error) -> Self {
        match err {
            orbis_core::Error::NotFound(what) => Self::NotFound(what),
            other => Self::Data(other),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone())),
            Self::Data(err) => {
                tracing::error!(error = %err, "data layer error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    Some("An internal error occurred".to_string()),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// HTML page error type.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No country with the requested name.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request was missing or malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Store, source, or sync failure.
    #[error("data error: {0}")]
    Data(orbis_core::Error),
}

impl From<orbis_core::Error> for PageError {
    fn from(err: orbis_core::Error) -> Self {
        match err {
            orbis_core::Error::NotFound(what) => Self::NotFound(what),
            other => Self::Data(other),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(name) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("{name} doesn't exist in the archive."),
            ),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg.clone()),
            Self::Data(err) => {
                tracing::error!(error = %err, "data layer error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "Something went wrong. Please try again later.".to_string(),
                )
            }
        };

        (status, render::error_page(title, &message)).into_response()
    }
}
