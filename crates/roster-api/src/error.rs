//! Error types for the student API.
//!
//! [`ApiError`] unifies all request failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Malformed input and missing students answer with a short plain-text
//! message; validation failures answer with the JSON list of
//! field-level errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_types::{StudentId, ValidationError};

/// Errors that can occur while handling a student request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `{id}` path segment is not an integer.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// The request body is not a JSON student.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The student failed one or more validation rules.
    #[error("validation failed: {}", .0.len())]
    Validation(Vec<ValidationError>),

    /// No student has the requested id.
    #[error("student {0} not found")]
    NotFound(StudentId),

    /// The store has handed out every id up to `i64::MAX`.
    #[error("student ids exhausted")]
    IdsExhausted,
}

impl ApiError {
    /// HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId(_) | Self::InvalidBody(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::InvalidId(_) => (status, "Invalid ID").into_response(),
            Self::InvalidBody(_) => (status, "Invalid request body").into_response(),
            Self::Validation(errors) => (status, Json(errors)).into_response(),
            Self::NotFound(_) => (status, "Student not found").into_response(),
            Self::IdsExhausted => (status, "Student ids exhausted").into_response(),
        }
    }
}
