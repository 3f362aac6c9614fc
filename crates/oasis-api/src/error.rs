//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every error body has a single `detail` field: the list of validation
//! entries for 422 responses, a message string otherwise. Internal error
//! details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use oasis_core::{ErrorEntry, ValidationErrors};
use oasis_paging::CursorError;

/// The `detail` payload of an error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Detail {
    /// Field-level validation failures, in the order they were found.
    Errors(Vec<ErrorEntry>),
    /// A single human-readable message.
    Message(String),
}

/// Structured JSON error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: Detail,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Payload or parameters failed validation (422).
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Request could not be interpreted at all (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn into_body(self) -> ErrorBody {
        let detail = match self {
            Self::Validation(errors) => Detail::Errors(errors.into_entries()),
            Self::BadRequest(message) | Self::NotFound(message) => Detail::Message(message),
            Self::Internal(_) => Detail::Message("An internal error occurred".to_string()),
        };
        ErrorBody { detail }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        } else {
            tracing::debug!(code, error = %self, "request rejected");
        }

        (status, Json(self.into_body())).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<ErrorEntry> for AppError {
    fn from(entry: ErrorEntry) -> Self {
        Self::Validation(entry.into())
    }
}

impl From<CursorError> for AppError {
    fn from(err: CursorError) -> Self {
        match err {
            CursorError::InvalidCursor => Self::BadRequest(err.to_string()),
            CursorError::CursorNotFound => Self::NotFound(err.to_string()),
            CursorError::Encoding(_) => Self::Internal(err.to_string()),
        }
    }
}
