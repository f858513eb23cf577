//! Error currency of the request handlers.
//!
//! # Design
//! Three categories cover every failure the API can report: a fixed
//! validation message for bad create input, a fixed not-found message for
//! unknown ids, and a per-operation generic message for unexpected faults.
//! Internal causes are logged at the failure site and never serialized into
//! the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::types::ErrorResponse;

/// Failure outcome of a handler, rendered as the error envelope with the
/// matching HTTP status.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Create was called without a usable `text` field.
    #[error("Todo text is required")]
    TextRequired,

    /// The addressed id does not exist in the store.
    #[error("Todo not found")]
    NotFound,

    /// An unexpected fault while handling the request. `action` names the
    /// operation ("create todo", "fetch todos", ...); the cause is logged,
    /// not exposed.
    #[error("Failed to {action}")]
    Internal { action: &'static str },
}

impl ApiError {
    pub fn internal(action: &'static str) -> Self {
        Self::Internal { action }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::TextRequired => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
