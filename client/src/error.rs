//! Client-side error taxonomy.
//!
//! # Design
//! `NotFound` and `InvalidInput` get dedicated variants because they are
//! first-class outcomes of the API contract (404 on unknown ids, 400 with a
//! fixed reason on bad create input). Every other non-2xx status lands in
//! `HttpError` with the raw status and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 404: the addressed todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server rejected the input with 400; carries the server's reason.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Any other non-success status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body did not match the expected envelope.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
