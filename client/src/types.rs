//! Wire DTOs for the todo API.
//!
//! # Design
//! Defined independently from the server crate on purpose: the client
//! mirrors the published JSON contract, and the end-to-end integration test
//! catches any drift between the two. `created_at` stays an opaque
//! ISO-8601 string here; the client has no reason to do date arithmetic.

use serde::{Deserialize, Serialize};

/// A single todo item as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

/// Payload for creating a todo. The server trims the text and rejects it if
/// the trimmed result is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Payload for updating a todo. Omitted fields are left unchanged by the
/// server, so `None` fields are not serialized at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Envelope of `GET /todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoListResponse {
    pub success: bool,
    pub todos: Vec<Todo>,
    pub count: usize,
}

/// Envelope of the single-todo operations.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoResponse {
    pub success: bool,
    pub todo: Todo,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope of the delete confirmations.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Envelope of error responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Envelope of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}
