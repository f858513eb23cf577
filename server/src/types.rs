//! Request bodies and response envelopes for the todo API.
//!
//! # Design
//! Every response carries a `success` flag alongside its payload, and
//! mutating operations include a human-readable confirmation `message`.
//! `CreateTodoBody` keeps `text` as raw JSON so the create handler can tell
//! a missing field from a wrong-typed one and answer both with the same
//! validation error instead of a deserialization failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Todo;

/// Body of `POST /todos`.
#[derive(Debug, Deserialize)]
pub struct CreateTodoBody {
    /// Validated by the handler: must be a JSON string that is non-empty
    /// after trimming.
    #[serde(default)]
    pub text: Option<serde_json::Value>,
}

/// Body of `PUT /todos/{id}`. Omitted fields leave the stored value alone.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// `GET /todos` response.
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub success: bool,
    pub todos: Vec<Todo>,
    pub count: usize,
}

/// Single-todo response, with a confirmation message on mutations.
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub success: bool,
    pub todo: Todo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Payload-free confirmation for the delete operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Error envelope produced by `ApiError`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// `GET /health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_text_is_optional_raw_json() {
        let body: CreateTodoBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.text.is_none());

        let body: CreateTodoBody = serde_json::from_str(r#"{"text":"Buy milk"}"#).unwrap();
        assert_eq!(body.text.unwrap().as_str(), Some("Buy milk"));

        // Wrong-typed text still deserializes; the handler rejects it.
        let body: CreateTodoBody = serde_json::from_str(r#"{"text":42}"#).unwrap();
        assert!(body.text.unwrap().as_str().is_none());
    }

    #[test]
    fn update_body_fields_are_optional() {
        let body: UpdateTodoBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.text.is_none());
        assert!(body.completed.is_none());

        let body: UpdateTodoBody = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(body.text.is_none());
        assert_eq!(body.completed, Some(true));
    }

    #[test]
    fn todo_response_omits_absent_message() {
        let mut store = crate::store::TodoStore::new();
        let todo = store.insert("quiet");
        let json = serde_json::to_value(TodoResponse {
            success: true,
            todo,
            message: None,
        })
        .unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["success"], true);
    }
}
