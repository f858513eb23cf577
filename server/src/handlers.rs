//! Request handlers: validation, store mutation, response shaping.
//!
//! # Design
//! Handlers are stateless; everything they touch lives in the injected
//! [`SharedStore`]. Validation happens here and nowhere else. A body that
//! cannot be read as JSON at all is not a validation failure but an
//! unexpected fault: the rejection is logged and the caller gets the
//! operation's generic 500 message.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::store::{SharedStore, TodoPatch};
use crate::types::{
    CreateTodoBody, HealthResponse, MessageResponse, TodoListResponse, TodoResponse,
    UpdateTodoBody,
};

/// `GET /todos`
pub async fn list_todos(State(store): State<SharedStore>) -> Json<TodoListResponse> {
    let store = store.read().await;
    let todos = store.list().to_vec();
    Json(TodoListResponse {
        success: true,
        count: todos.len(),
        todos,
    })
}

/// `POST /todos`
pub async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateTodoBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        error!(%rejection, "could not read create body");
        ApiError::internal("create todo")
    })?;

    // Reject a missing field, a non-string value, and blank text alike.
    let text = match body.text.as_ref().and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(ApiError::TextRequired),
    };

    let todo = store.write().await.insert(text);
    debug!(id = todo.id, "todo created");

    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            success: true,
            todo,
            message: Some("Todo created successfully"),
        }),
    ))
}

/// `DELETE /todos`
pub async fn delete_all_todos(State(store): State<SharedStore>) -> Json<MessageResponse> {
    store.write().await.clear();
    debug!("all todos deleted, id counter reset");
    Json(MessageResponse {
        success: true,
        message: "All todos deleted",
    })
}

/// `GET /todos/{id}`
pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<TodoResponse>, ApiError> {
    let store = store.read().await;
    let todo = store.find_by_id(id).cloned().ok_or(ApiError::NotFound)?;
    Ok(Json(TodoResponse {
        success: true,
        todo,
        message: None,
    }))
}

/// `PUT /todos/{id}`
pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
    payload: Result<Json<UpdateTodoBody>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        error!(%rejection, "could not read update body");
        ApiError::internal("update todo")
    })?;

    let patch = TodoPatch {
        text: body.text,
        completed: body.completed,
    };
    let todo = store
        .write()
        .await
        .update_by_id(id, patch)
        .ok_or(ApiError::NotFound)?;
    debug!(id, "todo updated");

    Ok(Json(TodoResponse {
        success: true,
        todo,
        message: Some("Todo updated successfully"),
    }))
}

/// `DELETE /todos/{id}`
pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !store.write().await.delete_by_id(id) {
        return Err(ApiError::NotFound);
    }
    debug!(id, "todo deleted");
    Ok(Json(MessageResponse {
        success: true,
        message: "Todo deleted successfully",
    }))
}

/// `GET /health`. Liveness probe; independent of the store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}
