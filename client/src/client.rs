//! Stateless request builder and envelope parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! [`HttpRequest`] and a `parse_*` method that consumes an [`HttpResponse`],
//! unwrapping the server's `success` envelope. The caller executes the
//! actual round-trip in between, keeping the crate deterministic and free of
//! I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateTodo, ErrorResponse, HealthResponse, MessageResponse, Todo, TodoListResponse,
    TodoResponse, UpdateTodo,
};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // --- build ---

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, format!("{}/todos", self.base_url))
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, format!("{}/todos/{id}", self.base_url))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::json(
            HttpMethod::Post,
            format!("{}/todos", self.base_url),
            body,
        ))
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::json(
            HttpMethod::Put,
            format!("{}/todos/{id}", self.base_url),
            body,
        ))
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, format!("{}/todos/{id}", self.base_url))
    }

    pub fn build_delete_all_todos(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, format!("{}/todos", self.base_url))
    }

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, format!("{}/health", self.base_url))
    }

    // --- parse ---

    /// Unwrap the list envelope; `count` always equals `todos.len()` on the
    /// server, so the whole envelope is returned for callers that assert it.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<TodoListResponse, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode::<TodoResponse>(&response.body).map(|r| r.todo)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        decode::<TodoResponse>(&response.body).map(|r| r.todo)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode::<TodoResponse>(&response.body).map(|r| r.todo)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        decode::<MessageResponse>(&response.body).map(|_| ())
    }

    pub fn parse_delete_all_todos(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        decode::<MessageResponse>(&response.body).map(|_| ())
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<HealthResponse, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success statuses to the matching `ApiError` variant. A 400 body
/// carries the server's reason inside the error envelope; fall back to the
/// raw body if it does not parse.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        400 => {
            let reason = serde_json::from_str::<ErrorResponse>(&response.body)
                .map(|e| e.error)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::InvalidInput(reason))
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
