//! Synchronous API client for the todo service.
//!
//! # Overview
//! Builds [`HttpRequest`] values and parses [`HttpResponse`] values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the client fully deterministic and
//! testable without a running server.
//!
//! # Design
//! - [`TodoClient`] is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - Parse methods unwrap the server's `success` envelopes and translate
//!   404 and 400 answers into dedicated error variants.
//! - DTOs are defined independently from the server crate; the end-to-end
//!   integration test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, HealthResponse, Todo, TodoListResponse, UpdateTodo};
