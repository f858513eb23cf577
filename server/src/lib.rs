//! HTTP todo service.
//!
//! # Overview
//! A minimal todo-list manager over HTTP/JSON: list, create, update, delete,
//! and bulk-clear short text items, each carrying a completion flag and a
//! creation timestamp. State lives in an in-memory [`store::TodoStore`]
//! constructed once at startup and injected into every handler; nothing is
//! persisted across restarts.
//!
//! # Design
//! - [`store`] owns the collection and the monotonic id generator.
//! - [`handlers`] validate input, apply store mutations, and shape the
//!   response envelopes; they are the only place validation lives.
//! - [`error::ApiError`] maps the three failure categories (validation,
//!   not-found, internal fault) to their fixed wire messages and statuses.
//! - All routes, collection and single-item alike, share one store
//!   instance through the router state.

pub mod error;
pub mod handlers;
pub mod store;
pub mod types;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

pub use error::ApiError;
pub use store::{SharedStore, Todo, TodoPatch, TodoStore};

/// Build the router around an injected store.
///
/// Tests construct their own store (seeded or empty) and drive the router
/// in-process; the binary goes through [`run`].
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .delete(handlers::delete_all_todos),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(store)
}

/// Serve the API on `listener` with the seed data present at process start.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let store = TodoStore::seeded().into_shared();
    axum::serve(listener, app(store)).await
}
