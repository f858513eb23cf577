//! In-memory todo store and id generator.
//!
//! # Design
//! `TodoStore` is the single owner of the live collection: every mutation
//! goes through it, and it is the only place ids are allocated. Ids are
//! strictly increasing for the lifetime of the store and are never reused
//! after individual deletions; only `clear` rewinds the generator, back to
//! its initial value.
//!
//! The store itself is synchronous and lock-free. The server wraps it in a
//! single `Arc<RwLock<_>>` (see [`SharedStore`]) so that the collection and
//! the id counter are guarded by one mutual-exclusion region.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// First id handed out by a fresh store, and the value `clear` rewinds to.
const INITIAL_ID: u64 = 1;

/// A single todo record.
///
/// `created_at` is stamped once at insertion and never mutated; it
/// serializes as an ISO-8601 string under the JSON key `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied by [`TodoStore::update_by_id`]. Fields left as
/// `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Shared handle to the store. One lock guards the whole collection plus
/// the id counter, so no two mutations can interleave.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Authoritative owner of the todo collection.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Empty store; the first insert receives id 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: INITIAL_ID,
        }
    }

    /// Store pre-populated with the three records present at process start.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let pipeline = store.insert("Set up Jenkins pipeline");
        store.insert("Configure GitHub webhooks");
        store.insert("Collect build logs for AIOps");
        store.update_by_id(
            pipeline.id,
            TodoPatch {
                completed: Some(true),
                ..TodoPatch::default()
            },
        );
        store
    }

    /// Wrap the store for use as router state.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// All todos in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Allocate the next id, trim `text`, stamp the current time, and append
    /// the new record. Callers have already checked that the trimmed text is
    /// non-empty.
    pub fn insert(&mut self, text: &str) -> Todo {
        let todo = Todo {
            id: self.next_id,
            text: text.trim().to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Apply `patch` to the matching record in place and return a copy of
    /// the result. Text patches are trimmed but, unlike create, an empty
    /// result is accepted (see the update handler).
    pub fn update_by_id(&mut self, id: u64, patch: TodoPatch) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        if let Some(text) = patch.text {
            todo.text = text.trim().to_string();
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Some(todo.clone())
    }

    /// Remove the matching record, reporting whether a removal occurred.
    /// The id generator is not rewound; deleted ids are never reused.
    pub fn delete_by_id(&mut self, id: u64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    /// Empty the collection and rewind the id generator to its initial
    /// value, as if the process had just started with no seed data.
    pub fn clear(&mut self) {
        self.todos.clear();
        self.next_id = INITIAL_ID;
    }
}
