//! The Todo State Store
//!
//! In-memory ordered collection of todo records for the current session,
//! plus the transient markers mutation workflows need: the set of ids with
//! an outstanding request, the single pending-create placeholder, and the
//! error banner.

use crate::error::TodoError;
use crate::filter::{FilterMode, visible};
use std::collections::HashSet;
use todoflow_client::{NewTodo, Todo};

/// State of the todo list for one session
///
/// `items` holds server-list order with newly created items appended, and is
/// unique by id: [`TodoState::upsert`] replaces in place or appends, so the
/// collection can never hold two records with the same id.
///
/// `in_flight` and `pending_create` are transient, scoped to the lifetime of
/// one mutation. An id leaves `in_flight` exactly when its request settles,
/// success or failure.
#[derive(Clone, Debug, Default)]
pub struct TodoState {
    /// Ordered todo collection, unique by id
    pub items: Vec<Todo>,
    /// Placeholder for the one create request in flight, if any
    pub pending_create: Option<NewTodo>,
    /// Ids currently subject to an update or delete request
    pub in_flight: HashSet<i64>,
    /// The dismissible error banner; `None` means nothing shown
    pub error: Option<TodoError>,
    /// Text of the new-todo input field
    pub draft_title: String,
    /// Current view filter
    pub filter: FilterMode,
    /// Owner of the session's todos, absent before authentication
    pub user_id: Option<i64>,
}

impl TodoState {
    /// Creates a new empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-set `items` after the initial fetch
    ///
    /// Full overwrite, no merge logic.
    pub fn replace_all(&mut self, items: Vec<Todo>) {
        self.items = items;
    }

    /// Replace the record with `todo.id` in place, or append
    ///
    /// Replacing preserves position; appending puts created items at the
    /// end. Either way uniqueness by id is maintained.
    pub fn upsert(&mut self, todo: Todo) {
        if let Some(existing) = self.items.iter_mut().find(|t| t.id == todo.id) {
            *existing = todo;
        } else {
            self.items.push(todo);
        }
    }

    /// Remove the record with the matching id, if present
    ///
    /// Idempotent: removing an absent id is a no-op.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|t| t.id != id);
    }

    /// Mark an id as having an outstanding request
    pub fn mark_in_flight(&mut self, id: i64) {
        self.in_flight.insert(id);
    }

    /// Clear the outstanding-request marker for an id
    ///
    /// Called from every settlement arm, success or failure.
    pub fn clear_in_flight(&mut self, id: i64) {
        self.in_flight.remove(&id);
    }

    /// Set or clear the pending-create placeholder
    pub fn set_pending_create(&mut self, pending: Option<NewTodo>) {
        self.pending_create = pending;
    }

    /// Whether a row should show its busy indicator
    #[must_use]
    pub fn is_busy(&self, id: i64) -> bool {
        self.in_flight.contains(&id)
    }

    /// Show an error in the banner, overwriting any earlier one
    pub fn report(&mut self, error: TodoError) {
        self.error = Some(error);
    }

    /// Dismiss the error banner
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// The visible subset of `items` under the current filter
    #[must_use]
    pub fn visible(&self) -> Vec<Todo> {
        visible(&self.items, self.filter)
    }

    /// Number of todos still to do (the footer's "items left")
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Ids of every completed todo, in collection order
    #[must_use]
    pub fn completed_ids(&self) -> Vec<i64> {
        self.items
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id)
            .collect()
    }
}
