//! Actions for the todo feature
//!
//! The action enum combines commands (user or session input) and settlements
//! (the single outcome of a network effect). Every command that issues a
//! request has exactly two settlement arms, one for each outcome, so a
//! request can never settle zero or two times.

use crate::filter::FilterMode;
use todoflow_client::{Todo, TodoPatch};

/// All inputs to the todo reducer
#[derive(Clone, Debug, PartialEq)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: the user authenticated; fetch their collection
    SessionStarted {
        /// Owner of the session's todos
        user_id: i64,
    },

    /// Command: the new-todo input field changed
    DraftChanged {
        /// Current text of the input field
        title: String,
    },

    /// Command: submit the draft title as a new todo
    Add,

    /// Command: rename or toggle a todo (single combined partial patch)
    Change {
        /// Target todo
        id: i64,
        /// Only the changed fields
        patch: TodoPatch,
    },

    /// Command: delete a todo
    Delete {
        /// Target todo
        id: i64,
    },

    /// Command: delete every completed todo, each independently
    ClearCompleted,

    /// Command: switch the view filter
    FilterChanged {
        /// New filter mode
        mode: FilterMode,
    },

    /// Command: dismiss the error banner
    ErrorDismissed,

    // ========== Settlements ==========
    /// Settlement: the initial fetch succeeded
    TodosLoaded {
        /// Full server collection, replaces local items
        todos: Vec<Todo>,
    },

    /// Settlement: the initial fetch failed
    LoadFailed,

    /// Settlement: a create succeeded; the server assigned the id
    Created {
        /// The confirmed record
        todo: Todo,
    },

    /// Settlement: a create failed; the placeholder is discarded
    CreateFailed,

    /// Settlement: an update succeeded
    Updated {
        /// Server-authoritative record, all fields
        todo: Todo,
    },

    /// Settlement: an update failed; local state stays at last-known-good
    UpdateFailed {
        /// Target todo
        id: i64,
    },

    /// Settlement: a delete succeeded
    Deleted {
        /// Removed todo
        id: i64,
    },

    /// Settlement: a delete failed; the record stays in place
    DeleteFailed {
        /// Target todo
        id: i64,
    },
}
