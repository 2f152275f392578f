//! Wire types for the remote todo collection

use serde::{Deserialize, Serialize};

/// A todo record as stored by the remote service
///
/// The id is assigned by the server on creation and is unique within the
/// collection. The owner (`user_id`) never changes once the record exists.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned identifier
    pub id: i64,
    /// Owning user, immutable after creation
    pub user_id: i64,
    /// Human-readable task text
    pub title: String,
    /// Completion flag
    pub completed: bool,
}

/// Fields for creating a todo (everything but the server-assigned id)
///
/// Also serves as the pending-create placeholder: the provisional row shown
/// before the server confirms a create request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    /// Human-readable task text
    pub title: String,
    /// Owning user
    pub user_id: i64,
    /// Completion flag, false for fresh todos
    pub completed: bool,
}

impl NewTodo {
    /// Create the payload for a fresh, uncompleted todo
    #[must_use]
    pub fn new(title: impl Into<String>, user_id: i64) -> Self {
        Self {
            title: title.into(),
            user_id,
            completed: false,
        }
    }
}

/// Partial-patch body for updating a todo
///
/// Only the fields present are sent; the server leaves absent fields
/// unchanged and returns the full updated record.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    /// New title, if renaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New completion flag, if toggling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that renames a todo
    #[must_use]
    pub fn rename(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    /// Patch that sets the completion flag
    #[must_use]
    pub const fn set_completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}
