//! User-facing error taxonomy
//!
//! One variant per failure the view can show. Workflows catch their own
//! failures and convert them into exactly one of these; none propagate as
//! unhandled faults.

use thiserror::Error;

/// Errors surfaced to the user in the dismissible banner
///
/// Only one is shown at a time; a later failure overwrites an earlier
/// undismissed one. The `Display` text is the banner message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TodoError {
    /// An add was submitted with an empty title; never reaches the network
    #[error("Title is required")]
    EmptyTitle,

    /// An add was submitted without an authenticated session
    #[error("User not found")]
    UserNotFound,

    /// The initial list fetch failed
    #[error("Todos not found")]
    NotFound,

    /// A create request failed
    #[error("Unable to add todo")]
    CreateFailed,

    /// An update request failed
    #[error("Unable to update a todo")]
    UpdateFailed,

    /// A delete request failed
    #[error("Unable to delete a todo")]
    DeleteFailed,
}
