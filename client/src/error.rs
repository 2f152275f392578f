//! Error types for the todo collection client

use thiserror::Error;

/// Errors that can occur when talking to the remote todo service
///
/// Each variant wraps any network or non-success response from the
/// corresponding call, with no further distinction of sub-causes. The detail
/// string exists for logs; callers map variants to user-facing messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The collection for the requested user could not be fetched
    #[error("todos not found: {0}")]
    NotFound(String),

    /// A create request failed
    #[error("create failed: {0}")]
    CreateFailed(String),

    /// An update (partial patch) request failed
    #[error("update failed: {0}")]
    UpdateFailed(String),

    /// A delete request failed
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
