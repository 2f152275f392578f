//! Todo collection client implementation

use crate::{
    error::ApiError,
    types::{NewTodo, Todo, TodoPatch},
};
use reqwest::Client;

/// Client for the remote todo collection resource
///
/// A thin request/response mapper: four operations, one HTTP verb each, no
/// retries, no caching. Cloning is cheap (the inner `reqwest::Client` is an
/// `Arc` internally).
#[derive(Clone)]
pub struct TodoClient {
    client: Client,
    base_url: String,
}

impl TodoClient {
    /// Create a new client against the given service base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch all todos owned by a user
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on any network error, non-success
    /// status, or unparseable body.
    pub async fn get_todos(&self, user_id: i64) -> Result<Vec<Todo>, ApiError> {
        let response = self
            .client
            .get(format!("{}/todos?userId={user_id}", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::NotFound(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), user_id, "get_todos failed");
            return Err(ApiError::NotFound(format!("status {}", response.status())));
        }

        response
            .json::<Vec<Todo>>()
            .await
            .map_err(|e| ApiError::NotFound(e.to_string()))
    }

    /// Create a todo; the server assigns the id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::CreateFailed`] on any network error, non-success
    /// status, or unparseable body.
    pub async fn add_todo(&self, fields: &NewTodo) -> Result<Todo, ApiError> {
        let response = self
            .client
            .post(format!("{}/todos", self.base_url))
            .json(fields)
            .send()
            .await
            .map_err(|e| ApiError::CreateFailed(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "add_todo failed");
            return Err(ApiError::CreateFailed(format!(
                "status {}",
                response.status()
            )));
        }

        response
            .json::<Todo>()
            .await
            .map_err(|e| ApiError::CreateFailed(e.to_string()))
    }

    /// Patch a todo; only the provided fields change
    ///
    /// The server returns the full updated record and is authoritative for
    /// all fields, not just the patched ones.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UpdateFailed`] on any network error, non-success
    /// status, or unparseable body.
    pub async fn update_todo(&self, id: i64, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let response = self
            .client
            .patch(format!("{}/todos/{id}", self.base_url))
            .json(patch)
            .send()
            .await
            .map_err(|e| ApiError::UpdateFailed(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), id, "update_todo failed");
            return Err(ApiError::UpdateFailed(format!(
                "status {}",
                response.status()
            )));
        }

        response
            .json::<Todo>()
            .await
            .map_err(|e| ApiError::UpdateFailed(e.to_string()))
    }

    /// Delete a todo
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DeleteFailed`] on any network error or non-success
    /// status.
    pub async fn delete_todo(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/todos/{id}", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::DeleteFailed(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), id, "delete_todo failed");
            return Err(ApiError::DeleteFailed(format!(
                "status {}",
                response.status()
            )));
        }

        Ok(())
    }
}
