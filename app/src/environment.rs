//! Environment for the todo reducer
//!
//! The reducer never performs I/O. It asks the environment for an effect
//! describing the call, and the effect's future maps BOTH outcomes of that
//! call into a settlement action. That mapping is the release-on-exit
//! discipline: a request cannot complete without producing the settlement
//! that clears its marker.

use crate::types::TodoAction;
use std::sync::Arc;
use todoflow_client::{NewTodo, TodoClient, TodoPatch};
use todoflow_core::effect::Effect;

/// Injected remote-service dependency for the todo reducer
pub trait TodoEnvironment: Clone + Send + Sync + 'static {
    /// Fetch the user's collection; settles as `TodosLoaded` or `LoadFailed`
    fn fetch_todos(&self, user_id: i64) -> Effect<TodoAction>;

    /// Create a todo; settles as `Created` or `CreateFailed`
    fn create_todo(&self, fields: NewTodo) -> Effect<TodoAction>;

    /// Patch a todo; settles as `Updated` or `UpdateFailed`
    fn update_todo(&self, id: i64, patch: TodoPatch) -> Effect<TodoAction>;

    /// Delete a todo; settles as `Deleted` or `DeleteFailed`
    fn delete_todo(&self, id: i64) -> Effect<TodoAction>;
}

/// Production environment that calls the real remote todo service
#[derive(Clone)]
pub struct ProductionTodoEnvironment {
    /// Remote service client
    client: Arc<TodoClient>,
}

impl ProductionTodoEnvironment {
    /// Create a production environment over a client
    #[must_use]
    pub fn new(client: TodoClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl TodoEnvironment for ProductionTodoEnvironment {
    fn fetch_todos(&self, user_id: i64) -> Effect<TodoAction> {
        let client = Arc::clone(&self.client);

        Effect::Future(Box::pin(async move {
            match client.get_todos(user_id).await {
                Ok(todos) => Some(TodoAction::TodosLoaded { todos }),
                Err(e) => {
                    tracing::warn!(error = %e, user_id, "initial fetch failed");
                    Some(TodoAction::LoadFailed)
                }
            }
        }))
    }

    fn create_todo(&self, fields: NewTodo) -> Effect<TodoAction> {
        let client = Arc::clone(&self.client);

        Effect::Future(Box::pin(async move {
            match client.add_todo(&fields).await {
                Ok(todo) => Some(TodoAction::Created { todo }),
                Err(e) => {
                    tracing::warn!(error = %e, "create failed");
                    Some(TodoAction::CreateFailed)
                }
            }
        }))
    }

    fn update_todo(&self, id: i64, patch: TodoPatch) -> Effect<TodoAction> {
        let client = Arc::clone(&self.client);

        Effect::Future(Box::pin(async move {
            match client.update_todo(id, &patch).await {
                Ok(todo) => Some(TodoAction::Updated { todo }),
                Err(e) => {
                    tracing::warn!(error = %e, id, "update failed");
                    Some(TodoAction::UpdateFailed { id })
                }
            }
        }))
    }

    fn delete_todo(&self, id: i64) -> Effect<TodoAction> {
        let client = Arc::clone(&self.client);

        Effect::Future(Box::pin(async move {
            match client.delete_todo(id).await {
                Ok(()) => Some(TodoAction::Deleted { id }),
                Err(e) => {
                    tracing::warn!(error = %e, id, "delete failed");
                    Some(TodoAction::DeleteFailed { id })
                }
            }
        }))
    }
}
