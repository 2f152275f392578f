//! Mock implementations of environment traits
//!
//! [`MockTodoEnvironment`] stands in for the remote todo service: an
//! in-memory collection with server-assigned ids, scripted failures, and a
//! record of every call issued. Tests use the call record to assert that a
//! rejected command never reached the network.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use todoflow_app::environment::TodoEnvironment;
use todoflow_app::types::TodoAction;
use todoflow_client::{NewTodo, Todo, TodoPatch};
use todoflow_core::effect::Effect;

/// One request issued against the mock service
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedCall {
    /// `GET /todos?userId={user_id}`
    Fetch {
        /// Requested owner
        user_id: i64,
    },
    /// `POST /todos`
    Create {
        /// Create payload
        fields: NewTodo,
    },
    /// `PATCH /todos/{id}`
    Update {
        /// Target id
        id: i64,
        /// Patch body
        patch: TodoPatch,
    },
    /// `DELETE /todos/{id}`
    Delete {
        /// Target id
        id: i64,
    },
}

/// Shared mutable mock-server table
#[derive(Debug, Default)]
struct MockServer {
    todos: Vec<Todo>,
    next_id: i64,
    fail_fetch: bool,
    fail_create: bool,
    fail_update: HashSet<i64>,
    fail_delete: HashSet<i64>,
    calls: Vec<RecordedCall>,
}

/// In-memory stand-in for the remote todo service
///
/// Cloning shares the underlying table, so the environment handed to a
/// store and the one kept by the test observe the same state.
#[derive(Clone, Debug)]
pub struct MockTodoEnvironment {
    server: Arc<Mutex<MockServer>>,
}

impl Default for MockTodoEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTodoEnvironment {
    /// Create an empty mock service
    #[must_use]
    pub fn new() -> Self {
        Self {
            server: Arc::new(Mutex::new(MockServer {
                next_id: 1,
                ..MockServer::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockServer> {
        self.server.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed the server-side collection
    #[must_use]
    pub fn with_todos(self, todos: Vec<Todo>) -> Self {
        {
            let mut server = self.lock();
            server.next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            server.todos = todos;
        }
        self
    }

    /// Make the next (and every) fetch fail
    pub fn fail_fetch(&self) {
        self.lock().fail_fetch = true;
    }

    /// Make every create fail
    pub fn fail_create(&self) {
        self.lock().fail_create = true;
    }

    /// Make updates of the given id fail
    pub fn fail_update_of(&self, id: i64) {
        self.lock().fail_update.insert(id);
    }

    /// Make deletes of the given id fail
    pub fn fail_delete_of(&self, id: i64) {
        self.lock().fail_delete.insert(id);
    }

    /// Every call issued so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Current server-side collection
    #[must_use]
    pub fn server_todos(&self) -> Vec<Todo> {
        self.lock().todos.clone()
    }
}

impl TodoEnvironment for MockTodoEnvironment {
    fn fetch_todos(&self, user_id: i64) -> Effect<TodoAction> {
        let env = self.clone();

        Effect::Future(Box::pin(async move {
            let mut server = env.lock();
            server.calls.push(RecordedCall::Fetch { user_id });

            if server.fail_fetch {
                return Some(TodoAction::LoadFailed);
            }

            let todos = server
                .todos
                .iter()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect();
            Some(TodoAction::TodosLoaded { todos })
        }))
    }

    fn create_todo(&self, fields: NewTodo) -> Effect<TodoAction> {
        let env = self.clone();

        Effect::Future(Box::pin(async move {
            let mut server = env.lock();
            server.calls.push(RecordedCall::Create {
                fields: fields.clone(),
            });

            if server.fail_create {
                return Some(TodoAction::CreateFailed);
            }

            let todo = Todo {
                id: server.next_id,
                user_id: fields.user_id,
                title: fields.title,
                completed: fields.completed,
            };
            server.next_id += 1;
            server.todos.push(todo.clone());
            Some(TodoAction::Created { todo })
        }))
    }

    fn update_todo(&self, id: i64, patch: TodoPatch) -> Effect<TodoAction> {
        let env = self.clone();

        Effect::Future(Box::pin(async move {
            let mut server = env.lock();
            server.calls.push(RecordedCall::Update {
                id,
                patch: patch.clone(),
            });

            if server.fail_update.contains(&id) {
                return Some(TodoAction::UpdateFailed { id });
            }

            let Some(todo) = server.todos.iter_mut().find(|t| t.id == id) else {
                return Some(TodoAction::UpdateFailed { id });
            };

            if let Some(title) = patch.title {
                todo.title = title;
            }
            if let Some(completed) = patch.completed {
                todo.completed = completed;
            }
            let todo = todo.clone();
            Some(TodoAction::Updated { todo })
        }))
    }

    fn delete_todo(&self, id: i64) -> Effect<TodoAction> {
        let env = self.clone();

        Effect::Future(Box::pin(async move {
            let mut server = env.lock();
            server.calls.push(RecordedCall::Delete { id });

            if server.fail_delete.contains(&id) {
                return Some(TodoAction::DeleteFailed { id });
            }

            let before = server.todos.len();
            server.todos.retain(|t| t.id != id);
            if server.todos.len() == before {
                return Some(TodoAction::DeleteFailed { id });
            }
            Some(TodoAction::Deleted { id })
        }))
    }
}
