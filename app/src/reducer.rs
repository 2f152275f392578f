//! Mutation workflows for the todo list
//!
//! Each user command validates against current state, records its transient
//! marker, and returns the network effect for its request. Each settlement
//! clears that marker first, then applies the outcome. Because both arms of
//! every request settle through here, no failure path can leave a marker
//! behind or local state half-updated.

use crate::environment::TodoEnvironment;
use crate::error::TodoError;
use crate::state::TodoState;
use crate::types::TodoAction;
use todoflow_client::NewTodo;
use todoflow_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the todo feature
///
/// Generic over the environment so the same workflows run against the real
/// remote service or a mock.
#[derive(Clone, Debug)]
pub struct TodoReducer<E> {
    _phantom: std::marker::PhantomData<E>,
}

impl<E> TodoReducer<E> {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<E> Default for TodoReducer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Reducer for TodoReducer<E>
where
    E: TodoEnvironment,
{
    type State = TodoState;
    type Action = TodoAction;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Session ==========
            TodoAction::SessionStarted { user_id } => {
                state.user_id = Some(user_id);
                smallvec![env.fetch_todos(user_id)]
            }

            TodoAction::TodosLoaded { todos } => {
                state.replace_all(todos);
                SmallVec::new()
            }

            TodoAction::LoadFailed => {
                state.report(TodoError::NotFound);
                SmallVec::new()
            }

            // ========== Add ==========
            TodoAction::DraftChanged { title } => {
                state.draft_title = title;
                SmallVec::new()
            }

            TodoAction::Add => {
                let title = state.draft_title.trim();
                if title.is_empty() {
                    state.report(TodoError::EmptyTitle);
                    return SmallVec::new();
                }

                let Some(user_id) = state.user_id else {
                    state.report(TodoError::UserNotFound);
                    return SmallVec::new();
                };

                let fields = NewTodo::new(title, user_id);
                state.set_pending_create(Some(fields.clone()));
                smallvec![env.create_todo(fields)]
            }

            TodoAction::Created { todo } => {
                state.set_pending_create(None);
                state.upsert(todo);
                state.draft_title.clear();
                SmallVec::new()
            }

            TodoAction::CreateFailed => {
                state.set_pending_create(None);
                state.report(TodoError::CreateFailed);
                SmallVec::new()
            }

            // ========== Rename / Toggle ==========
            TodoAction::Change { id, patch } => {
                state.mark_in_flight(id);
                smallvec![env.update_todo(id, patch)]
            }

            TodoAction::Updated { todo } => {
                state.clear_in_flight(todo.id);
                // The server is authoritative for all fields, not just the
                // patched ones
                state.upsert(todo);
                SmallVec::new()
            }

            TodoAction::UpdateFailed { id } => {
                state.clear_in_flight(id);
                state.report(TodoError::UpdateFailed);
                SmallVec::new()
            }

            // ========== Delete ==========
            TodoAction::Delete { id } => {
                state.mark_in_flight(id);
                smallvec![env.delete_todo(id)]
            }

            TodoAction::Deleted { id } => {
                state.clear_in_flight(id);
                state.remove(id);
                SmallVec::new()
            }

            TodoAction::DeleteFailed { id } => {
                state.clear_in_flight(id);
                state.report(TodoError::DeleteFailed);
                SmallVec::new()
            }

            // ========== Clear completed ==========
            TodoAction::ClearCompleted => {
                let ids = state.completed_ids();
                if ids.is_empty() {
                    return SmallVec::new();
                }

                // Independent fan-out: one delete per completed item, each
                // with its own marker and its own failure handling
                let mut deletes = Vec::with_capacity(ids.len());
                for id in ids {
                    state.mark_in_flight(id);
                    deletes.push(env.delete_todo(id));
                }
                smallvec![Effect::Parallel(deletes)]
            }

            // ========== View ==========
            TodoAction::FilterChanged { mode } => {
                state.filter = mode;
                SmallVec::new()
            }

            TodoAction::ErrorDismissed => {
                state.dismiss_error();
                SmallVec::new()
            }
        }
    }
}
