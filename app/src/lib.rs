//! # Todoflow App
//!
//! The todo list feature: state store, mutation workflows, and view filter.
//!
//! This crate keeps an in-memory todo collection consistent with a remote one
//! under concurrent, possibly-overlapping user-triggered mutations.
//!
//! ## Architecture
//!
//! - **State**: [`state::TodoState`] — the session's ordered collection plus
//!   transient mutation markers (in-flight ids, pending-create placeholder,
//!   error banner)
//! - **Actions**: [`types::TodoAction`] — user commands and the settlement
//!   actions their network effects produce
//! - **Reducer**: [`reducer::TodoReducer`] — the mutation workflows of the
//!   orchestrator (add, change, delete, clear-completed)
//! - **Environment**: [`environment::TodoEnvironment`] — the injected remote
//!   service dependency, returning effects rather than performing I/O
//! - **Filter**: [`filter::visible`] — pure derivation of the visible subset
//!
//! ## Consistency rules
//!
//! Every issued request settles exactly once: the environment maps both the
//! success and the failure of a call into a settlement action, and every
//! settlement handler clears its transient marker before doing anything
//! else. Overlapping mutations on the same id are permitted; the
//! later-settling response wins.

pub mod environment;
pub mod error;
pub mod filter;
pub mod reducer;
pub mod state;
pub mod types;

// Re-export main types for convenience
pub use environment::{ProductionTodoEnvironment, TodoEnvironment};
pub use error::TodoError;
pub use filter::{FilterMode, visible};
pub use reducer::TodoReducer;
pub use state::TodoState;
pub use types::TodoAction;
