//! # Todoflow Testing
//!
//! Testing utilities and helpers for the Todoflow architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: a fluent Given-When-Then harness for reducers
//! - [`MockTodoEnvironment`]: an in-memory stand-in for the remote todo
//!   service, with scripted failures and recorded calls
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_testing::{MockTodoEnvironment, ReducerTest, assertions};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(MockTodoEnvironment::new())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::Add)
//!     .then_state(|state| assert!(state.error.is_some()))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod mocks;
pub mod reducer_test;

// Re-export commonly used items
pub use mocks::{MockTodoEnvironment, RecordedCall};
pub use reducer_test::{ReducerTest, assertions};
