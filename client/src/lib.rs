//! # Todoflow Client
//!
//! HTTP client for the remote todo collection resource.
//!
//! The remote service exposes standard collection-resource semantics:
//!
//! - `GET /todos?userId={id}` → array of todo records
//! - `POST /todos` → created record (id assigned by the server)
//! - `PATCH /todos/{id}` → updated record (server-authoritative, all fields)
//! - `DELETE /todos/{id}` → no content
//!
//! This layer is a thin request/response mapper. It performs no retries;
//! every failure is surfaced to the caller untouched as an [`ApiError`].
//!
//! ## Example
//!
//! ```no_run
//! use todoflow_client::{TodoClient, NewTodo};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TodoClient::new("https://mate.academy/students-api");
//!
//!     let todos = client.get_todos(1).await?;
//!     println!("{} todos", todos.len());
//!
//!     let created = client.add_todo(&NewTodo::new("buy milk", 1)).await?;
//!     println!("created id {}", created.id);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::TodoClient;
pub use error::ApiError;
pub use types::{NewTodo, Todo, TodoPatch};
