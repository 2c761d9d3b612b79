//! Database crate for the to-do task manager
//!
//! This crate provides the SQLite implementation of the TaskStore trait,
//! offering task persistence with connection pooling and embedded schema
//! migrations.
//!
//! # Features
//!
//! - SQLite database support with WAL mode for file databases
//! - Database migrations applied automatically on startup
//! - Connection pooling via sqlx
//! - Error mapping into the shared TaskError taxonomy
//!
//! # Usage
//!
//! ```rust
//! use database::SqliteTaskStore;
//! use todo_core::store::TaskStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create store (in-memory for testing)
//!     let store = SqliteTaskStore::new(":memory:").await?;
//!
//!     // Run migrations
//!     store.migrate().await?;
//!
//!     // Store is ready to use
//!     store.health_check().await?;
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTaskStore;

// Re-export commonly used types from todo-core for convenience
pub use todo_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, UpdateTask},
    store::TaskStore,
};
