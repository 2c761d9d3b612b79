//! To-Do Core Library
//!
//! This crate provides the foundational domain models, error types, and trait
//! interfaces for the to-do task manager. All other crates depend on the
//! types and interfaces defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain models (Task, NewTask, UpdateTask)
//! - [`error`] - Error types and result handling
//! - [`store`] - Store trait for data persistence
//! - [`validation`] - Boundary validation utilities
//!
//! # Example
//!
//! ```rust
//! use todo_core::{models::NewTask, validation::TaskValidator};
//!
//! let new_task = NewTask::new("buy milk");
//!
//! // Validate the task before handing it to a store
//! TaskValidator::validate_new_task(&new_task).unwrap();
//! ```

pub mod error;
pub mod models;
pub mod store;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TaskError};
pub use models::{NewTask, Task, UpdateTask};
pub use store::TaskStore;
pub use validation::TaskValidator;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
