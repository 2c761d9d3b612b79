//! REST API crate for the to-do task manager
//!
//! This crate provides the HTTP surface over any [`todo_core::TaskStore`]
//! implementation:
//!
//! - `GET /tasks` - list tasks (open only by default, `?include_done=true`
//!   for everything)
//! - `POST /tasks` - create a task, responds 201 with the created record
//! - `GET /tasks/{id}` - fetch a single task
//! - `PUT /tasks/{id}` - overwrite description and done flag
//! - `DELETE /tasks/{id}` - delete and return the removed record
//! - `GET /health` - store connectivity probe
//!
//! Errors are rendered as `{"error": "<message>"}` with the status code
//! derived from the task error kind (404 not found, 400 validation,
//! 500 database).

pub mod error;
pub mod logging;
pub mod server;

pub use error::ApiError;
pub use server::{ApiServer, ApiState, CreateTaskRequest, ListQuery, UpdateTaskRequest};
