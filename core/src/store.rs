use crate::{
    error::Result,
    models::{NewTask, Task, UpdateTask},
};
use async_trait::async_trait;

/// Store trait for task persistence and retrieval operations
///
/// This trait defines the interface for all task data operations.
/// Implementations must be thread-safe and support concurrent access.
/// Storage failures surface immediately as errors; there are no retries
/// and no caching at this layer.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a new task
    ///
    /// # Arguments
    /// * `task` - The new task data to insert
    ///
    /// # Returns
    /// * `Ok(Task)` - The persisted task with its store-assigned ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn insert(&self, task: NewTask) -> Result<Task>;

    /// Overwrite the description and completion flag of an existing task
    ///
    /// # Arguments
    /// * `id` - The task ID to update
    /// * `updates` - The full new state of the task
    ///
    /// # Returns
    /// * `Ok(Task)` - The updated task as re-read from storage
    /// * `Err(TaskError::NotFound)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn update(&self, id: i64, updates: UpdateTask) -> Result<Task>;

    /// Delete a task permanently
    ///
    /// # Arguments
    /// * `id` - The task ID to delete
    ///
    /// # Returns
    /// * `Ok(())` - The task existed and is gone
    /// * `Err(TaskError::NotFound)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn delete(&self, id: i64) -> Result<()>;

    /// Get a single task by its numeric ID
    ///
    /// # Arguments
    /// * `id` - The task ID to find
    ///
    /// # Returns
    /// * `Ok(Task)` - The task if found
    /// * `Err(TaskError::NotFound)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn select(&self, id: i64) -> Result<Task>;

    /// List tasks in storage order
    ///
    /// # Arguments
    /// * `include_done` - When false, only tasks not yet done are returned;
    ///   when true, every task is returned
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - The matching tasks (may be empty)
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn select_all(&self, include_done: bool) -> Result<Vec<Task>>;

    /// Mark a task as done, leaving its description untouched
    ///
    /// # Arguments
    /// * `id` - The task ID to mark
    ///
    /// # Returns
    /// * `Ok(Task)` - The task with `done` set to true
    /// * `Err(TaskError::NotFound)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn check(&self, id: i64) -> Result<Task>;

    /// Get store health status for monitoring
    ///
    /// # Returns
    /// * `Ok(())` - Store is healthy and connected
    /// * `Err(TaskError::Database)` - Store is unhealthy
    async fn health_check(&self) -> Result<()>;
}
