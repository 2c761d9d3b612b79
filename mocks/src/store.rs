//! Mock implementation of the TaskStore trait
//!
//! Provides a thread-safe mock store with:
//! - Error injection capabilities
//! - Call tracking for verification
//! - Realistic behavior simulation

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use todo_core::{NewTask, Result, Task, TaskError, TaskStore, UpdateTask};

/// Mock implementation of TaskStore for testing
///
/// Features:
/// - Thread-safe concurrent access
/// - Error injection for failure testing
/// - Call history tracking for verification
pub struct MockTaskStore {
    tasks: Arc<Mutex<HashMap<i64, Task>>>,
    next_id: Arc<AtomicI64>,
    error_injection: Arc<Mutex<Option<TaskError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTaskStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock store with pre-populated tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut task_map = HashMap::new();
        let mut max_id = 0;

        for task in tasks {
            if task.id > max_id {
                max_id = task.id;
            }
            task_map.insert(task.id, task);
        }

        Self {
            tasks: Arc::new(Mutex::new(task_map)),
            next_id: Arc::new(AtomicI64::new(max_id + 1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inject an error for the next operation
    pub fn inject_error(&self, error: TaskError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Clear error injection
    pub fn clear_error(&self) {
        *self.error_injection.lock() = None;
    }

    /// Get history of called methods
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Clear call history
    pub fn clear_history(&self) {
        self.call_history.lock().clear();
    }

    /// Assert a method was called
    pub fn assert_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            history.iter().any(|call| call.contains(method)),
            "Method '{}' was not called. Call history: {:?}",
            method,
            *history
        );
    }

    /// Check if an error should be injected, consuming it if so
    fn check_error_injection(&self) -> Result<()> {
        let mut error_opt = self.error_injection.lock();
        if let Some(error) = error_opt.take() {
            return Err(error);
        }
        Ok(())
    }

    /// Record a method call with parameters in history
    fn record_call_with_params(&self, method: &str, params: &str) {
        self.call_history.lock().push(format!("{method}({params})"));
    }
}

#[async_trait]
impl TaskStore for MockTaskStore {
    async fn insert(&self, task: NewTask) -> Result<Task> {
        self.record_call_with_params("insert", &format!("description={}", task.description));

        self.check_error_injection()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let new_task = Task {
            id,
            description: task.description,
            done: task.done,
        };

        self.tasks.lock().insert(id, new_task.clone());

        Ok(new_task)
    }

    async fn update(&self, id: i64, updates: UpdateTask) -> Result<Task> {
        self.record_call_with_params("update", &format!("id={id}"));

        self.check_error_injection()?;

        let mut tasks = self.tasks.lock();
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| TaskError::not_found_id(id))?;

        task.description = updates.description;
        task.done = updates.done;

        Ok(task.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.record_call_with_params("delete", &format!("id={id}"));

        self.check_error_injection()?;

        let mut tasks = self.tasks.lock();
        tasks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| TaskError::not_found_id(id))
    }

    async fn select(&self, id: i64) -> Result<Task> {
        self.record_call_with_params("select", &format!("id={id}"));

        self.check_error_injection()?;

        let tasks = self.tasks.lock();
        tasks
            .get(&id)
            .cloned()
            .ok_or_else(|| TaskError::not_found_id(id))
    }

    async fn select_all(&self, include_done: bool) -> Result<Vec<Task>> {
        self.record_call_with_params("select_all", &format!("include_done={include_done}"));

        self.check_error_injection()?;

        let tasks = self.tasks.lock();
        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| include_done || !t.done)
            .cloned()
            .collect();

        // ID order matches the storage order of the SQLite implementation
        result.sort_by_key(|t| t.id);

        Ok(result)
    }

    async fn check(&self, id: i64) -> Result<Task> {
        self.record_call_with_params("check", &format!("id={id}"));

        self.check_error_injection()?;

        let mut tasks = self.tasks.lock();
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| TaskError::not_found_id(id))?;

        task.done = true;

        Ok(task.clone())
    }

    async fn health_check(&self) -> Result<()> {
        self.record_call_with_params("health_check", "");

        self.check_error_injection()
    }
}
