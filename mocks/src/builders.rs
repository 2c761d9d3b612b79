//! Builder pattern implementations for easy test data construction
//!
//! Provides fluent builders for Task construction with sensible defaults.

use todo_core::{NewTask, Task, UpdateTask};

/// Builder for constructing Task instances in tests
pub struct TaskBuilder {
    task: Task,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            task: Task {
                id: 1,
                description: "a test task".to_string(),
                done: false,
            },
        }
    }

    /// Set task ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.task.id = id;
        self
    }

    /// Set task description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.task.description = description.into();
        self
    }

    /// Set completion flag
    pub fn with_done(mut self, done: bool) -> Self {
        self.task.done = done;
        self
    }

    /// Build the final Task
    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for constructing NewTask instances in tests
pub struct NewTaskBuilder {
    new_task: NewTask,
}

impl Default for NewTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewTaskBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            new_task: NewTask::new("a new test task"),
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.new_task.description = description.into();
        self
    }

    /// Set completion flag
    pub fn with_done(mut self, done: bool) -> Self {
        self.new_task.done = done;
        self
    }

    /// Build the final NewTask
    pub fn build(self) -> NewTask {
        self.new_task
    }
}

/// Builder for constructing UpdateTask instances in tests
pub struct UpdateTaskBuilder {
    update_task: UpdateTask,
}

impl Default for UpdateTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateTaskBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            update_task: UpdateTask::new("an updated test task", false),
        }
    }

    /// Set description update
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.update_task.description = description.into();
        self
    }

    /// Set completion flag update
    pub fn with_done(mut self, done: bool) -> Self {
        self.update_task.done = done;
        self
    }

    /// Build the final UpdateTask
    pub fn build(self) -> UpdateTask {
        self.update_task
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder_defaults() {
        let task = TaskBuilder::new().build();
        assert_eq!(task.id, 1);
        assert!(!task.done);
    }

    #[test]
    fn test_task_builder_overrides() {
        let task = TaskBuilder::new()
            .with_id(42)
            .with_description("custom")
            .with_done(true)
            .build();

        assert_eq!(task.id, 42);
        assert_eq!(task.description, "custom");
        assert!(task.done);
    }

    #[test]
    fn test_new_task_builder() {
        let new_task = NewTaskBuilder::new().with_description("fresh").build();
        assert_eq!(new_task.description, "fresh");
        assert!(!new_task.done);
    }

    #[test]
    fn test_update_task_builder() {
        let update = UpdateTaskBuilder::new()
            .with_description("changed")
            .with_done(true)
            .build();

        assert_eq!(update, UpdateTask::new("changed", true));
    }
}
