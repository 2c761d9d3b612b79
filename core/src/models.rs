use serde::{Deserialize, Serialize};

/// Core task representation.
///
/// A task is the sole entity of the system: a line of text with a unique
/// numeric identifier and a completion flag. IDs are assigned by the store
/// on insert and never reused.
///
/// # Examples
///
/// ```rust
/// use todo_core::models::Task;
///
/// let task = Task {
///     id: 1,
///     description: "buy milk".to_string(),
///     done: false,
/// };
///
/// assert!(!task.done);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Auto-increment primary key
    pub id: i64,
    /// The task text
    pub description: String,
    /// Completion flag
    pub done: bool,
}

/// Data transfer object for creating new tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    /// The task text
    pub description: String,
    /// Completion flag, defaults to false on creation
    #[serde(default)]
    pub done: bool,
}

impl NewTask {
    /// Create a new task payload with the given description, not yet done
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
        }
    }
}

/// Data transfer object for updating an existing task.
///
/// Updates overwrite the full mutable state of a task: both the description
/// and the completion flag are required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTask {
    /// The new task text
    pub description: String,
    /// The new completion flag
    pub done: bool,
}

impl UpdateTask {
    /// Create an update payload for the given description and flag
    pub fn new(description: impl Into<String>, done: bool) -> Self {
        Self {
            description: description.into(),
            done,
        }
    }
}
