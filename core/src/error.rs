use thiserror::Error;

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Error types for the to-do task store and its callers.
///
/// These errors cover the failure modes of task operations, from boundary
/// validation failures to storage engine errors. Each error type maps to an
/// appropriate HTTP status code for API responses.
///
/// # Examples
///
/// ```rust
/// use todo_core::error::{TaskError, Result};
///
/// let not_found = TaskError::not_found_id(42);
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.status_code(), 404);
///
/// let invalid = TaskError::empty_field("description");
/// assert!(invalid.is_validation());
/// assert_eq!(invalid.status_code(), 400);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task not found by the given identifier
    #[error("Task not found: {0}")]
    NotFound(String),

    /// Validation error with details
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database operation error
    #[error("Database error: {0}")]
    Database(String),
}

impl TaskError {
    /// Create a not found error for a task ID
    pub fn not_found_id(id: i64) -> Self {
        Self::NotFound(format!("Task with ID {id} not found"))
    }

    /// Create a validation error for an empty field
    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("Field '{field}' cannot be empty"))
    }

    /// Create a validation error for an unparseable task ID
    pub fn invalid_id(raw: &str) -> Self {
        Self::Validation(format!("Invalid task ID: '{raw}'"))
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, TaskError::Database(_))
    }

    /// Convert to the appropriate HTTP status code equivalent
    pub fn status_code(&self) -> u16 {
        match self {
            TaskError::NotFound(_) => 404,
            TaskError::Validation(_) => 400,
            TaskError::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = TaskError::not_found_id(42);
        assert_eq!(
            error,
            TaskError::NotFound("Task with ID 42 not found".to_string())
        );
        assert!(error.is_not_found());
        assert_eq!(error.status_code(), 404);

        let error = TaskError::empty_field("description");
        assert_eq!(
            error,
            TaskError::Validation("Field 'description' cannot be empty".to_string())
        );
        assert!(error.is_validation());
        assert_eq!(error.status_code(), 400);

        let error = TaskError::invalid_id("abc");
        assert!(error.is_validation());
        assert_eq!(format!("{error}"), "Validation error: Invalid task ID: 'abc'");
    }

    #[test]
    fn test_error_display() {
        let error = TaskError::NotFound("Task with ID 7 not found".to_string());
        assert_eq!(format!("{}", error), "Task not found: Task with ID 7 not found");

        let error = TaskError::Validation("Invalid input".to_string());
        assert_eq!(format!("{}", error), "Validation error: Invalid input");

        let error = TaskError::Database("disk I/O error".to_string());
        assert_eq!(format!("{}", error), "Database error: disk I/O error");
    }

    #[test]
    fn test_error_predicates() {
        assert!(TaskError::NotFound("test".to_string()).is_not_found());
        assert!(!TaskError::Validation("test".to_string()).is_not_found());

        assert!(TaskError::Validation("test".to_string()).is_validation());
        assert!(!TaskError::Database("test".to_string()).is_validation());

        assert!(TaskError::Database("test".to_string()).is_database());
        assert!(!TaskError::NotFound("test".to_string()).is_database());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(TaskError::NotFound("x".to_string()).status_code(), 404);
        assert_eq!(TaskError::Validation("x".to_string()).status_code(), 400);
        assert_eq!(TaskError::Database("x".to_string()).status_code(), 500);
    }
}
