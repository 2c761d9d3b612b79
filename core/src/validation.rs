use crate::{
    error::{Result, TaskError},
    models::{NewTask, UpdateTask},
};

/// Validation utilities for task operations.
///
/// Validation happens at the boundaries (CLI argument handling, HTTP request
/// binding) before a store is called; the store itself does not re-validate.
pub struct TaskValidator;

impl TaskValidator {
    /// Validate a task description
    ///
    /// Descriptions must contain at least one non-whitespace character.
    /// There is no length limit.
    ///
    /// # Arguments
    /// * `description` - The description to validate
    ///
    /// # Returns
    /// * `Ok(())` - If the description is valid
    /// * `Err(TaskError::Validation)` - If the description is empty or blank
    pub fn validate_description(description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(TaskError::empty_field("description"));
        }

        Ok(())
    }

    /// Validate a new task payload before insert
    ///
    /// # Arguments
    /// * `task` - The payload to validate
    ///
    /// # Returns
    /// * `Ok(())` - If the payload is valid
    /// * `Err(TaskError::Validation)` - If the description is empty or blank
    pub fn validate_new_task(task: &NewTask) -> Result<()> {
        Self::validate_description(&task.description)
    }

    /// Validate an update payload before applying it
    ///
    /// # Arguments
    /// * `updates` - The payload to validate
    ///
    /// # Returns
    /// * `Ok(())` - If the payload is valid
    /// * `Err(TaskError::Validation)` - If the description is empty or blank
    pub fn validate_update(updates: &UpdateTask) -> Result<()> {
        Self::validate_description(&updates.description)
    }

    /// Parse a task ID from raw user input
    ///
    /// # Arguments
    /// * `raw` - The raw string to parse (e.g. a CLI argument or URL segment)
    ///
    /// # Returns
    /// * `Ok(i64)` - The parsed ID
    /// * `Err(TaskError::Validation)` - If the input is not a number
    pub fn parse_id(raw: &str) -> Result<i64> {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| TaskError::invalid_id(raw))
    }
}
