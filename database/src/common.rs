use sqlx::{sqlite::SqliteRow, Row};
use todo_core::{
    error::{Result, TaskError},
    models::Task,
};

/// Convert a SQLite row to the Task model
pub fn row_to_task(row: &SqliteRow) -> Result<Task> {
    Ok(Task {
        id: row.try_get("id").map_err(sqlx_error_to_task_error)?,
        description: row
            .try_get("description")
            .map_err(sqlx_error_to_task_error)?,
        done: row.try_get("done").map_err(sqlx_error_to_task_error)?,
    })
}

/// Convert a SQLx error to TaskError
pub fn sqlx_error_to_task_error(err: sqlx::Error) -> TaskError {
    match &err {
        sqlx::Error::Database(db_err) => TaskError::Database(db_err.message().to_string()),
        sqlx::Error::RowNotFound => {
            // Zero-row conditions are handled at the call sites
            TaskError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::PoolTimedOut => TaskError::Database("Connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => TaskError::Database(format!("Database I/O error: {io_err}")),
        _ => TaskError::Database(format!("Database operation failed: {err}")),
    }
}
