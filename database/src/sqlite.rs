use crate::common::{row_to_task, sqlx_error_to_task_error};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use todo_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, UpdateTask},
    store::TaskStore,
};

/// SQLite implementation of the TaskStore trait
///
/// This implementation provides task persistence using SQLite with
/// connection pooling and prepared statements. One pool is created at
/// startup and shared for the life of the process; concurrent access is
/// delegated to SQLite itself (WAL mode for file databases).
#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    /// Create a new SQLite store with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (`sqlite://` URL, bare file
    ///   path, or `:memory:`)
    ///
    /// # Returns
    /// * `Ok(SqliteTaskStore)` - Successfully connected store
    /// * `Err(TaskError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteTaskStore;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let store = SqliteTaskStore::new(":memory:").await?;
    ///
    /// // File-based database
    /// let store = SqliteTaskStore::new("sqlite:///tmp/todo.sqlite").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str) -> Result<Self> {
        // Handle the different database URL formats
        let db_url = if database_url.starts_with(":memory:") {
            database_url.to_string()
        } else if database_url.starts_with("sqlite://") {
            database_url.to_string()
        } else {
            format!("sqlite://{database_url}")
        };

        let is_memory = db_url.contains(":memory:");

        let connect_options = if is_memory {
            SqliteConnectOptions::new()
                .filename(":memory:")
                .journal_mode(SqliteJournalMode::Memory)
                .busy_timeout(std::time::Duration::from_secs(5))
        } else {
            SqliteConnectOptions::new()
                .filename(db_url.replace("sqlite://", ""))
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(std::time::Duration::from_secs(5))
        };

        // Each connection to :memory: opens its own database, so the pool
        // must be pinned to a single connection to share state.
        let pool = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(connect_options)
                .await
        } else {
            SqlitePool::connect_with(connect_options).await
        }
        .map_err(sqlx_error_to_task_error)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    ///
    /// Applies all pending migrations to bring the schema up to date,
    /// creating the task table on first open. Call this after creating a
    /// new store instance.
    ///
    /// # Returns
    /// * `Ok(())` - Migrations completed successfully
    /// * `Err(TaskError::Database)` - If migration fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| TaskError::Database(format!("Migration failed: {e}")))?;

        tracing::debug!("Database migrations completed");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// This method is primarily intended for testing scenarios where
    /// direct SQL execution is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn insert(&self, task: NewTask) -> Result<Task> {
        let row = sqlx::query(
            "INSERT INTO task (description, done) VALUES (?, ?) RETURNING id, description, done",
        )
        .bind(&task.description)
        .bind(task.done)
        .fetch_one(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        row_to_task(&row)
    }

    async fn update(&self, id: i64, updates: UpdateTask) -> Result<Task> {
        let row = sqlx::query(
            "UPDATE task SET description = ?, done = ? WHERE id = ? \
             RETURNING id, description, done",
        )
        .bind(&updates.description)
        .bind(updates.done)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        match row {
            Some(row) => row_to_task(&row),
            None => Err(TaskError::not_found_id(id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM task WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        if result.rows_affected() == 0 {
            return Err(TaskError::not_found_id(id));
        }

        Ok(())
    }

    async fn select(&self, id: i64) -> Result<Task> {
        let row = sqlx::query("SELECT id, description, done FROM task WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        match row {
            Some(row) => row_to_task(&row),
            None => Err(TaskError::not_found_id(id)),
        }
    }

    async fn select_all(&self, include_done: bool) -> Result<Vec<Task>> {
        // No ORDER BY: callers get storage order
        let sql = if include_done {
            "SELECT id, description, done FROM task"
        } else {
            "SELECT id, description, done FROM task WHERE done = FALSE"
        };

        let rows = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in rows {
            tasks.push(row_to_task(&row)?);
        }

        Ok(tasks)
    }

    async fn check(&self, id: i64) -> Result<Task> {
        let row = sqlx::query(
            "UPDATE task SET done = TRUE WHERE id = ? RETURNING id, description, done",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        match row {
            Some(row) => row_to_task(&row),
            None => Err(TaskError::not_found_id(id)),
        }
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(())
    }
}
