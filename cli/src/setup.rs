use anyhow::{Context, Result};
use database::{SqliteTaskStore, TaskStore};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;

/// Create the task store from the complete configuration
///
/// Opens the SQLite pool, runs pending migrations, and verifies
/// connectivity. The returned store is the single process-wide handle,
/// passed explicitly to every command and handler.
pub async fn create_store(config: &Config) -> Result<Arc<SqliteTaskStore>> {
    let database_url = config.database_url();
    debug!("Using database URL: {}", database_url);

    ensure_database_directory(&database_url)?;

    let store = SqliteTaskStore::new(&database_url)
        .await
        .context("Failed to open database")?;

    store
        .migrate()
        .await
        .context("Failed to run database migrations")?;

    store
        .health_check()
        .await
        .context("Database health check failed")?;

    Ok(Arc::new(store))
}

/// Ensure the parent directory of a file database exists
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    let db_path = database_url
        .strip_prefix("sqlite://")
        .unwrap_or(database_url);

    if db_path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating database directory: {}", parent.display());
            std::fs::create_dir_all(parent).context("Failed to create database directory")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use database::TaskStore;
    use tempfile::TempDir;

    fn config_with_url(url: &str) -> Config {
        Config {
            database: DatabaseConfig {
                url: Some(url.to_string()),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_ensure_database_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("subdir").join("todo.sqlite");
        let database_url = format!("sqlite://{}", db_path.display());

        ensure_database_directory(&database_url).unwrap();
        assert!(db_path.parent().unwrap().exists());
    }

    #[test]
    fn test_ensure_database_directory_skips_memory() {
        assert!(ensure_database_directory(":memory:").is_ok());
        assert!(ensure_database_directory("sqlite://:memory:").is_ok());
    }

    #[tokio::test]
    async fn test_create_store_with_file_url() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("store").join("todo.sqlite");
        let config = config_with_url(&format!("sqlite://{}", db_path.display()));

        let store = create_store(&config).await.unwrap();
        assert!(store.health_check().await.is_ok());
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_create_store_in_memory() {
        let config = config_with_url(":memory:");
        let store = create_store(&config).await.unwrap();
        assert!(store.select_all(true).await.unwrap().is_empty());
    }
}
