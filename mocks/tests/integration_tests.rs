//! Integration tests for the mocks crate
//!
//! Verifies the mock store honors the same TaskStore contract as the SQLite
//! implementation, so tests built on it stay trustworthy.

use mocks::{MockTaskStore, NewTaskBuilder, TaskBuilder, UpdateTaskBuilder};
use todo_core::{TaskError, TaskStore};

#[tokio::test]
async fn test_mock_store_basic_operations() {
    let store = MockTaskStore::new();

    let new_task = NewTaskBuilder::new().with_description("buy milk").build();
    let task = store.insert(new_task).await.unwrap();

    assert_eq!(task.id, 1);
    assert_eq!(task.description, "buy milk");
    assert!(!task.done);

    // Verify call tracking
    store.assert_called("insert");

    let retrieved = store.select(task.id).await.unwrap();
    assert_eq!(retrieved, task);

    store.assert_called("select");
}

#[tokio::test]
async fn test_mock_store_error_injection() {
    let store = MockTaskStore::new();

    store.inject_error(TaskError::Database("injected".to_string()));

    let error = store.select(1).await.unwrap_err();
    assert!(error.is_database());

    // The injection is consumed; a later call behaves normally again
    let error = store.select(1).await.unwrap_err();
    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_mock_store_with_prepopulated_tasks() {
    let store = MockTaskStore::with_tasks(vec![
        TaskBuilder::new().with_id(3).with_description("open").build(),
        TaskBuilder::new()
            .with_id(5)
            .with_description("closed")
            .with_done(true)
            .build(),
    ]);

    // IDs continue past the highest seeded one
    let fresh = store.insert(NewTaskBuilder::new().build()).await.unwrap();
    assert_eq!(fresh.id, 6);

    let open_tasks = store.select_all(false).await.unwrap();
    assert!(open_tasks.iter().all(|t| !t.done));
    assert!(open_tasks.iter().any(|t| t.id == 3));
}

#[tokio::test]
async fn test_mock_store_update_and_delete_contract() {
    let store = MockTaskStore::new();
    let task = store
        .insert(NewTaskBuilder::new().with_description("original").build())
        .await
        .unwrap();

    let updates = UpdateTaskBuilder::new()
        .with_description("renamed")
        .with_done(true)
        .build();
    let updated = store.update(task.id, updates).await.unwrap();
    assert_eq!(updated.description, "renamed");
    assert!(updated.done);

    store.delete(task.id).await.unwrap();
    assert!(store.select(task.id).await.unwrap_err().is_not_found());
    assert!(store.delete(task.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_mock_store_call_history_with_params() {
    let store = MockTaskStore::new();

    store.select_all(true).await.unwrap();
    store.health_check().await.unwrap();

    let history = store.call_history();
    assert!(history.contains(&"select_all(include_done=true)".to_string()));
    assert!(history.contains(&"health_check()".to_string()));

    store.clear_history();
    assert!(store.call_history().is_empty());
}
