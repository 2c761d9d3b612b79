//! Command execution for the `todo` binary
//!
//! Each command performs exactly one store operation and prints its result
//! to stdout. Errors propagate to `main`, which renders them on stderr and
//! exits non-zero.

use anyhow::Result;
use todo_core::{NewTask, Task, TaskStore, TaskValidator, UpdateTask};
use tracing::debug;

/// Add a new task with the given description
pub async fn add<S: TaskStore>(store: &S, description: &str) -> Result<()> {
    TaskValidator::validate_description(description)?;

    let task = store.insert(NewTask::new(description)).await?;
    debug!(id = task.id, "task inserted");

    println!("'{}' was added as ({})", task.description, task.id);
    Ok(())
}

/// List tasks, one line per task
pub async fn list<S: TaskStore>(store: &S, include_done: bool) -> Result<()> {
    let tasks = store.select_all(include_done).await?;

    for line in format_task_list(&tasks) {
        println!("{line}");
    }

    Ok(())
}

/// Mark a task as done
pub async fn check<S: TaskStore>(store: &S, id: i64) -> Result<()> {
    let task = store.check(id).await?;

    println!("task ({}) successfully checked", task.id);
    Ok(())
}

/// Remove a task permanently
pub async fn remove<S: TaskStore>(store: &S, id: i64) -> Result<()> {
    store.delete(id).await?;

    println!("task ({id}) successfully removed");
    Ok(())
}

/// Overwrite a task's description and done flag
pub async fn edit<S: TaskStore>(store: &S, id: i64, description: &str, done: bool) -> Result<()> {
    TaskValidator::validate_description(description)?;

    let task = store.update(id, UpdateTask::new(description, done)).await?;

    println!("task ({}) successfully edited", task.id);
    Ok(())
}

/// Show a single task
pub async fn show<S: TaskStore>(store: &S, id: i64) -> Result<()> {
    let task = store.select(id).await?;

    println!("{} {} {}", task.id, marker(task.done), task.description);
    Ok(())
}

fn marker(done: bool) -> char {
    if done {
        '✓'
    } else {
        ' '
    }
}

/// Format tasks as display lines, IDs left-padded to the widest ID
pub fn format_task_list(tasks: &[Task]) -> Vec<String> {
    let width = tasks
        .iter()
        .map(|task| task.id.to_string().len())
        .max()
        .unwrap_or(1);

    tasks
        .iter()
        .map(|task| {
            format!(
                "{:<width$} {} {}",
                task.id,
                marker(task.done),
                task.description
            )
        })
        .collect()
}
