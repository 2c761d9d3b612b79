//! REST server for the to-do task manager
//!
//! Exposes a task store over a small JSON API: CRUD routes under `/tasks`
//! plus a `/health` probe. The server is generic over the store so tests
//! can run against an in-memory mock.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

use crate::error::ApiError;
use todo_core::{NewTask, Task, TaskStore, TaskValidator, UpdateTask};

/// Shared server state for handlers
#[derive(Clone)]
pub struct ApiState<S> {
    pub store: Arc<S>,
}

/// REST API server over a task store
pub struct ApiServer<S> {
    store: Arc<S>,
}

impl<S: TaskStore + 'static> ApiServer<S> {
    /// Create a new API server over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Start the server on the given address
    ///
    /// Runs until the process is stopped or the listener fails.
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting REST API server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Create the router with all endpoints
    pub fn router(self) -> Router {
        let state = Arc::new(ApiState { store: self.store });

        Router::new()
            .route(
                "/tasks",
                get(list_tasks_handler::<S>).post(create_task_handler::<S>),
            )
            .route(
                "/tasks/:id",
                get(get_task_handler::<S>)
                    .put(update_task_handler::<S>)
                    .delete(delete_task_handler::<S>),
            )
            .route("/health", get(health_handler::<S>))
            .layer(middleware::from_fn(
                crate::logging::request_logging_middleware,
            ))
            .with_state(state)
    }
}

/// Request body for POST /tasks
///
/// `done` is accepted but optional; new tasks default to not done.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

/// Request body for PUT /tasks/{id}
///
/// Updates overwrite the full mutable state of the task; an omitted `done`
/// field resets the flag to false.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

/// Query parameters for GET /tasks
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Include tasks already done; defaults to open tasks only
    #[serde(default)]
    pub include_done: bool,
}

async fn list_tasks_handler<S: TaskStore>(
    State(state): State<Arc<ApiState<S>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.store.select_all(query.include_done).await?;
    Ok(Json(tasks))
}

async fn create_task_handler<S: TaskStore>(
    State(state): State<Arc<ApiState<S>>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    TaskValidator::validate_description(&request.description)?;

    let task = state
        .store
        .insert(NewTask {
            description: request.description,
            done: request.done,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

async fn get_task_handler<S: TaskStore>(
    State(state): State<Arc<ApiState<S>>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let task = state.store.select(id).await?;
    Ok(Json(task))
}

async fn update_task_handler<S: TaskStore>(
    State(state): State<Arc<ApiState<S>>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    TaskValidator::validate_description(&request.description)?;

    let task = state
        .store
        .update(id, UpdateTask::new(request.description, request.done))
        .await?;

    Ok(Json(task))
}

async fn delete_task_handler<S: TaskStore>(
    State(state): State<Arc<ApiState<S>>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    // Read the record first so the response can return what was deleted
    let task = state.store.select(id).await?;
    state.store.delete(id).await?;

    Ok(Json(task))
}

async fn health_handler<S: TaskStore>(
    State(state): State<Arc<ApiState<S>>>,
) -> Result<&'static str, ApiError> {
    state.store.health_check().await?;
    Ok("OK")
}
