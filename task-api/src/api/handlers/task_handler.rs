// src/api/handlers/task_handler.rs
use crate::api::dto::task_dto::{CreateTaskDto, TaskDto, UpdateTaskDto};
use crate::error::{AppError, AppResult};
use crate::service::task_service::TaskService;
use axum::{
    extract::{FromRequestParts, Json, Path, State},
    http::request::Parts,
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

// Custom path extractor so a non-numeric id surfaces as a validation error
// instead of a bare framework rejection
pub struct TaskIdPath(pub i64);

impl<S> FromRequestParts<S> for TaskIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(path_str) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::ValidationError("Invalid path parameter".to_string()))?;

        let id = path_str
            .parse::<i64>()
            .map_err(|_| AppError::ValidationError(format!("Invalid task id: '{}'", path_str)))?;

        Ok(TaskIdPath(id))
    }
}

// --- Handlers ---

pub async fn list_tasks_handler(
    State(task_service): State<Arc<TaskService>>,
) -> AppResult<Json<Vec<TaskDto>>> {
    let tasks = task_service.list_tasks().await?;
    Ok(Json(tasks))
}

pub async fn list_open_tasks_handler(
    State(task_service): State<Arc<TaskService>>,
) -> AppResult<Json<Vec<TaskDto>>> {
    let tasks = task_service.list_open_tasks().await?;
    Ok(Json(tasks))
}

pub async fn list_closed_tasks_handler(
    State(task_service): State<Arc<TaskService>>,
) -> AppResult<Json<Vec<TaskDto>>> {
    let tasks = task_service.list_closed_tasks().await?;
    Ok(Json(tasks))
}

pub async fn get_task_handler(
    State(task_service): State<Arc<TaskService>>,
    TaskIdPath(id): TaskIdPath,
) -> AppResult<Json<TaskDto>> {
    info!(task_id = %id, "Getting task");

    let task_dto = task_service.get_task(id).await?;
    Ok(Json(task_dto))
}

pub async fn create_task_handler(
    State(task_service): State<Arc<TaskService>>,
    Json(payload): Json<CreateTaskDto>,
) -> AppResult<Json<TaskDto>> {
    payload.validate()?;

    info!(task_description = %payload.description, "Creating new task");

    let task_dto = task_service.create_task(payload).await?;

    info!(task_id = %task_dto.id, "Task created successfully");

    Ok(Json(task_dto))
}

pub async fn update_task_handler(
    State(task_service): State<Arc<TaskService>>,
    TaskIdPath(id): TaskIdPath,
    Json(payload): Json<UpdateTaskDto>,
) -> AppResult<Json<TaskDto>> {
    payload.validate()?;

    info!(task_id = %id, "Updating task");

    let task_dto = task_service.update_task(id, payload).await?;
    Ok(Json(task_dto))
}

pub async fn delete_task_handler(
    State(task_service): State<Arc<TaskService>>,
    TaskIdPath(id): TaskIdPath,
) -> AppResult<String> {
    info!(task_id = %id, "Deleting task");

    let confirmation = task_service.delete_task(id).await?;
    Ok(confirmation)
}

// --- Router ---

pub fn task_router(task_service: Arc<TaskService>) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/all-tasks", get(list_tasks_handler))
                .route("/open-tasks", get(list_open_tasks_handler))
                .route("/closed-tasks", get(list_closed_tasks_handler))
                .route("/task/{id}", get(get_task_handler))
                .route("/create", post(create_task_handler))
                .route("/update/{id}", patch(update_task_handler))
                .route("/delete/{id}", delete(delete_task_handler)),
        )
        .with_state(task_service)
}
