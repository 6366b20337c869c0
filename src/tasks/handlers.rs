use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::ApiError,
    pagination,
    state::AppState,
    tasks::{
        dto::{CreateTaskRequest, ListTasksRequest, UpdateTaskRequest},
        repo::Task,
    },
    validate::ValidateRequest,
};

#[instrument(skip(state, payload))]
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "create_task body rejected");
        ApiError::BadRequest("Request parsing failed")
    })?;

    req.validate().map_err(|e| {
        warn!(field = e.field, "create_task validation failed");
        ApiError::Validation(e)
    })?;

    let task = state
        .tasks
        .create(
            &req.title,
            req.description.as_deref(),
            req.category_id,
            req.priority() as i32,
        )
        .await
        .map_err(|e| {
            error!(error = %e, title = %req.title, "create task failed");
            ApiError::Internal("Failed to create task")
        })?;

    info!(task_id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

#[instrument(skip(state, payload))]
pub async fn list_tasks(
    State(state): State<AppState>,
    payload: Result<Json<ListTasksRequest>, JsonRejection>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "list_tasks body rejected");
        ApiError::BadRequest("Invalid parameters")
    })?;

    req.validate().map_err(|e| {
        warn!(field = e.field, "list_tasks validation failed");
        ApiError::Validation(e)
    })?;

    let offset = pagination::offset(req.page(), req.limit());
    let tasks = state.tasks.list(req.limit(), offset).await.map_err(|e| {
        error!(error = %e, "list tasks failed");
        ApiError::Internal("Failed to get tasks")
    })?;

    Ok(Json(tasks))
}

#[instrument(skip(state, id))]
pub async fn get_task(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id.map_err(|e| {
        warn!(error = %e, "get_task invalid id");
        ApiError::BadRequest("Invalid parameters")
    })?;

    match state.tasks.get(id).await {
        Ok(Some(task)) => Ok(Json(task)),
        Ok(None) => Err(ApiError::NotFound("Task not found")),
        Err(e) => {
            error!(error = %e, %id, "get task failed");
            Err(ApiError::NotFound("Task not found"))
        }
    }
}

#[instrument(skip(state, id, payload))]
pub async fn update_task(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id.map_err(|e| {
        warn!(error = %e, "update_task invalid id");
        ApiError::BadRequest("Invalid parameters")
    })?;
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "update_task body rejected");
        ApiError::BadRequest("Request parsing failed")
    })?;

    req.validate().map_err(|e| {
        warn!(field = e.field, "update_task validation failed");
        ApiError::Validation(e)
    })?;

    let updated = state
        .tasks
        .update(
            id,
            req.title.as_deref(),
            req.description.as_deref(),
            req.completed,
            req.priority.map(|p| p as i32),
        )
        .await
        .map_err(|e| {
            error!(error = %e, %id, "update task failed");
            ApiError::Internal("Failed to update task")
        })?;

    match updated {
        Some(task) => {
            info!(task_id = %task.id, "task updated");
            Ok(Json(task))
        }
        None => Err(ApiError::NotFound("Task not found")),
    }
}

#[instrument(skip(state, id))]
pub async fn delete_task(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|e| {
        warn!(error = %e, "delete_task invalid id");
        ApiError::BadRequest("Invalid parameters")
    })?;

    let deleted = state.tasks.delete(id).await.map_err(|e| {
        error!(error = %e, %id, "delete task failed");
        ApiError::Internal("Failed to delete task")
    })?;

    if deleted {
        info!(task_id = %id, "task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Task not found"))
    }
}
