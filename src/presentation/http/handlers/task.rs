//! Task Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::request::{AddTaskRequest, DeleteTaskRequest};
use crate::application::dto::response::{EmptyResponse, TaskResponse};
use crate::application::services::{TaskService, TaskServiceImpl};
use crate::infrastructure::repositories::MySqlTaskRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all tasks belonging to a list
pub async fn get_tasks(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let list_id: i64 = list_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid list ID".into()))?;

    let task_repo = Arc::new(MySqlTaskRepository::new(state.db.clone()));
    let task_service = TaskServiceImpl::new(task_repo);

    let tasks = task_service
        .tasks_for_list(list_id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Add a task to a list; the list's task count is recomputed in the same
/// transaction
pub async fn add_task(
    State(state): State<AppState>,
    Json(body): Json<AddTaskRequest>,
) -> Result<Json<EmptyResponse>, AppError> {
    let task_repo = Arc::new(MySqlTaskRepository::new(state.db.clone()));
    let task_service = TaskServiceImpl::new(task_repo);

    task_service
        .add_task(&body.task_name, body.list_id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(EmptyResponse::default()))
}

/// Delete a task from a list; the list's task count is recomputed in the
/// same transaction
pub async fn delete_task(
    State(state): State<AppState>,
    Json(body): Json<DeleteTaskRequest>,
) -> Result<Json<EmptyResponse>, AppError> {
    let task_repo = Arc::new(MySqlTaskRepository::new(state.db.clone()));
    let task_service = TaskServiceImpl::new(task_repo);

    task_service
        .delete_task(body.task_id, body.list_id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(EmptyResponse::default()))
}
