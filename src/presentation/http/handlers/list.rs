//! List Handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::dto::request::{AddListRequest, DeleteListRequest, EditListNameRequest};
use crate::application::dto::response::{EmptyResponse, ListResponse};
use crate::application::services::{ListService, ListServiceImpl};
use crate::infrastructure::repositories::MySqlListRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all lists
pub async fn get_lists(State(state): State<AppState>) -> Result<Json<Vec<ListResponse>>, AppError> {
    let list_repo = Arc::new(MySqlListRepository::new(state.db.clone()));
    let list_service = ListServiceImpl::new(list_repo);

    let lists = list_service
        .all_lists()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(lists.into_iter().map(ListResponse::from).collect()))
}

/// Create a new list; its task count starts at zero
pub async fn add_list(
    State(state): State<AppState>,
    Json(body): Json<AddListRequest>,
) -> Result<Json<EmptyResponse>, AppError> {
    let list_repo = Arc::new(MySqlListRepository::new(state.db.clone()));
    let list_service = ListServiceImpl::new(list_repo);

    list_service
        .create_list(&body.list_name)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(EmptyResponse::default()))
}

/// Delete a list and every task that belongs to it
pub async fn delete_list(
    State(state): State<AppState>,
    Json(body): Json<DeleteListRequest>,
) -> Result<Json<EmptyResponse>, AppError> {
    let list_repo = Arc::new(MySqlListRepository::new(state.db.clone()));
    let list_service = ListServiceImpl::new(list_repo);

    list_service
        .delete_list(body.list_id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(EmptyResponse::default()))
}

/// Rename a list
pub async fn edit_list_name(
    State(state): State<AppState>,
    Json(body): Json<EditListNameRequest>,
) -> Result<Json<EmptyResponse>, AppError> {
    let list_repo = Arc::new(MySqlListRepository::new(state.db.clone()));
    let list_service = ListServiceImpl::new(list_repo);

    list_service
        .rename_list(body.list_id, &body.list_name)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(EmptyResponse::default()))
}
