//! Image Handlers
//!
//! Multipart image upload and raw blob retrieval for lists. The stored
//! bytes are a verbatim pass-through in both directions.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::response::EmptyResponse;
use crate::application::services::{ListError, ListService, ListServiceImpl};
use crate::infrastructure::repositories::MySqlListRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Attach an image to a list.
///
/// Accepts a multipart form with a `listID` field and an `image-file`
/// field. The file type check is best-effort; the transaction stores
/// whatever bytes arrive.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EmptyResponse>, AppError> {
    let mut list_id: Option<i64> = None;
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("listID") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                list_id = Some(
                    text.trim()
                        .parse()
                        .map_err(|_| AppError::BadRequest("Invalid list ID".into()))?,
                );
            }
            Some("image-file") => {
                if let Some(content_type) = field.content_type() {
                    if !content_type.starts_with("image/") {
                        return Err(AppError::BadRequest(format!(
                            "Unsupported upload type: {}",
                            content_type
                        )));
                    }
                }

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                image = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let list_id = list_id.ok_or_else(|| AppError::BadRequest("Missing listID field".into()))?;
    let image = image.ok_or_else(|| AppError::BadRequest("Missing image-file field".into()))?;

    let list_repo = Arc::new(MySqlListRepository::new(state.db.clone()));
    let list_service = ListServiceImpl::new(list_repo);

    list_service
        .attach_image(list_id, image)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(EmptyResponse::default()))
}

/// Fetch the raw image bytes attached to a list
pub async fn get_blob(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<Response, AppError> {
    let list_id: i64 = list_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid list ID".into()))?;

    let list_repo = Arc::new(MySqlListRepository::new(state.db.clone()));
    let list_service = ListServiceImpl::new(list_repo);

    let bytes = list_service.image(list_id).await.map_err(|e| match e {
        ListError::ImageNotFound => AppError::NotFound(e.to_string()),
        e => AppError::Internal(e.to_string()),
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/octet-stream")],
        bytes,
    )
        .into_response())
}
