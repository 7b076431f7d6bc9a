//! Route Configuration
//!
//! Configures all HTTP routes for the API. The paths are the wire contract
//! shared with the frontend and are mounted at the router root.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::startup::AppState;

/// Maximum accepted request body, sized for image uploads
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.settings.server.static_dir.clone();

    Router::new()
        .route("/lists", get(handlers::list::get_lists))
        .route("/tasks/{listID}", get(handlers::task::get_tasks))
        .route("/addTask", post(handlers::task::add_task))
        .route("/addList", post(handlers::list::add_list))
        .route("/deleteList", post(handlers::list::delete_list))
        .route("/deleteTask", post(handlers::task::delete_task))
        .route("/editListName", post(handlers::list::edit_list_name))
        .route("/uploadImage", post(handlers::image::upload_image))
        .route("/blob/{listID}", get(handlers::image::get_blob))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Static frontend assets
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
