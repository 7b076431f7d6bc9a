//! Task API Tests

use axum::http::StatusCode;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn test_get_tasks_with_non_numeric_list_id_returns_400() {
    let app = TestApp::new();

    let response = app.get("/tasks/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["code"], 10002);
}

#[tokio::test]
async fn test_get_tasks_with_unreachable_store_returns_500() {
    let app = TestApp::new();

    let response = app.get("/tasks/3").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_add_task_with_string_list_id_is_a_client_error() {
    let app = TestApp::new();

    let response = app
        .post_json("/addTask", r#"{"taskName":"Milk","listID":"seven"}"#)
        .await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_delete_task_requires_both_ids() {
    let app = TestApp::new();

    let response = app.post_json("/deleteTask", r#"{"taskID":1}"#).await;

    assert!(response.status().is_client_error());
}
