//! List API Tests
//!
//! Exercises the error contract without a live database: store failures
//! surface as a generic 500 body, never the raw driver error.

use axum::http::StatusCode;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn test_get_lists_with_unreachable_store_returns_500() {
    let app = TestApp::new();

    let response = app.get("/lists").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert_eq!(json["code"], 10000);
    assert_eq!(json["message"], "Internal server error");
}

#[tokio::test]
async fn test_add_list_with_unreachable_store_returns_500() {
    let app = TestApp::new();

    let response = app
        .post_json("/addList", r#"{"listName":"Groceries"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_add_list_with_malformed_json_is_a_client_error() {
    let app = TestApp::new();

    let response = app.post_json("/addList", "not json").await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_add_list_with_wrong_field_type_is_a_client_error() {
    let app = TestApp::new();

    let response = app.post_json("/addList", r#"{"listName":42}"#).await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_delete_list_requires_list_id_field() {
    let app = TestApp::new();

    let response = app.post_json("/deleteList", r#"{}"#).await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_root_serves_static_frontend() {
    let app = TestApp::new();

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/definitely/not/here").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
