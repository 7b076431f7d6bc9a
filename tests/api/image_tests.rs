//! Image API Tests

use axum::http::StatusCode;

use crate::common::{multipart_image_upload, response_json, TestApp};

#[tokio::test]
async fn test_get_blob_with_non_numeric_list_id_returns_400() {
    let app = TestApp::new();

    let response = app.get("/blob/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["code"], 10002);
}

#[tokio::test]
async fn test_get_blob_with_unreachable_store_returns_500() {
    let app = TestApp::new();

    let response = app.get("/blob/1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_upload_image_rejects_non_multipart_body() {
    let app = TestApp::new();

    let response = app
        .post_raw(
            "/uploadImage",
            "application/json",
            br#"{"listID":1}"#.to_vec(),
        )
        .await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_upload_image_with_unreachable_store_returns_500() {
    let app = TestApp::new();

    let (content_type, body) = multipart_image_upload(1, b"\x89PNG\r\n\x1a\n");
    let response = app.post_raw("/uploadImage", &content_type, body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
