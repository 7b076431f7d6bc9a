//! Common Test Utilities
//!
//! Shared helpers and test infrastructure.

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use tower::ServiceExt;

use todo_server::config::{CorsSettings, DatabaseSettings, ServerSettings, Settings};
use todo_server::infrastructure::database;
use todo_server::presentation::http::routes;
use todo_server::startup::AppState;

/// Settings pointing at a port where no database is listening.
///
/// The short acquire timeout keeps store-unreachable tests fast.
pub fn unreachable_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
            static_dir: "static".into(),
        },
        database: DatabaseSettings {
            host: "127.0.0.1".into(),
            port: 59997,
            username: "todo".into(),
            password: "todo".into(),
            database: "todo_test".into(),
            max_connections: 4,
            acquire_timeout: 2,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

/// Test application driving the real router through `oneshot`.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Build the router over a lazily-connected pool; no live database is
    /// required until a handler touches the store.
    pub fn new() -> Self {
        let settings = unreachable_settings();
        Self::with_settings(settings)
    }

    /// Build the router over the given settings (lazy pool).
    pub fn with_settings(settings: Settings) -> Self {
        let db = database::create_lazy_pool(&settings.database);
        let state = AppState {
            db,
            settings: Arc::new(settings),
        };

        Self {
            router: routes::create_router(state),
        }
    }

    /// Build the router over an already-connected pool.
    pub fn with_pool(pool: sqlx::MySqlPool, settings: Settings) -> Self {
        let state = AppState {
            db: pool,
            settings: Arc::new(settings),
        };

        Self {
            router: routes::create_router(state),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with a raw body and content type
    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Read a response body as parsed JSON
pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as raw bytes
pub async fn response_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Encode a multipart upload with a `listID` field and an `image-file`
/// field, returning (content type, body).
pub fn multipart_image_upload(list_id: i64, image: &[u8]) -> (String, Vec<u8>) {
    let boundary = "test-boundary-7MA4YWxkTrZu0gW";
    let mut body = Vec::new();

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"listID\"\r\n\r\n");
    body.extend_from_slice(format!("{}\r\n", list_id).as_bytes());

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"image-file\"; filename=\"test.png\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
    body.extend_from_slice(image);
    body.extend_from_slice(b"\r\n");

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    (format!("multipart/form-data; boundary={}", boundary), body)
}
