//! Shared helpers for HTTP integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) over a test database pool, plus small request/response
//! helpers around `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ecobin_api::config::{ServerConfig, VisionProvider};
use ecobin_api::router::build_app_router;
use ecobin_api::state::{AppState, VisionClients};
use ecobin_db::models::status::RequestStatus;

/// Build a test `ServerConfig` with safe defaults.
///
/// Vision API credentials are dummies; tests never reach the external
/// services.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        default_request_status: RequestStatus::Pending,
        recycling_provider: VisionProvider::Gemini,
        gemini_api_key: "test-key".to_string(),
        imagga_api_key: "test-key".to_string(),
        imagga_api_secret: "test-secret".to_string(),
        gemini_api_url: None,
        imagga_api_url: None,
        admin_email: "admin@ecobin.local".to_string(),
        admin_password: "change-me-on-boot".to_string(),
    }
}

/// Build the full application router over the given pool, using the same
/// construction path as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Like [`build_test_app`], but with a caller-supplied configuration
/// (e.g. a vision base URL pointed at an unreachable address).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let vision = Arc::new(VisionClients::from_config(&config));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        vision,
    };
    build_app_router(state, &config)
}

/// Send a GET request to the given path.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request to the given path.
pub async fn delete(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
