//! HTTP-level integration tests for `/recycling/analyze`.
//!
//! The classification clients are pointed at an unreachable address so
//! these tests exercise the degraded path without touching the real
//! providers.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{body_json, test_config};
use ecobin_api::config::VisionProvider;
use sqlx::PgPool;
use tower::ServiceExt;

/// Nothing listens here; every provider call fails at connect time.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

const BOUNDARY: &str = "ecobin-test-boundary";

/// Build a multipart/form-data body with a single field.
fn multipart_body(field_name: &str, file_name: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_multipart(app: Router, path: &str, body: Vec<u8>) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Test: provider failure degrades to 200 with the unknown payload
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn gemini_failure_degrades_to_unknown_200(pool: PgPool) {
    let mut config = test_config();
    config.recycling_provider = VisionProvider::Gemini;
    config.gemini_api_url = Some(UNREACHABLE_URL.to_string());

    let app = common::build_test_app_with_config(pool, config);
    let body = multipart_body("image", "bottle.jpg", b"not-a-real-jpeg");
    let response = post_multipart(app, "/recycling/analyze", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["itemName"], "Unknown Item");
    assert_eq!(json["material"], "Unknown Material");
    assert_eq!(json["recyclability"], "Unknown");
    let error = json["error"].as_str().expect("degraded response carries an error");
    assert!(error.starts_with("Error analyzing image:"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn imagga_failure_degrades_to_unknown_200(pool: PgPool) {
    let mut config = test_config();
    config.recycling_provider = VisionProvider::Imagga;
    config.imagga_api_url = Some(UNREACHABLE_URL.to_string());

    let app = common::build_test_app_with_config(pool, config);
    let body = multipart_body("image", "can.jpg", b"not-a-real-jpeg");
    let response = post_multipart(app, "/recycling/analyze", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["itemName"], "Unknown Item");
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Test: a body without an image field is a validation error
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_image_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = multipart_body("document", "notes.txt", b"not an image upload");
    let response = post_multipart(app, "/recycling/analyze", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
