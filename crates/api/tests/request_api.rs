//! HTTP-level integration tests for the pickup-request workflow.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn alice_request() -> serde_json::Value {
    serde_json::json!({
        "requesterName": "Alice",
        "email": "alice@example.com",
        "contactNumber": "0711234567",
        "eventType": "Community cleanup",
        "location": "Riverside Park",
        "eventDate": "2026-09-12",
        "eventTime": "09:30:00",
        "numberOfCleaners": 3
    })
}

/// Create a request over HTTP and return its id, looked up via the list
/// endpoint (the save endpoint answers with a confirmation message only).
async fn create_and_find_id(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/request/save", alice_request()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/request/get-all-request").await;
    let json = body_json(response).await;
    json["data"][0]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_returns_201_with_confirmation_message(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/request/save", alice_request()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Request saved for Alice with 3 cleaners!");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_derives_cleaners_and_pending_status(pool: PgPool) {
    let id = create_and_find_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/request/get-all-request").await;
    let json = body_json(response).await;
    let request = &json["data"][0];

    assert_eq!(request["id"].as_i64().unwrap(), id);
    assert_eq!(request["status"], "PENDING");
    assert_eq!(request["numberOfCleaners"], 3);
    assert_eq!(
        request["assignedCleaners"],
        serde_json::json!(["Cleaner 1", "Cleaner 2", "Cleaner 3"])
    );
    assert!(request["requestDate"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_with_blank_name_returns_400(pool: PgPool) {
    let mut body = alice_request();
    body["requesterName"] = serde_json::json!("   ");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/request/save", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_with_negative_cleaner_count_returns_400(pool: PgPool) {
    let mut body = alice_request();
    body["numberOfCleaners"] = serde_json::json!(-2);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/request/save", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Full field update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_regenerates_cleaner_list(pool: PgPool) {
    let id = create_and_find_id(&pool).await;

    let mut body = alice_request();
    body["numberOfCleaners"] = serde_json::json!(1);

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/request/update/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["numberOfCleaners"], 1);
    assert_eq!(
        json["data"]["assignedCleaners"],
        serde_json::json!(["Cleaner 1"])
    );
    // Status survives a field update untouched.
    assert_eq!(json["data"]["status"], "PENDING");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/request/update/999999", alice_request()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Status update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_replaces_only_status(pool: PgPool) {
    let id = create_and_find_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/request/{id}/update-status"),
        serde_json::json!({"status": "APPROVED"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "APPROVED");
    // Everything else is untouched.
    assert_eq!(json["data"]["requesterName"], "Alice");
    assert_eq!(json["data"]["numberOfCleaners"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_with_null_returns_400(pool: PgPool) {
    let id = create_and_find_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/request/{id}/update-status"),
        serde_json::json!({"status": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_missing_id_returns_404_and_leaves_storage_unmodified(pool: PgPool) {
    let id = create_and_find_id(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/request/999999/update-status",
        serde_json::json!({"status": "COMPLETED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The existing row keeps its status.
    let app = common::build_test_app(pool);
    let response = get(app, "/request/get-all-request").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["id"].as_i64().unwrap(), id);
    assert_eq!(json["data"][0]["status"], "PENDING");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_repeat_delete_returns_404(pool: PgPool) {
    let id = create_and_find_id(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/request/delete-request/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].is_string());

    // Deleting the same id again reports the missing row.
    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/request/delete-request/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
