//! HTTP-level integration tests for the plain CRUD resources, users, and
//! roles.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Bin locations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn bin_location_crud_cycle(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/bin-location/save",
        serde_json::json!({
            "address": "12 Harbour Road",
            "latitude": 6.9271,
            "longitude": 79.8612,
            "wasteType": "PLASTIC",
            "status": "EMPTY"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/bin-location/get-all").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let id = json["data"][0]["id"].as_i64().unwrap();
    assert_eq!(json["data"][0]["wasteType"], "PLASTIC");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/bin-location/update/{id}"),
        serde_json::json!({"status": "FULL"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "FULL");
    // Untouched fields survive the partial update.
    assert_eq!(json["data"]["address"], "12 Harbour Road");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/bin-location/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/bin-location/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Bin inventory
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn bin_inventory_save_and_update(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/bin-inventory/save",
        serde_json::json!({
            "address": "Depot 3",
            "coordinates": "6.9271,79.8612",
            "slotType": 2,
            "status": 0
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/bin-inventory/get-all").await;
    let json = body_json(response).await;
    let id = json["data"][0]["id"].as_i64().unwrap();
    assert_eq!(json["data"][0]["slotType"], 2);

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/bin-inventory/update/{id}"),
        serde_json::json!({"status": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], 1);
}

// ---------------------------------------------------------------------------
// Complaints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn complaint_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/complaint/save",
        serde_json::json!({
            "name": "Nimal",
            "complaint": "Bin overflowing on Main Street",
            "image": null
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/complaint/get-all-complaints").await;
    let json = body_json(response).await;
    let id = json["data"][0]["id"].as_i64().unwrap();
    assert_eq!(json["data"][0]["name"], "Nimal");

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/complaint/delete-complaint/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn feedback_save_and_list(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/feedback/save",
        serde_json::json!({
            "username": "kasun",
            "message": "Pickup arrived on time",
            "rating": 5
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get(app, "/feedback/get-all-feedback").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["rating"], 5);
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn schedule_crud_cycle(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/schedule/save",
        serde_json::json!({
            "date": "2026-09-01",
            "time": "07:00:00",
            "location": "Ward 4",
            "wasteType": "ORGANIC"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/schedule/get-all-schedule").await;
    let json = body_json(response).await;
    let id = json["data"][0]["id"].as_i64().unwrap();
    assert_eq!(json["data"][0]["wasteType"], "ORGANIC");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/schedule/update/{id}"),
        serde_json::json!({"location": "Ward 5"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["location"], "Ward 5");

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/schedule/delete-schedule/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn schedule_save_missing_waste_type_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/schedule/save",
        serde_json::json!({
            "date": "2026-09-01",
            "time": "07:00:00",
            "location": "Ward 4"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

fn sample_user() -> serde_json::Value {
    serde_json::json!({
        "firstName": "Amara",
        "lastName": "Perera",
        "contactNumber": "0777654321",
        "email": "amara@example.com",
        "password": "a-long-enough-password",
        "roleName": null
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_user_returns_201_without_password(pool: PgPool) {
    // USER role must exist before registration can reference it.
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/role/create-new-role",
        serde_json::json!({"roleName": "USER", "roleDescription": "Standard user"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/user/register", sample_user()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "amara@example.com");
    assert_eq!(json["data"]["roleName"], "USER");
    // The hash never leaves the server.
    assert!(json["data"].get("passwordHash").is_none());
    assert!(json["data"].get("password").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_user_short_password_returns_400(pool: PgPool) {
    let mut body = sample_user();
    body["password"] = serde_json::json!("short");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/user/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_duplicate_email_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/role/create-new-role",
        serde_json::json!({"roleName": "USER", "roleDescription": null}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/user/register", sample_user()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/user/register", sample_user()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_duplicate_role_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/role/create-new-role",
        serde_json::json!({"roleName": "ADMIN", "roleDescription": "Administrator"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/role/create-new-role",
        serde_json::json!({"roleName": "ADMIN", "roleDescription": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = get(app, "/role/get-all-roles").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
