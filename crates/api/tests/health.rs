//! Integration tests for the root greeting, health check and general HTTP
//! behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::MySqlPool;

#[sqlx::test(migrations = false)]
async fn root_returns_greeting(pool: MySqlPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"message": "Hello world!"}));
}

#[sqlx::test(migrations = false)]
async fn health_check_reports_database(pool: MySqlPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = false)]
async fn unknown_route_returns_json_404(pool: MySqlPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/villains/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Not Found");
}

#[sqlx::test(migrations = false)]
async fn response_contains_x_request_id_header(pool: MySqlPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}
