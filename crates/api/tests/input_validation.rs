//! Input is validated before a database connection is requested.
//!
//! The pool here points at a port nothing listens on, so any handler that
//! reaches the database fails with 500. Malformed requests must still be
//! answered with 422.

mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, build_app, get, patch_json, post_json, send};
use serde_json::json;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

fn unreachable_pool() -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("test")
        .password("test")
        .database("test");

    MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(300))
        .connect_lazy_with(options)
}

#[tokio::test]
async fn invalid_create_body_is_422_without_database() {
    let app = build_app(unreachable_pool());
    let response = post_json(app, "/heroes/", json!({"name": "Deadpool"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["detail"][0]["loc"], json!(["body", "secret_name"]));
}

#[tokio::test]
async fn overlong_name_is_422_without_database() {
    let app = build_app(unreachable_pool());
    let response = post_json(
        app,
        "/heroes/",
        json!({"name": "x".repeat(256), "secret_name": "Wade Wilson"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn invalid_patch_body_is_422_without_database() {
    let app = build_app(unreachable_pool());
    let response = patch_json(app, "/heroes/1", json!({"age": "old"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["detail"][0]["loc"], json!(["body", "age"]));
}

#[tokio::test]
async fn out_of_range_limit_is_422_without_database() {
    let app = build_app(unreachable_pool());
    let response = get(app, "/heroes/?limit=101").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_integer_id_is_422_without_database() {
    let app = build_app(unreachable_pool());
    let response = get(app, "/heroes/abc").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["detail"][0]["loc"], json!(["path", "hero_id"]));
}

#[tokio::test]
async fn valid_request_reaches_database_and_fails() {
    let app = build_app(unreachable_pool());
    let response = get(app, "/heroes/1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn cors_preflight_allows_content_type_only() {
    let app = build_app(unreachable_pool());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/heroes/")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert_eq!(allowed, "content-type");
}
