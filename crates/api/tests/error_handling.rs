//! Integration tests for error responses: the JSON error envelope,
//! authentication rejections, and malformed request handling.

mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get_unauthenticated, get_with_token, post_json};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_auth_header_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_unauthenticated(app, "/api/v1/brands").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(json["error"].as_str().unwrap().contains("Authorization"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_bearer_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_with_token(app, "/api/v1/brands", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_bearer_scheme_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/brands")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Bearer"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_error_envelope_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/clients/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    // Exactly the two envelope keys.
    assert!(json["error"].is_string());
    assert!(json["code"].is_string());
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validation_error_names_the_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/brands", serde_json::json!({"name": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_json_body_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/brands")
        .header(CONTENT_TYPE, "application/json")
        .header("authorization", format!("Bearer {}", common::auth_token()))
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_response_carries_request_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/brands").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
