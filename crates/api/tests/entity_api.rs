//! HTTP-level integration tests for the client, workflow, team, and
//! dashboard endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Client CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_defaults_to_active(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/clients",
        serde_json::json!({"name": "Northwind", "company": "Northwind Traders"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Northwind");
    assert_eq!(json["data"]["status"], "active");
    assert!(json["data"]["email"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_with_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/clients",
        serde_json::json!({"name": "Bad Mail", "email": "not-an-email"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_client_status_transition_is_unrestricted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/clients",
        serde_json::json!({"name": "Cycler", "status": "completed"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // completed -> paused, no lifecycle check in the way.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/clients/{id}"),
        serde_json::json!({"status": "paused"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "paused");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_clients_newest_first(pool: PgPool) {
    for name in ["First In", "Second In"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/clients", serde_json::json!({"name": name})).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/clients").await;
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Second In", "First In"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_leaves_other_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/clients",
        serde_json::json!({"name": "Partial", "industry": "Retail"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/clients/{id}"),
        serde_json::json!({"company": "Partial LLC"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["company"], "Partial LLC");
    assert_eq!(json["data"]["industry"], "Retail");
    assert_eq!(json["data"]["name"], "Partial");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_client(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp =
        post_json(app, "/api/v1/clients", serde_json::json!({"name": "Gone"})).await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Workflow CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_workflow_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/workflows",
        serde_json::json!({"name": "Standard Onboarding"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["duration_days"], 30);
    assert_eq!(json["data"]["status"], "draft");
    assert_eq!(json["data"]["description"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_workflow_duration_must_be_positive(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/workflows",
        serde_json::json!({"name": "Instant", "duration_days": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_workflow_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/workflows",
        serde_json::json!({"name": "Promote Me"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/workflows/{id}"),
        serde_json::json!({"status": "active", "duration_days": 45}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "active");
    assert_eq!(json["data"]["duration_days"], 45);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_workflow_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/workflows/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Team member CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_team_member_defaults_to_viewer(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/team",
        serde_json::json!({"name": "Dana Fields", "email": "dana@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "viewer");
    assert_eq!(json["data"]["email"], "dana@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_member_requires_valid_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/team",
        serde_json::json!({"name": "No Mail", "email": "nope"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_team_member_role(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/team",
        serde_json::json!({"name": "Promotable", "email": "p@example.com"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/team/{id}"),
        serde_json::json!({"role": "manager"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "manager");
}

// ---------------------------------------------------------------------------
// Dashboard summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_summary_counts(pool: PgPool) {
    // Empty database: all zeros.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/dashboard/summary").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["clients"], 0);
    assert_eq!(json["data"]["workflows"], 0);
    assert_eq!(json["data"]["brands"], 0);
    assert_eq!(json["data"]["team_members"], 0);

    // Seed one of each except team members.
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/clients", serde_json::json!({"name": "C"})).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/workflows", serde_json::json!({"name": "W"})).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/brands", serde_json::json!({"name": "B"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dashboard/summary").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["clients"], 1);
    assert_eq!(json["data"]["workflows"], 1);
    assert_eq!(json["data"]["brands"], 1);
    assert_eq!(json["data"]["team_members"], 0);
}
