//! Integration tests for `GET /health` and the cross-cutting middleware.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use common::{body_json, get};
use sqlx::SqlitePool;
use tower::ServiceExt;

use notify_api::config::ServerConfig;
use notify_api::router::build_app_router;
use notify_api::state::AppState;

fn app_with_database_url(pool: SqlitePool, database_url: &str) -> Router {
    let config = ServerConfig {
        database_url: database_url.to_string(),
        ..common::test_config()
    };
    build_app_router(AppState::new(pool, config))
}

// ---------------------------------------------------------------------------
// Storage reporting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_in_memory_storage(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["storage"], "in_memory");
    assert_eq!(json["database_reachable"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_file_storage(pool: SqlitePool) {
    let app = app_with_database_url(pool, "sqlite://notify.db");
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["storage"], "file");
}

#[tokio::test]
async fn health_is_unavailable_once_storage_is_closed() {
    let pool = notify_db::create_pool(notify_db::DEFAULT_DATABASE_URL)
        .await
        .unwrap();
    pool.close().await;

    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["database_reachable"], false);
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn client_request_id_is_echoed(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .uri("/notifications")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unrouted_path_uses_error_envelope(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/notification").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "No route for GET /notification");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_allows_configured_origin(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/notifications")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "PATCH")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn in_memory_database_serves_requests() {
    let pool = notify_db::create_pool(notify_db::DEFAULT_DATABASE_URL)
        .await
        .unwrap();
    notify_db::run_migrations(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/notifications",
        serde_json::json!({"title": "A", "message": "a", "role": "ops"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/notifications").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}
