mod common;

use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;
use tinylink::routes::build_router;

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["database"], "connected");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime"].as_str().unwrap().ends_with('s'));
    assert!(body["timestamp"].is_string());
    assert!(body.get("error").is_none());
}

#[sqlx::test]
async fn test_health_check_database_down(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(build_router(state)).unwrap();

    pool.close().await;
    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    assert_eq!(body["database"], "disconnected");
    assert_eq!(body["error"], "Database connection failed");
}

#[sqlx::test]
async fn test_dashboard_pages_render(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/").await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("tinylink"));

    let response = server.get("/code/mycode1").await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("mycode1"));
}
