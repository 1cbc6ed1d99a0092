mod common;

use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;
use tinylink::routes::build_router;

fn test_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(build_router(state)).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    common::create_test_link(&pool, "redir01", "https://example.com/target").await;
    let server = test_server(pool.clone());

    let response = server.get("/redir01").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert_eq!(response.header("cache-control"), "no-store");
}

#[sqlx::test]
async fn test_redirect_counts_click(pool: PgPool) {
    common::create_test_link(&pool, "count01", "https://example.com").await;
    let server = test_server(pool.clone());

    server.get("/count01").await;

    let response = server.get("/api/links/count01").await;
    let body: Value = response.json();
    assert_eq!(body["clicks"], 1);
    assert!(body["lastClicked"].is_string());

    server.get("/count01").await;
    server.get("/count01").await;

    assert_eq!(common::get_clicks(&pool, "count01").await, 3);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    common::create_test_link(&pool, "exists1", "https://example.com").await;
    let server = test_server(pool.clone());

    let response = server.get("/nosuchcode").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(common::get_clicks(&pool, "exists1").await, 0);
}

#[sqlx::test]
async fn test_redirect_database_down(pool: PgPool) {
    common::create_test_link(&pool, "down001", "https://example.com").await;
    let server = test_server(pool.clone());

    pool.close().await;
    let response = server.get("/down001").await;

    assert_eq!(response.status_code(), 500);
    assert!(response.headers().get("location").is_none());

    let body: Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
}

#[sqlx::test]
async fn test_redirect_is_case_sensitive(pool: PgPool) {
    common::create_test_link(&pool, "CaseAb1", "https://example.com").await;
    let server = test_server(pool.clone());

    let response = server.get("/caseab1").await;
    assert_eq!(response.status_code(), 404);

    let response = server.get("/CaseAb1").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(common::get_clicks(&pool, "CaseAb1").await, 1);
}

#[sqlx::test]
async fn test_reserved_paths_are_not_resolved(pool: PgPool) {
    let server = test_server(pool);

    for path in ["/favicon.ico", "/api", "/code", "/robots.txt"] {
        let response = server.get(path).await;

        assert_eq!(response.status_code(), 404, "{path}");
        let body: Value = response.json();
        assert_eq!(body["error"], "Not found", "{path}");
    }
}

#[sqlx::test]
async fn test_redirect_after_delete(pool: PgPool) {
    common::create_test_link(&pool, "short01", "https://example.com").await;
    let server = test_server(pool);

    server.delete("/api/links/short01").await;
    let response = server.get("/short01").await;

    assert_eq!(response.status_code(), 404);
}
