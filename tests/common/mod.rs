#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::application::services::LinkService;
use tinylink::infrastructure::persistence::PgLinkRepository;
use tinylink::state::AppState;

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO links (code, target_url) VALUES ($1, $2) RETURNING id")
        .bind(code)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_clicked_link(pool: &PgPool, code: &str, url: &str, clicks: i64) {
    sqlx::query(
        "INSERT INTO links (code, target_url, clicks, last_clicked) VALUES ($1, $2, $3, NOW())",
    )
    .bind(code)
    .bind(url)
    .bind(clicks)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn get_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_service(pool: PgPool) -> Arc<LinkService<PgLinkRepository>> {
    let link_repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    Arc::new(LinkService::new(link_repo))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(create_test_service(pool))
}
