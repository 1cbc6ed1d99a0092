mod common;

use sqlx::PgPool;
use tinylink::AppError;
use tokio::task::JoinSet;

const CONCURRENT_VISITS: i64 = 50;

#[sqlx::test]
async fn test_concurrent_redirects_lose_no_clicks(pool: PgPool) {
    common::create_test_link(&pool, "busy001", "https://example.com").await;
    let service = common::create_test_service(pool.clone());

    let mut tasks = JoinSet::new();
    for _ in 0..CONCURRENT_VISITS {
        let service = service.clone();
        tasks.spawn(async move { service.resolve_and_count("busy001").await });
    }

    while let Some(result) = tasks.join_next().await {
        assert_eq!(result.unwrap().unwrap(), "https://example.com");
    }

    assert_eq!(common::get_clicks(&pool, "busy001").await, CONCURRENT_VISITS);
}

#[sqlx::test]
async fn test_concurrent_creates_with_same_code(pool: PgPool) {
    let service = common::create_test_service(pool.clone());

    let mut tasks = JoinSet::new();
    for i in 0..2 {
        let service = service.clone();
        tasks.spawn(async move {
            service
                .create_link(
                    format!("https://racer{i}.example"),
                    Some("racecar".to_string()),
                )
                .await
        });
    }

    let mut created = 0;
    let mut conflicts = 0;
    while let Some(result) = tasks.join_next().await {
        match result.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::Conflict(_)) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 1);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_generated_codes_are_distinct(pool: PgPool) {
    let service = common::create_test_service(pool.clone());

    let mut tasks = JoinSet::new();
    for i in 0..20 {
        let service = service.clone();
        tasks.spawn(async move {
            service
                .create_link(format!("https://site{i}.example"), None)
                .await
        });
    }

    let mut codes = std::collections::HashSet::new();
    while let Some(result) = tasks.join_next().await {
        let link = result.unwrap().unwrap();
        assert!(codes.insert(link.code));
    }

    assert_eq!(codes.len(), 20);
    assert_eq!(common::count_links(&pool).await, 20);
}
