//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::domain::repositories::{LinkOrder, LinkRepository};
use crate::error::{AppError, CODE_EXISTS_MESSAGE};
use crate::utils::db_error::is_code_collision;

/// Row shape shared by every query that returns a link.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    target_url: String,
    clicks: i64,
    last_clicked: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.code,
            row.target_url,
            row.clicks,
            row.last_clicked,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses bound parameters for every value. Uniqueness of `code` is enforced by
/// the `links_code_key` constraint and click counting by a single `UPDATE`,
/// so concurrent requests never lose increments.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, clicks, last_clicked, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, target_url)
            VALUES ($1, $2)
            RETURNING id, code, target_url, clicks, last_clicked, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_code_collision(&e) {
                tracing::debug!(code = %new_link.code, "Insert lost code uniqueness race");
                AppError::conflict(CODE_EXISTS_MESSAGE)
            } else {
                AppError::Store(e)
            }
        })?;

        Ok(row.into())
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        let target_url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET clicks = clicks + 1,
                last_clicked = GREATEST(NOW(), created_at)
            WHERE code = $1
            RETURNING target_url
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(target_url)
    }

    async fn list(&self, order: LinkOrder) -> Result<Vec<Link>, AppError> {
        let sql = match order {
            LinkOrder::Newest => {
                r#"
                SELECT id, code, target_url, clicks, last_clicked, created_at
                FROM links
                ORDER BY created_at DESC, id DESC
                "#
            }
            LinkOrder::MostClicked => {
                r#"
                SELECT id, code, target_url, clicks, last_clicked, created_at
                FROM links
                ORDER BY clicks DESC, created_at DESC, id DESC
                "#
            }
        };

        let rows = sqlx::query_as::<_, LinkRow>(sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn totals(&self) -> Result<LinkTotals, AppError> {
        let (links, clicks): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*)::BIGINT, COALESCE(SUM(clicks), 0)::BIGINT FROM links",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(LinkTotals { links, clicks })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
