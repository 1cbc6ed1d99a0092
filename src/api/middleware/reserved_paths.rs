//! Guard that keeps reserved and file-like paths away from the redirect handler.
//!
//! Real routes such as `/api/links` or `/healthz` are matched by the router
//! before `/{code}`. What is left are bare reserved segments (`/api`, `/code`)
//! and asset-looking paths (`/favicon.ico`, `/_next/...`, `/robots.txt`).
//! None of them is a short code, so they get a 404 without touching the store.

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ErrorBody;

/// Path segments that are never treated as short codes.
pub const RESERVED_SEGMENTS: &[&str] = &["api", "code", "healthz", "_next", "favicon.ico"];

/// Prefix used by bundled frontend assets.
const INTERNAL_PREFIX: &str = "_next";

/// Returns true if `path` must not be resolved as a short code.
pub fn is_reserved_path(path: &str) -> bool {
    let trimmed = path.trim_start_matches('/');
    let first_segment = trimmed.split('/').next().unwrap_or_default();

    RESERVED_SEGMENTS.contains(&first_segment)
        || first_segment.starts_with(INTERNAL_PREFIX)
        || trimmed.contains('.')
}

/// Rejects reserved paths with 404 before the redirect handler runs.
pub async fn layer(request: Request, next: Next) -> Response {
    if is_reserved_path(request.uri().path()) {
        tracing::debug!(path = %request.uri().path(), "Reserved path skipped");
        return (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found"))).into_response();
    }

    next.run(request).await
}
