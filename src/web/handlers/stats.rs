//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Path, response::IntoResponse};

/// Template for the statistics page of one link.
///
/// Renders `templates/stats.html`, which fetches the counters from
/// `/api/links/{code}`.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub code: String,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /code/{code}`
pub async fn stats_handler(Path(code): Path<String>) -> impl IntoResponse {
    StatsTemplate { code }
}
