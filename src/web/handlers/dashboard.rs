//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html`: a creation form and a searchable,
/// sortable table of links. Data is loaded in the browser from `/api/links`.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub version: &'static str,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn dashboard_handler() -> impl IntoResponse {
    DashboardTemplate {
        version: env!("CARGO_PKG_VERSION"),
    }
}
