//! Handler for health check endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports whether the service can reach its database.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response Codes
///
/// - **200 OK**: database answered `SELECT 1`
/// - **500 Internal Server Error**: database unreachable
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "version": "0.1.0",
///   "uptime": "42s",
///   "database": "connected",
///   "timestamp": "2025-01-01T12:00:00Z"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.link_service.ping().await {
        Ok(()) => {
            let uptime = state.started_at.elapsed().as_secs();

            let body = HealthResponse {
                ok: true,
                version,
                uptime: Some(format!("{uptime}s")),
                database: "connected".to_string(),
                timestamp: Some(Utc::now()),
                error: None,
            };

            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");

            let body = HealthResponse {
                ok: false,
                version,
                uptime: None,
                database: "disconnected".to_string(),
                timestamp: None,
                error: Some("Database connection failed".to_string()),
            };

            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
