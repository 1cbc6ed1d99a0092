//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Dashboard page
//! - `GET  /code/{code}`  - Statistics page for one link
//! - `GET  /healthz`      - Liveness probe (database ping)
//! - `/api/*`             - JSON API
//! - `GET  /{code}`       - Short link redirect (reserved paths filtered)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Reserved paths** - Keeps `/api`, `/favicon.ico` and friends out of the redirect handler
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{reserved_paths, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and per-route middleware.
///
/// Static routes win over `/{code}` in axum's matcher, so the redirect
/// handler only sees single-segment paths that are not real pages.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::dashboard_routes())
        .route("/healthz", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .route(
            "/{code}",
            get(redirect_handler).route_layer(middleware::from_fn(reserved_paths::layer)),
        )
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slashes trimmed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
