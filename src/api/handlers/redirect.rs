//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reserved paths are filtered out by [`crate::api::middleware::reserved_paths`]
/// 2. In one statement, match the code (exact, case-sensitive), increment
///    `clicks`, set `lastClicked` and read back the target
/// 3. Return `302 Found` with the target in `Location`
///
/// The click is committed before the redirect is sent. If counting fails the
/// visitor gets a 500 instead of an uncounted redirect. Stored targets never
/// contain control characters (checked on create and by the
/// `links_target_url_header_safe` constraint), so every counted target is a
/// valid `Location` value.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error on database failures.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state.link_service.resolve_and_count(&code).await?;

    let location = HeaderValue::try_from(target_url.as_str())
        .map_err(|e| AppError::internal(format!("unusable target for {code}: {e}")))?;

    debug!(code = %code, target = %target_url, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
    )
        .into_response())
}
