//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// State shared by all request handlers.
///
/// Built once at startup. Cloning is cheap: every field is reference counted
/// or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    /// Instant the process started serving, used for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<PgLinkRepository>>) -> Self {
        Self {
            link_service,
            started_at: Instant::now(),
        }
    }
}
