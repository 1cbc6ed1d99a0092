//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// Format checks on `url` and `code` happen in the service; the DTO only caps
/// the URL length at [`crate::utils::url_validator::MAX_TARGET_URL_LENGTH`].
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Absolute `http`/`https` URL to redirect to.
    #[validate(length(max = 8192, message = "URL is too long. Maximum length is 8192 characters."))]
    pub url: Option<String>,

    /// Optional custom code (6-8 ASCII letters or digits).
    pub code: Option<String>,
}

impl CreateLinkRequest {
    /// Returns the URL or an empty string when it was omitted.
    ///
    /// An empty URL fails validation with
    /// [`crate::utils::url_validator::INVALID_URL_MESSAGE`].
    pub fn url_or_empty(&self) -> String {
        self.url.clone().unwrap_or_default()
    }
}

/// JSON representation of a link.
///
/// `lastClicked` is `null` until the first redirect. Timestamps are RFC 3339.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target_url: link.target_url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Response returned after a link is deleted.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteLinkResponse {
    pub deleted: bool,
    pub code: String,
}
