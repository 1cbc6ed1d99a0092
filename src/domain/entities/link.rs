//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short code mapped to a target URL, together with its click counters.
///
/// `clicks` only ever grows and `last_clicked`, once set, is never earlier
/// than `created_at`. Both are maintained by the store, not by this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            clicks,
            last_clicked,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// Counters are not part of the input: a fresh link always starts at zero
/// clicks with no last click.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}

/// Aggregate counters over all stored links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkTotals {
    pub links: i64,
    pub clicks: i64,
}
