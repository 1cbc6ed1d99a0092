//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Liveness report for the service and its database.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,

    pub database: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
