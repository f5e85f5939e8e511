//! Response bodies produced by the bootstrap itself.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

pub const HEALTH_STATUS: &str = "Backend is running";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const NOT_FOUND_MESSAGE: &str = "Route not found";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(serialize_with = "millis_utc")]
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            status: HEALTH_STATUS.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Body of every 500 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

impl ErrorBody {
    pub fn internal(error: impl Into<String>) -> Self {
        Self {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundBody {
    pub message: String,
}

impl Default for NotFoundBody {
    fn default() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

/// `2026-10-16T09:30:00.123Z`: RFC 3339, UTC, millisecond precision.
fn millis_utc<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
