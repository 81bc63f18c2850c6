//! RateLimitWindow - Per-actor request counter for one endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admission window row.
///
/// Expired windows are replaced by a fresh one, never accumulated into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitWindow {
    pub id: Uuid,
    pub identifier: String,
    pub endpoint: String,
    pub window_start: DateTime<Utc>,
    pub request_count: u32,
}

impl RateLimitWindow {
    /// Start a new window holding the current request
    pub fn start(identifier: &str, endpoint: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            identifier: identifier.to_string(),
            endpoint: endpoint.to_string(),
            window_start: now,
            request_count: 1,
        }
    }
}
