//! JSON response bodies.

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the store answered a readiness probe, `unavailable` otherwise.
    pub status: String,
    pub version: String,
    /// Which store backs the process: `mysql` or `memory`.
    pub store: String,
    /// RFC 3339.
    pub timestamp: String,
}

impl HealthResponse {
    pub fn new(reachable: bool, version: impl Into<String>, store: impl Into<String>) -> Self {
        Self {
            status: if reachable { "ok" } else { "unavailable" }.to_string(),
            version: version.into(),
            store: store.into(),
            timestamp: String::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
