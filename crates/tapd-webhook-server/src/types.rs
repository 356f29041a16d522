//! Response DTOs.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Acknowledgement returned once every listener has succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub status: String,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
