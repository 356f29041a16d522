//! Server configuration.

use std::time::Instant;

/// Default route webhooks are posted to.
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";

/// Webhook server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Route TAPD posts webhooks to. Always starts with `/`.
    pub path: String,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl ServerConfig {
    /// Creates a configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Sets the webhook route. A missing leading `/` is added.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        self
    }

    /// Sets the CORS origins.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            path: DEFAULT_WEBHOOK_PATH.to_string(),
            cors_origins: vec!["*".to_string()],
            start_time: Instant::now(),
        }
    }
}
