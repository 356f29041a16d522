//! Health check handler.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /health - Liveness of the receiver, independent of any subscriber.
///
/// Never touches the dispatcher, so it stays green while listeners fail.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.config.uptime_seconds(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use tapd_webhook::Dispatcher;

    #[tokio::test]
    async fn test_health_handler() {
        let state = AppState::new(ServerConfig::default(), Dispatcher::new());
        let response = health(State(state)).await;

        assert_eq!(response.status, "ok");
        assert!(!response.version.is_empty());
    }
}
