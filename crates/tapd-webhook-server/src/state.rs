//! Application state shared across handlers.

use std::sync::Arc;

use tapd_webhook::Dispatcher;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Fully registered dispatcher. Read-only from here on.
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Creates the state, freezing the dispatcher's registrations.
    pub fn new(config: ServerConfig, dispatcher: Dispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }
}
