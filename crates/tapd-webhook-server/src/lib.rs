//! HTTP boundary for TAPD webhooks.
//!
//! This crate wraps a [`tapd_webhook::Dispatcher`] in an axum router:
//! - `POST /webhook` (configurable) decodes the body and dispatches it
//! - `GET /health` reports version and uptime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tapd_webhook::Dispatcher;
//! use tapd_webhook_server::{serve, AppState, LogSubscriber, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = Dispatcher::new().with_subscriber(Arc::new(LogSubscriber));
//!     let state = AppState::new(ServerConfig::default(), dispatcher);
//!
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod subscribers;
pub mod types;

pub use config::ServerConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
pub use subscribers::LogSubscriber;
