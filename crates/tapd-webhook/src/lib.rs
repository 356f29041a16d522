//! Typed decoding and concurrent dispatch of TAPD webhook events.
//!
//! This crate provides:
//! - One plain payload struct per supported event kind
//! - [`parse_webhook_event`] to turn a raw JSON body into a typed [`Event`]
//! - A [`Dispatcher`] that files heterogeneous subscribers into per-kind
//!   buckets and delivers each event to its bucket concurrently
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use tapd_webhook::{
//!     subscriber, CancellationToken, DispatchContext, Dispatcher, ListenerError,
//!     StoryCreateEvent, StoryCreateListener,
//! };
//!
//! struct Notifier;
//!
//! #[async_trait]
//! impl StoryCreateListener for Notifier {
//!     async fn on_story_create(
//!         &self,
//!         _ctx: &DispatchContext,
//!         event: &StoryCreateEvent,
//!     ) -> Result<(), ListenerError> {
//!         println!("new story {} in {}", event.name, event.envelope.workspace_id);
//!         Ok(())
//!     }
//! }
//!
//! subscriber!(Notifier: story_create => StoryCreateListener);
//!
//! # async fn run(body: &[u8]) -> Result<(), tapd_webhook::DispatchError> {
//! let dispatcher = Arc::new(Dispatcher::new().with_subscriber(Arc::new(Notifier)));
//! dispatcher.dispatch_payload(&CancellationToken::new(), body).await
//! # }
//! ```

#[macro_use]
mod table;

pub mod change_fields;
pub mod decode;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod kind;
pub mod listener;
pub mod subscriber;

pub use change_fields::ChangeFields;
pub use decode::{classify, decode, parse_webhook_event};
pub use dispatcher::Dispatcher;
pub use error::{DecodeError, DispatchError, ListenerError, ListenerFailure, Result};
pub use event::*;
pub use kind::{EventFamily, EventKind};
pub use listener::*;
pub use subscriber::Subscriber;
pub use tokio_util::sync::CancellationToken;
