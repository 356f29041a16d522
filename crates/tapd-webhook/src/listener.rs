//! Per-kind listener contracts.
//!
//! Each event kind has a single-method async trait. A subscriber implements
//! any subset of them and exposes the ones it implements through
//! [`Subscriber`](crate::Subscriber).

use async_trait::async_trait;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

use crate::error::ListenerError;
use crate::event::*;
use crate::kind::EventKind;

/// Per-invocation context handed to every listener.
///
/// The cancellation token is shared by all listeners of one dispatch call.
/// It is cancelled when the caller cancels or when a sibling listener fails;
/// long-running listeners should check it and return early.
#[derive(Debug, Clone)]
pub struct DispatchContext {
    kind: EventKind,
    position: usize,
    cancel: CancellationToken,
}

impl DispatchContext {
    pub(crate) fn new(kind: EventKind, position: usize, cancel: CancellationToken) -> Self {
        Self {
            kind,
            position,
            cancel,
        }
    }

    /// Kind of the event being delivered.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Position of this listener in its bucket.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves once the dispatch call is cancelled.
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.cancel.cancelled()
    }

    /// Returns the shared cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }
}

macro_rules! define_listeners {
    ($($variant:ident => $wire:tt, $shape:ident, $listener:ident, $method:ident,
        $probe:ident, $register:ident, $family:ident;)+) => {
        $(
            #[doc = concat!("Receives `", $wire, "` events.")]
            #[async_trait]
            pub trait $listener: Send + Sync {
                #[doc = concat!("Handles one `", $wire, "` event.")]
                async fn $method(
                    &self,
                    ctx: &DispatchContext,
                    event: &$shape,
                ) -> Result<(), ListenerError>;
            }
        )+
    };
}

for_each_event_kind!(define_listeners);
