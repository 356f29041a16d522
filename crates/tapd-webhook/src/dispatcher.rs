//! Dispatcher - per-kind subscriber buckets with concurrent fan-out.
//!
//! Concurrency model:
//! - Registration takes `&mut self` and dispatch takes `&self`, so a built
//!   dispatcher is shared as `Arc<Dispatcher>` with no locking. Late
//!   registration during live traffic is not supported.
//! - Each dispatch spawns one task per listener on a `JoinSet`, all before
//!   any result is observed.
//! - The first failure cancels a token shared by the siblings; the call
//!   still waits for every spawned task before returning.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::decode::parse_webhook_event;
use crate::error::{DispatchError, ListenerError, ListenerFailure};
use crate::event::*;
use crate::kind::EventKind;
use crate::listener::*;
use crate::subscriber::Subscriber;

/// Invokes one listener's kind-specific method.
type Deliver<L, E> =
    for<'a> fn(&'a L, &'a DispatchContext, &'a E) -> BoxFuture<'a, Result<(), ListenerError>>;

macro_rules! define_dispatcher {
    ($($variant:ident => $wire:tt, $shape:ident, $listener:ident, $method:ident,
        $probe:ident, $register:ident, $family:ident;)+) => {
        /// One insertion-ordered bucket per event kind.
        #[derive(Default)]
        struct Buckets {
            $($probe: Vec<Arc<dyn $listener>>,)+
        }

        impl Dispatcher {
            /// Files `subscriber` into every bucket whose contract it
            /// implements.
            ///
            /// Every known capability is probed and all matches are
            /// accepted. Registering the same subscriber twice delivers
            /// every event to it twice.
            pub fn register<S: Subscriber>(&mut self, subscriber: Arc<S>) -> &mut Self {
                let mut matched = 0usize;
                $(
                    if let Some(listener) = Arc::clone(&subscriber).$probe() {
                        self.buckets.$probe.push(listener);
                        matched += 1;
                    }
                )+
                debug!(
                    subscriber = std::any::type_name::<S>(),
                    capabilities = matched,
                    "registered webhook subscriber"
                );
                self
            }

            $(
                #[doc = concat!("Appends a listener to the `", $wire, "` bucket.")]
                pub fn $register(&mut self, listener: Arc<dyn $listener>) -> &mut Self {
                    self.buckets.$probe.push(listener);
                    self
                }
            )+

            /// Returns the number of registrations for `kind`.
            pub fn registrations(&self, kind: EventKind) -> usize {
                match kind {
                    $(EventKind::$variant => self.buckets.$probe.len(),)+
                }
            }

            /// Delivers `event` to every listener registered for its kind.
            ///
            /// Listeners run concurrently on the current tokio runtime and
            /// observe a child of `cancel`. An empty bucket succeeds
            /// immediately.
            ///
            /// # Errors
            ///
            /// [`DispatchError::Delivery`] if any listener returned an error
            /// or panicked. All listeners have finished by the time it is
            /// returned.
            pub async fn dispatch(
                &self,
                cancel: &CancellationToken,
                event: Event,
            ) -> Result<(), DispatchError> {
                match event {
                    $(
                        Event::$variant(event) => {
                            fan_out(
                                cancel,
                                EventKind::$variant,
                                self.buckets.$probe.as_slice(),
                                event,
                                |listener, ctx, event| listener.$method(ctx, event),
                            )
                            .await
                        }
                    )+
                }
            }
        }
    };
}

/// Registry of webhook subscribers, bucketed by event kind.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use tapd_webhook::Dispatcher;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn run(payload: &[u8]) -> Result<(), tapd_webhook::DispatchError> {
/// let dispatcher = Arc::new(Dispatcher::new());
/// dispatcher
///     .dispatch_payload(&CancellationToken::new(), payload)
///     .await
/// # }
/// ```
#[derive(Default)]
pub struct Dispatcher {
    buckets: Buckets,
}

for_each_event_kind!(define_dispatcher);

impl Dispatcher {
    /// Creates a dispatcher with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`register`](Self::register), for construction time.
    pub fn with_subscriber<S: Subscriber>(mut self, subscriber: Arc<S>) -> Self {
        self.register(subscriber);
        self
    }

    /// Total number of registrations across all kinds.
    pub fn len(&self) -> usize {
        EventKind::ALL.iter().map(|k| self.registrations(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes a raw payload and dispatches it.
    ///
    /// # Errors
    ///
    /// [`DispatchError::Decode`] before any listener runs if the payload is
    /// unusable, otherwise as [`dispatch`](Self::dispatch).
    pub async fn dispatch_payload(
        &self,
        cancel: &CancellationToken,
        payload: &[u8],
    ) -> Result<(), DispatchError> {
        let (_, event) = parse_webhook_event(payload)?;
        self.dispatch(cancel, event).await
    }
}

async fn fan_out<L, E>(
    cancel: &CancellationToken,
    kind: EventKind,
    bucket: &[Arc<L>],
    event: E,
    deliver: Deliver<L, E>,
) -> Result<(), DispatchError>
where
    L: ?Sized + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    if bucket.is_empty() {
        debug!(kind = %kind, "no listeners registered");
        return Ok(());
    }

    let token = cancel.child_token();
    let event = Arc::new(event);
    let mut set = JoinSet::new();

    for (index, listener) in bucket.iter().enumerate() {
        let listener = Arc::clone(listener);
        let event = Arc::clone(&event);
        let ctx = DispatchContext::new(kind, index, token.clone());
        set.spawn(async move {
            let outcome = AssertUnwindSafe(deliver(&*listener, &ctx, &*event))
                .catch_unwind()
                .await;
            let result = match outcome {
                Ok(result) => result,
                Err(panic) => Err(panic_message(panic).into()),
            };
            (index, result)
        });
    }

    debug!(kind = %kind, listeners = bucket.len(), "dispatching webhook event");

    let mut failures = Vec::new();
    while let Some(joined) = set.join_next().await {
        let failure = match joined {
            Ok((_, Ok(()))) => continue,
            Ok((index, Err(error))) => ListenerFailure {
                index: Some(index),
                error,
            },
            Err(join_error) => ListenerFailure {
                index: None,
                error: Box::new(join_error),
            },
        };

        warn!(kind = %kind, error = %failure, "webhook listener failed");
        if failures.is_empty() {
            token.cancel();
        }
        failures.push(failure);
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(DispatchError::Delivery {
            kind,
            attempted: bucket.len(),
            failures,
        })
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("listener panicked: {}", detail)
}
