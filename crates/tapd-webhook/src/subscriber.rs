//! Capability probing for heterogeneous subscribers.

use std::sync::Arc;

use crate::listener::*;

macro_rules! define_subscriber {
    ($($variant:ident => $wire:tt, $shape:ident, $listener:ident, $method:ident,
        $probe:ident, $register:ident, $family:ident;)+) => {
        /// An object that may listen to any subset of event kinds.
        ///
        /// Each method is a capability probe: it returns the subscriber as
        /// the matching listener trait object if the subscriber implements
        /// that contract, and `None` otherwise (the default).
        /// [`Dispatcher::register`](crate::Dispatcher::register) calls every
        /// probe and files the subscriber into each bucket that matches.
        ///
        /// Use the [`subscriber!`](crate::subscriber) macro rather than
        /// overriding probes by hand.
        pub trait Subscriber: Send + Sync + 'static {
            $(
                #[doc = concat!("Probes for [`", stringify!($listener), "`].")]
                fn $probe(self: Arc<Self>) -> Option<Arc<dyn $listener>> {
                    None
                }
            )+
        }
    };
}

for_each_event_kind!(define_subscriber);

/// Implements [`Subscriber`] for a type, enabling the listed capabilities.
///
/// Each entry pairs a probe name with the listener trait the type
/// implements for it.
///
/// ```
/// use async_trait::async_trait;
/// use tapd_webhook::{
///     subscriber, DispatchContext, ListenerError, StoryCreateEvent, StoryCreateListener,
/// };
///
/// struct Audit;
///
/// #[async_trait]
/// impl StoryCreateListener for Audit {
///     async fn on_story_create(
///         &self,
///         _ctx: &DispatchContext,
///         _event: &StoryCreateEvent,
///     ) -> Result<(), ListenerError> {
///         Ok(())
///     }
/// }
///
/// subscriber!(Audit: story_create => StoryCreateListener);
/// ```
#[macro_export]
macro_rules! subscriber {
    ($ty:ty : $($probe:ident => $listener:ident),+ $(,)?) => {
        impl $crate::Subscriber for $ty {
            $(
                fn $probe(
                    self: ::std::sync::Arc<Self>,
                ) -> ::std::option::Option<::std::sync::Arc<dyn $crate::$listener>> {
                    ::std::option::Option::Some(self)
                }
            )+
        }
    };
}
