//! Typed webhook payloads.
//!
//! One plain struct per [`EventKind`], grouped by entity, plus the [`Event`]
//! union that the decoder produces and the dispatcher consumes.

mod bug;
mod comment;
mod envelope;
mod iteration;
mod story;
mod task;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use bug::{BugCreateEvent, BugDeleteEvent, BugUpdateEvent};
pub use comment::{
    BugCommentAddEvent, BugCommentDeleteEvent, BugCommentUpdateEvent, StoryCommentAddEvent,
    StoryCommentDeleteEvent, StoryCommentUpdateEvent, TaskCommentAddEvent,
    TaskCommentDeleteEvent, TaskCommentUpdateEvent,
};
pub use envelope::{Envelope, FieldChanges};
pub use iteration::{IterationCreateEvent, IterationDeleteEvent, IterationUpdateEvent};
pub use story::{StoryCreateEvent, StoryDeleteEvent, StoryUpdateEvent};
pub use task::{TaskCreateEvent, TaskDeleteEvent, TaskUpdateEvent};

use crate::kind::EventKind;

/// Implemented by every payload shape.
pub trait WebhookEvent: DeserializeOwned + Serialize + Into<Event> + Send + Sync + 'static {
    /// The kind this shape is decoded for.
    const KIND: EventKind;

    /// Returns the common envelope.
    fn envelope(&self) -> &Envelope;
}

macro_rules! define_event {
    ($($variant:ident => $wire:tt, $shape:ident, $listener:ident, $method:ident,
        $probe:ident, $register:ident, $family:ident;)+) => {
        /// A decoded webhook event, tagged by kind.
        ///
        /// Serializes back to the wire object, `event` key included.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "event")]
        pub enum Event {
            $(
                #[serde(rename = $wire)]
                $variant($shape),
            )+
        }

        impl Event {
            /// Returns the kind of this event.
            pub fn kind(&self) -> EventKind {
                match self {
                    $(Event::$variant(_) => EventKind::$variant,)+
                }
            }

            /// Returns the common envelope.
            pub fn envelope(&self) -> &Envelope {
                match self {
                    $(Event::$variant(e) => &e.envelope,)+
                }
            }
        }

        $(
            impl WebhookEvent for $shape {
                const KIND: EventKind = EventKind::$variant;

                fn envelope(&self) -> &Envelope {
                    &self.envelope
                }
            }

            impl From<$shape> for Event {
                fn from(event: $shape) -> Self {
                    Event::$variant(event)
                }
            }
        )+
    };
}

for_each_event_kind!(define_event);
