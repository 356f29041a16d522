//! Event kind discriminators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DecodeError;

/// Broad grouping of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFamily {
    /// Create/update/delete of stories, tasks and bugs.
    Entity,
    /// Add/update/delete of comments on stories, tasks and bugs.
    Comment,
    /// Create/update/delete of iterations.
    Iteration,
}

macro_rules! define_event_kind {
    ($($variant:ident => $wire:tt, $shape:ident, $listener:ident, $method:ident,
        $probe:ident, $register:ident, $family:ident;)+) => {
        /// Closed vocabulary of webhook event kinds.
        ///
        /// On the wire a kind is the value of the payload's `event` key,
        /// formatted as `<entity>::<action>`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EventKind {
            $(
                #[doc = concat!("`", $wire, "`")]
                $variant,
            )+
        }

        impl EventKind {
            /// Every known kind, in declaration order.
            pub const ALL: &'static [EventKind] = &[$(EventKind::$variant),+];

            /// Returns the wire identifier.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(EventKind::$variant => $wire,)+
                }
            }

            /// Returns the family this kind belongs to.
            pub fn family(self) -> EventFamily {
                match self {
                    $(EventKind::$variant => EventFamily::$family,)+
                }
            }
        }

        impl FromStr for EventKind {
            type Err = DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(EventKind::$variant),)+
                    other => Err(DecodeError::UnsupportedKind(other.to_string())),
                }
            }
        }
    };
}

for_each_event_kind!(define_event_kind);

impl EventKind {
    /// Returns the entity part of the identifier (`bug_comment` for
    /// `bug_comment::add`).
    pub fn entity(self) -> &'static str {
        self.as_str()
            .split_once("::")
            .map_or(self.as_str(), |(entity, _)| entity)
    }

    /// Returns the action part of the identifier (`add` for
    /// `bug_comment::add`).
    pub fn action(self) -> &'static str {
        self.as_str()
            .split_once("::")
            .map_or("", |(_, action)| action)
    }

    /// Returns true for update kinds that carry changed-field data.
    pub fn carries_changes(self) -> bool {
        matches!(
            self,
            EventKind::StoryUpdate
                | EventKind::TaskUpdate
                | EventKind::BugUpdate
                | EventKind::IterationUpdate
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
