//! Comment lifecycle payloads for stories, tasks and bugs.
//!
//! The three entity types share one comment shape per action, but each kind
//! still gets its own type so listeners stay kind-specific.

use serde::{Deserialize, Serialize};

use super::envelope::Envelope;

/// Generates a comment payload struct. `add` payloads also carry a title.
macro_rules! define_comment_event {
    ($(#[$meta:meta])* $name:ident, with_title) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            #[serde(flatten)]
            pub envelope: Envelope,
            /// Status line TAPD renders above the comment.
            pub title: String,
            /// Comment body (HTML).
            pub description: String,
            pub author: String,
            /// Id of the story, task or bug the comment belongs to.
            pub entity_id: String,
        }
    };
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            #[serde(flatten)]
            pub envelope: Envelope,
            /// Comment body (HTML).
            pub description: String,
            pub author: String,
            /// Id of the story, task or bug the comment belongs to.
            pub entity_id: String,
        }
    };
}

define_comment_event!(
    /// Payload of `story_comment::add`.
    StoryCommentAddEvent, with_title
);
define_comment_event!(
    /// Payload of `story_comment::update`.
    StoryCommentUpdateEvent
);
define_comment_event!(
    /// Payload of `story_comment::delete`.
    StoryCommentDeleteEvent
);
define_comment_event!(
    /// Payload of `task_comment::add`.
    TaskCommentAddEvent, with_title
);
define_comment_event!(
    /// Payload of `task_comment::update`.
    TaskCommentUpdateEvent
);
define_comment_event!(
    /// Payload of `task_comment::delete`.
    TaskCommentDeleteEvent
);
define_comment_event!(
    /// Payload of `bug_comment::add`.
    BugCommentAddEvent, with_title
);
define_comment_event!(
    /// Payload of `bug_comment::update`.
    BugCommentUpdateEvent
);
define_comment_event!(
    /// Payload of `bug_comment::delete`.
    BugCommentDeleteEvent
);
