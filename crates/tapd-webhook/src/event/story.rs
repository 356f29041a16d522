//! Story lifecycle payloads.

use serde::{Deserialize, Serialize};

use super::envelope::{Envelope, FieldChanges};
use crate::change_fields::ChangeFields;

/// Payload of `story::create`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryCreateEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub name: String,
    pub description: String,
    pub markdown_description: String,
    pub description_type: String,
    pub status: String,
    pub priority: String,
    pub priority_label: String,
    pub creator: String,
    /// Semicolon-terminated owner list, e.g. `alice;bob;`.
    pub owner: String,
    pub developer: String,
    pub cc: String,
    pub label: String,
    pub iteration_id: String,
    pub category_id: String,
    pub release_id: String,
    pub parent_id: String,
    pub ancestor_id: String,
    pub children_id: String,
    pub begin: String,
    pub due: String,
    pub size: String,
    pub effort: String,
    pub entity_type: String,
    pub workitem_type_id: String,
    pub templated_id: String,
}

/// Payload of `story::update`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryUpdateEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub change_fields: Option<ChangeFields>,
    #[serde(flatten)]
    pub changes: FieldChanges,
}

/// Payload of `story::delete`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryDeleteEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub op_type: String,
    pub old_iteration_id: String,
}
