//! Task lifecycle payloads.

use serde::{Deserialize, Serialize};

use super::envelope::{Envelope, FieldChanges};
use crate::change_fields::ChangeFields;

/// Payload of `task::create`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskCreateEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub name: String,
    pub status: String,
    pub story_id: String,
    pub iteration_id: String,
    pub creator: String,
    pub description: String,
    pub markdown_description: String,
    pub description_type: String,
    pub effort: String,
    pub release_id: String,
    pub owner: String,
    pub entity_type: String,
    pub parent_id: String,
    pub ancestor_id: String,
    pub children_id: String,
}

/// Payload of `task::update`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskUpdateEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub change_fields: Option<ChangeFields>,
    #[serde(flatten)]
    pub changes: FieldChanges,
}

/// Payload of `task::delete`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDeleteEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub op_type: String,
    pub old_iteration_id: String,
}
