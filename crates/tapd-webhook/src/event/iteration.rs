//! Iteration lifecycle payloads.

use serde::{Deserialize, Serialize};

use super::envelope::{Envelope, FieldChanges};
use crate::change_fields::ChangeFields;

/// Payload of `iteration::create`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IterationCreateEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub name: String,
    pub description: String,
    pub markdown_description: String,
    pub description_type: String,
    pub status: String,
    pub creator: String,
    pub entity_type: String,
    pub workitem_type_id: String,
    pub attachment_token: String,
    /// JSON-encoded list of milestone dates, passed through verbatim.
    pub crucial_moment: String,
    #[serde(rename = "startdate")]
    pub start_date: String,
    #[serde(rename = "enddate")]
    pub end_date: String,
    pub templated_id: String,
}

/// Payload of `iteration::update`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IterationUpdateEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub change_fields: Option<ChangeFields>,
    #[serde(flatten)]
    pub changes: FieldChanges,
}

/// Payload of `iteration::delete`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IterationDeleteEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub op_type: String,
}
