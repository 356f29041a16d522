//! Bug lifecycle payloads.

use serde::{Deserialize, Serialize};

use super::envelope::{Envelope, FieldChanges};
use crate::change_fields::ChangeFields;

/// Payload of `bug::create`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BugCreateEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub title: String,
    pub description: String,
    pub status: String,
    pub severity: String,
    pub priority: String,
    pub reporter: String,
    pub current_owner: String,
    pub de: String,
    pub te: String,
    pub cc: String,
    pub module: String,
    pub iteration_id: String,
    pub release_id: String,
    pub version_report: String,
    pub source: String,
    pub bugtype: String,
    pub resolution: String,
    pub label: String,
}

/// Payload of `bug::update`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BugUpdateEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub change_fields: Option<ChangeFields>,
    #[serde(flatten)]
    pub changes: FieldChanges,
}

/// Payload of `bug::delete`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BugDeleteEvent {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub op_type: String,
    pub old_iteration_id: String,
}
