//! Fields shared by every webhook payload.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Common envelope carried by every event kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    /// Origin of the change (`web`, `api`, ...).
    pub event_from: String,
    /// Page the change was made from.
    pub referer: String,
    pub workspace_id: String,
    /// Display name of the acting user.
    pub current_user: String,
    /// Id of the entity, comment or iteration the event is about.
    pub id: String,
    pub secret: String,
    pub rio_token: String,
    #[serde(rename = "devproxy_host")]
    pub dev_proxy_host: String,
    pub queue_id: String,
    pub event_id: String,
    /// Creation time as sent by TAPD, e.g. `2024-12-30 17:41:02`.
    pub created: String,
}

impl Envelope {
    /// Parses [`created`](Self::created) as a local timestamp.
    ///
    /// TAPD occasionally sends a doubled space between date and time, so
    /// whitespace runs are collapsed before parsing.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let normalized = self.created.split_whitespace().collect::<Vec<_>>().join(" ");
        NaiveDateTime::parse_from_str(&normalized, CREATED_FORMAT).ok()
    }
}

/// Before/after snapshots of an update event.
///
/// Collects every `old_<field>` and `new_<field>` key of the payload, keyed
/// by `<field>`. Values are kept as raw JSON since custom fields may be
/// `null` or non-string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldChanges {
    pub old: BTreeMap<String, Value>,
    pub new: BTreeMap<String, Value>,
}

impl FieldChanges {
    /// Returns the previous value of `field` as a string, if it was one.
    pub fn old_str(&self, field: &str) -> Option<&str> {
        self.old.get(field).and_then(Value::as_str)
    }

    /// Returns the new value of `field` as a string, if it is one.
    pub fn new_str(&self, field: &str) -> Option<&str> {
        self.new.get(field).and_then(Value::as_str)
    }

    /// Returns `(old, new)` for a field present in both snapshots.
    pub fn pair(&self, field: &str) -> Option<(&Value, &Value)> {
        Some((self.old.get(field)?, self.new.get(field)?))
    }

    pub fn is_empty(&self) -> bool {
        self.old.is_empty() && self.new.is_empty()
    }
}

impl Serialize for FieldChanges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.old.len() + self.new.len()))?;
        for (field, value) in &self.old {
            map.serialize_entry(&format!("old_{}", field), value)?;
        }
        for (field, value) in &self.new {
            map.serialize_entry(&format!("new_{}", field), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldChanges {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut changes = FieldChanges::default();
        for (key, value) in entries {
            if let Some(field) = key.strip_prefix("old_") {
                changes.old.insert(field.to_string(), value);
            } else if let Some(field) = key.strip_prefix("new_") {
                changes.new.insert(field.to_string(), value);
            }
        }
        Ok(changes)
    }
}
