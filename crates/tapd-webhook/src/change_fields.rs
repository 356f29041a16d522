//! Changed-field names carried by update events.

use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered list of field names changed by an update.
///
/// On the wire this is a single comma-joined string such as
/// `"owner,modified"`. An absent value is modelled as
/// `Option<ChangeFields>::None`, which serializes to `null` rather than `""`.
///
/// The wire form cannot tell `[]` from `[""]`; both encode to `""`, which
/// decodes to `[]`. Lists whose entries are non-empty and comma-free round
/// trip exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeFields(Vec<String>);

impl ChangeFields {
    /// Creates a list from field names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// Parses the comma-joined wire form. The empty string is the empty list.
    pub fn from_wire(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self(raw.split(',').map(str::to_string).collect())
    }

    /// Returns the comma-joined wire form.
    pub fn to_wire(&self) -> String {
        self.0.join(",")
    }

    /// Returns true if `field` is among the changed fields.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f == field)
    }

    /// Consumes the list, returning the field names.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for ChangeFields {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for ChangeFields {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl<S: Into<String>> FromIterator<S> for ChangeFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Serialize for ChangeFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for ChangeFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}
