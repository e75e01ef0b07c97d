use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const FIELD_NAME: &str = "name";
pub const FIELD_CLASS: &str = "class";
pub const FIELD_DESCRIPTOR_TYPE: &str = "descriptorType";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_GET_METHOD: &str = "getMethod";
pub const FIELD_SET_METHOD: &str = "setMethod";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorType {
    Attribute,
    Operation,
}

impl DescriptorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptorType::Attribute => "attribute",
            DescriptorType::Operation => "operation",
        }
    }
}

impl fmt::Display for DescriptorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Getter,
    Setter,
    Operation,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Getter => "getter",
            Role::Setter => "setter",
            Role::Operation => "operation",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "getter" => Some(Role::Getter),
            "setter" => Some(Role::Setter),
            "operation" => Some(Role::Operation),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field map attached to every attribute and operation record.
///
/// Only string values are stored, so a descriptor can always be serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptor {
    fields: BTreeMap<String, String>,
}

impl Descriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn remove_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Removes every field whose name starts with `prefix` and returns the
    /// removed names.
    pub fn strip(&mut self, prefix: &str) -> Vec<String> {
        let reserved: Vec<String> = self
            .fields
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect();

        for name in &reserved {
            self.fields.remove(name);
        }

        reserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_only_prefixed_fields() {
        let mut descriptor = Descriptor::new()
            .with_field(FIELD_NAME, "Count")
            .with_field(FIELD_DESCRIPTOR_TYPE, "attribute")
            .with_field("org.weakref.jmx.descriptor.description", "hits")
            .with_field("org.weakref.jmx.descriptor.getMethodInstance", "getCount");

        let removed = descriptor.strip("org.weakref.jmx.");

        assert_eq!(removed.len(), 2);
        assert_eq!(descriptor.len(), 2);
        assert_eq!(descriptor.field(FIELD_NAME), Some("Count"));
        assert!(descriptor
            .field_names()
            .all(|name| !name.starts_with("org.weakref.jmx.")));
    }

    #[test]
    fn test_strip_on_clean_descriptor_is_noop() {
        let mut descriptor = Descriptor::new().with_field(FIELD_NAME, "start");
        assert!(descriptor.strip("org.weakref.jmx.").is_empty());
        assert_eq!(descriptor.len(), 1);
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::Getter, Role::Setter, Role::Operation] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Getter"), None);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let descriptor = Descriptor::new()
            .with_field(FIELD_NAME, "start")
            .with_field(FIELD_ROLE, Role::Operation.as_str());
        let json = serde_json::to_string(&descriptor).unwrap();
        assert_eq!(json, r#"{"name":"start","role":"operation"}"#);
    }
}
