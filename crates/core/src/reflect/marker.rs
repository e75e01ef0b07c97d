use crate::error::MarkerError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Tag attached to an exported method.
///
/// The info builder does not know a marker's declared shape. It only probes
/// for a zero-argument `description` member and adopts its string form.
pub trait Marker: fmt::Debug + Send + Sync {
    /// Qualified name of the marker type.
    fn annotation_type(&self) -> &str;

    fn description(&self) -> Result<String, MarkerError> {
        Err(MarkerError::NoSuchMember {
            annotation_type: self.annotation_type().to_string(),
            member: "description".to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementValue {
    String(String),
    Int(i64),
    Bool(bool),
    Enum { type_name: String, constant: String },
    Array(Vec<ElementValue>),
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementValue::String(s) => write!(f, "{}", s),
            ElementValue::Int(i) => write!(f, "{}", i),
            ElementValue::Bool(b) => write!(f, "{}", b),
            ElementValue::Enum { constant, .. } => write!(f, "{}", constant),
            ElementValue::Array(values) => {
                let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

impl From<&str> for ElementValue {
    fn from(value: &str) -> Self {
        ElementValue::String(value.to_string())
    }
}

impl From<String> for ElementValue {
    fn from(value: String) -> Self {
        ElementValue::String(value)
    }
}

impl From<i64> for ElementValue {
    fn from(value: i64) -> Self {
        ElementValue::Int(value)
    }
}

impl From<bool> for ElementValue {
    fn from(value: bool) -> Self {
        ElementValue::Bool(value)
    }
}

/// An annotation instance: a type name plus named element values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    type_name: String,
    elements: BTreeMap<String, ElementValue>,
    inaccessible: BTreeSet<String>,
}

impl Annotation {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            elements: BTreeMap::new(),
            inaccessible: BTreeSet::new(),
        }
    }

    pub fn with_element(mut self, name: impl Into<String>, value: impl Into<ElementValue>) -> Self {
        self.elements.insert(name.into(), value.into());
        self
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_element("description", ElementValue::String(description.into()))
    }

    /// Marks a member as present but not accessible to callers.
    pub fn with_inaccessible(mut self, name: impl Into<String>) -> Self {
        self.inaccessible.insert(name.into());
        self
    }

    pub fn element(&self, name: &str) -> Result<&ElementValue, MarkerError> {
        if self.inaccessible.contains(name) {
            return Err(MarkerError::Inaccessible {
                annotation_type: self.type_name.clone(),
                member: name.to_string(),
            });
        }

        self.elements
            .get(name)
            .ok_or_else(|| MarkerError::NoSuchMember {
                annotation_type: self.type_name.clone(),
                member: name.to_string(),
            })
    }
}

impl Marker for Annotation {
    fn annotation_type(&self) -> &str {
        &self.type_name
    }

    fn description(&self) -> Result<String, MarkerError> {
        self.element("description").map(ToString::to_string)
    }
}
