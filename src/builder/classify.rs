use super::entry::{AttributeEntry, OperationEntry};
use mbeaninfo_core::config::{BuilderConfig, DuplicatePolicy};
use mbeaninfo_core::error::IntrospectionError;
use mbeaninfo_core::model::Role;
use mbeaninfo_core::reflect::{ClassHandle, Marker, MethodHandle};
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

pub(crate) const ACCESSOR_PATTERN: &str = r"^(get|set|is)(.+)$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccessorKind {
    Getter,
    Setter,
}

/// Splits an accessor name into its kind and the attribute name suffix.
/// The suffix keeps its original casing.
pub(crate) fn parse_accessor<'a>(
    pattern: &Regex,
    name: &'a str,
) -> Option<(AccessorKind, &'a str)> {
    let captures = pattern.captures(name)?;
    let kind = match captures.get(1)?.as_str() {
        "get" | "is" => AccessorKind::Getter,
        "set" => AccessorKind::Setter,
        _ => return None,
    };
    Some((kind, captures.get(2)?.as_str()))
}

/// The marker's description, or an empty string when it has none.
pub(crate) fn describe(marker: &dyn Marker) -> String {
    match marker.description() {
        Ok(description) => description,
        Err(e) => {
            trace!(marker = marker.annotation_type(), error = %e, "No description on marker");
            String::new()
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Classification {
    pub attributes: HashMap<String, AttributeEntry>,
    pub operations: Vec<OperationEntry>,
}

pub(crate) struct Classifier<'a> {
    pattern: &'a Regex,
    config: &'a BuilderConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(pattern: &'a Regex, config: &'a BuilderConfig) -> Self {
        Self { pattern, config }
    }

    /// Registers one operation per exported method and folds accessors that
    /// share an attribute name into a single attribute entry.
    pub fn classify<I>(
        &self,
        class: &ClassHandle,
        methods: I,
    ) -> Result<Classification, IntrospectionError>
    where
        I: IntoIterator<Item = (MethodHandle, Arc<dyn Marker>)>,
    {
        let mut classification = Classification::default();

        for (method, marker) in methods {
            let description = describe(marker.as_ref());
            let mut operation = OperationEntry::new(class.name(), method.clone(), description);

            if let Some((kind, suffix)) = parse_accessor(self.pattern, method.name()) {
                let attribute_name = self.config.attribute_naming.apply(suffix);
                let attribute = classification
                    .attributes
                    .entry(attribute_name.clone())
                    .or_insert_with(|| {
                        AttributeEntry::new(attribute_name, operation.description.clone())
                    });

                let (slot, role) = match kind {
                    AccessorKind::Getter => (&mut attribute.getter, Role::Getter),
                    AccessorKind::Setter => (&mut attribute.setter, Role::Setter),
                };
                self.assign(&attribute.name, slot, role, &method)?;
                operation.role = role;
            }

            trace!(method = %method, role = %operation.role, "Classified method");
            classification.operations.push(operation);
        }

        Ok(classification)
    }

    fn assign(
        &self,
        attribute: &str,
        slot: &mut Option<MethodHandle>,
        role: Role,
        method: &MethodHandle,
    ) -> Result<(), IntrospectionError> {
        if let Some(existing) = slot.as_ref() {
            if existing != method && self.config.duplicate_policy == DuplicatePolicy::Reject {
                return Err(IntrospectionError::DuplicateAccessor {
                    attribute: attribute.to_string(),
                    role: role.to_string(),
                    first: existing.name().to_string(),
                    second: method.name().to_string(),
                });
            }
        }

        *slot = Some(method.clone());
        Ok(())
    }
}
