use super::descriptor::{
    Descriptor, DescriptorType, Role, FIELD_DESCRIPTOR_TYPE, FIELD_NAME, FIELD_ROLE,
};
use crate::error::IntrospectionError;
use crate::reflect::{MethodHandle, TypeRef};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    Info,
    Action,
    ActionInfo,
    Unknown,
}

/// Fills in `name` and `descriptorType` when absent and rejects a descriptor
/// that names a different record or type.
fn validate_descriptor(
    descriptor: &mut Descriptor,
    name: &str,
    descriptor_type: DescriptorType,
) -> Result<(), IntrospectionError> {
    match descriptor.field(FIELD_NAME) {
        None => descriptor.set_field(FIELD_NAME, name),
        Some(found) if found != name => {
            return Err(IntrospectionError::InvalidDescriptor {
                name: name.to_string(),
                reason: format!("name field is {}", found),
            })
        }
        Some(_) => {}
    }

    match descriptor.field(FIELD_DESCRIPTOR_TYPE) {
        None => descriptor.set_field(FIELD_DESCRIPTOR_TYPE, descriptor_type.as_str()),
        Some(found) if !found.eq_ignore_ascii_case(descriptor_type.as_str()) => {
            return Err(IntrospectionError::InvalidDescriptor {
                name: name.to_string(),
                reason: format!("descriptorType is {}, expected {}", found, descriptor_type),
            })
        }
        Some(_) => {}
    }

    Ok(())
}

/// A readable and/or writable property of the managed object.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeInfo {
    pub name: String,
    pub description: String,
    pub attribute_type: String,
    pub readable: bool,
    pub writable: bool,
    pub is_is: bool,
    pub descriptor: Descriptor,
    #[serde(skip)]
    pub getter: Option<MethodHandle>,
    #[serde(skip)]
    pub setter: Option<MethodHandle>,
}

impl AttributeInfo {
    /// Derives the attribute type from its accessors.
    ///
    /// A getter takes no parameters and returns a value, a setter takes
    /// exactly one parameter, and when both accessors exist they agree on
    /// the type. `is_is` is only set for an `is` getter returning a boolean.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        getter: Option<MethodHandle>,
        setter: Option<MethodHandle>,
        mut descriptor: Descriptor,
    ) -> Result<Self, IntrospectionError> {
        let name = name.into();
        let invalid = |reason: String| IntrospectionError::InvalidAttribute {
            attribute: name.clone(),
            reason,
        };

        let mut attribute_type: Option<&TypeRef> = None;

        if let Some(getter) = &getter {
            if getter.parameter_count() != 0 {
                return Err(invalid(format!(
                    "getter {} takes {} parameters",
                    getter.name(),
                    getter.parameter_count()
                )));
            }
            if getter.return_type().is_void() {
                return Err(invalid(format!("getter {} returns void", getter.name())));
            }
            attribute_type = Some(getter.return_type());
        }

        if let Some(setter) = &setter {
            let parameter_type = match setter.parameter_types() {
                [single] => single,
                params => {
                    return Err(invalid(format!(
                        "setter {} takes {} parameters",
                        setter.name(),
                        params.len()
                    )))
                }
            };
            match attribute_type {
                None => attribute_type = Some(parameter_type),
                Some(existing) if existing != parameter_type => {
                    return Err(invalid(format!(
                        "type mismatch between getter ({}) and setter ({})",
                        existing.name(),
                        parameter_type.name()
                    )))
                }
                Some(_) => {}
            }
        }

        let attribute_type = attribute_type
            .ok_or_else(|| invalid("no getter or setter".to_string()))?
            .clone();

        let returns_boolean =
            attribute_type.is_boolean() || attribute_type.name() == "java.lang.Boolean";
        let is_is = returns_boolean
            && getter
                .as_ref()
                .map(|g| g.name().starts_with("is"))
                .unwrap_or(false);

        validate_descriptor(&mut descriptor, &name, DescriptorType::Attribute)?;

        Ok(Self {
            description: description.into(),
            attribute_type: attribute_type.name().to_string(),
            readable: getter.is_some(),
            writable: setter.is_some(),
            is_is,
            descriptor,
            getter,
            setter,
            name,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterInfo {
    pub name: String,
    pub type_name: String,
    pub description: Option<String>,
}

impl ParameterInfo {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description,
        }
    }
}

/// An invocable method of the managed object.
#[derive(Debug, Clone, Serialize)]
pub struct OperationInfo {
    pub name: String,
    pub description: String,
    pub signature: Vec<ParameterInfo>,
    pub return_type: String,
    pub impact: Impact,
    pub descriptor: Descriptor,
}

impl OperationInfo {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        signature: Vec<ParameterInfo>,
        return_type: impl Into<String>,
        impact: Impact,
        mut descriptor: Descriptor,
    ) -> Result<Self, IntrospectionError> {
        let name = name.into();

        validate_descriptor(&mut descriptor, &name, DescriptorType::Operation)?;

        if let Some(role) = descriptor.field(FIELD_ROLE) {
            if Role::parse(role).is_none() {
                return Err(IntrospectionError::InvalidOperation {
                    operation: name,
                    reason: format!("unknown role {}", role),
                });
            }
        }

        Ok(Self {
            name,
            description: description.into(),
            signature,
            return_type: return_type.into(),
            impact,
            descriptor,
        })
    }

    pub fn role(&self) -> Option<Role> {
        self.descriptor.field(FIELD_ROLE).and_then(Role::parse)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConstructorInfo {
    pub name: String,
    pub description: String,
    pub signature: Vec<ParameterInfo>,
    pub descriptor: Descriptor,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationInfo {
    pub name: String,
    pub description: String,
    pub notification_types: Vec<String>,
    pub descriptor: Descriptor,
}

/// Everything a management registry needs to expose one class.
#[derive(Debug, Clone, Serialize)]
pub struct ManagementDescriptor {
    pub class_name: String,
    pub class_loader_name: Option<String>,
    pub attributes: Vec<AttributeInfo>,
    pub constructors: Vec<ConstructorInfo>,
    pub operations: Vec<OperationInfo>,
    pub notifications: Vec<NotificationInfo>,
}

impl ManagementDescriptor {
    pub fn new(
        class_name: impl Into<String>,
        class_loader_name: Option<String>,
        attributes: Vec<AttributeInfo>,
        constructors: Vec<ConstructorInfo>,
        operations: Vec<OperationInfo>,
        notifications: Vec<NotificationInfo>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            class_loader_name,
            attributes,
            constructors,
            operations,
            notifications,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeInfo> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Operations are keyed by name and parameter list, so overloads share a
    /// name.
    pub fn operations_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a OperationInfo> {
        self.operations.iter().filter(move |op| op.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
