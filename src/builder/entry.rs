use mbeaninfo_core::model::descriptor::{
    FIELD_CLASS, FIELD_DESCRIPTOR_TYPE, FIELD_GET_METHOD, FIELD_NAME, FIELD_ROLE, FIELD_SET_METHOD,
};
use mbeaninfo_core::model::{Descriptor, DescriptorType, Role};
use mbeaninfo_core::reflect::MethodHandle;

/// In-progress operation. The method handle and description stay here and
/// never enter the residual descriptor.
#[derive(Debug, Clone)]
pub(crate) struct OperationEntry {
    pub name: String,
    pub owner: String,
    pub role: Role,
    pub description: String,
    pub method: MethodHandle,
}

impl OperationEntry {
    pub fn new(owner: &str, method: MethodHandle, description: String) -> Self {
        Self {
            name: method.name().to_string(),
            owner: owner.to_string(),
            role: Role::Operation,
            description,
            method,
        }
    }

    pub fn residual_descriptor(&self) -> Descriptor {
        Descriptor::new()
            .with_field(FIELD_NAME, self.name.as_str())
            .with_field(FIELD_CLASS, self.owner.as_str())
            .with_field(FIELD_DESCRIPTOR_TYPE, DescriptorType::Operation.as_str())
            .with_field(FIELD_ROLE, self.role.as_str())
    }
}

/// In-progress attribute folded from one or more accessors.
#[derive(Debug, Clone)]
pub(crate) struct AttributeEntry {
    pub name: String,
    pub description: String,
    pub getter: Option<MethodHandle>,
    pub setter: Option<MethodHandle>,
}

impl AttributeEntry {
    pub fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            getter: None,
            setter: None,
        }
    }

    pub fn residual_descriptor(&self) -> Descriptor {
        let mut descriptor = Descriptor::new()
            .with_field(FIELD_NAME, self.name.as_str())
            .with_field(FIELD_DESCRIPTOR_TYPE, DescriptorType::Attribute.as_str());

        if let Some(getter) = &self.getter {
            descriptor.set_field(FIELD_GET_METHOD, getter.name());
        }
        if let Some(setter) = &self.setter {
            descriptor.set_field(FIELD_SET_METHOD, setter.name());
        }

        descriptor
    }
}
