//! Records handed to the management registry

pub mod descriptor;
mod info;

pub use descriptor::{Descriptor, DescriptorType, Role};
pub use info::{
    AttributeInfo, ConstructorInfo, Impact, ManagementDescriptor, NotificationInfo,
    OperationInfo, ParameterInfo,
};
