pub mod config;
pub mod error;
pub mod model;
pub mod reflect;

pub use config::{AttributeNaming, BuilderConfig, ConfigError, DuplicatePolicy};
pub use error::{IntrospectionError, MarkerError, ParameterNamesError};
pub use model::{
    AttributeInfo, Descriptor, DescriptorType, Impact, ManagementDescriptor, OperationInfo,
    ParameterInfo, Role,
};
pub use reflect::{Annotation, ClassHandle, Marker, MethodHandle, TypeRef};
