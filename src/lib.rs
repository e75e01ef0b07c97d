//! mbeaninfo - management descriptors for annotated classes
//!
//! This library inspects a class whose methods carry an export marker and
//! produces the attribute and operation tables a management registry needs
//! to read, write and invoke against live instances of that class.
//!
//! # Core Concepts
//!
//! - **Annotation finder**: decides which methods of a class are exported and
//!   which marker exports each of them
//! - **Classification**: `get`/`is`/`set` accessors are folded into
//!   attributes, and every exported method also becomes an operation
//! - **Paranamer**: recovers parameter names from compiled debug records so
//!   operations carry meaningful signatures
//!
//! # Example Usage
//!
//! ```
//! use mbeaninfo::MBeanInfoBuilder;
//! use mbeaninfo_core::reflect::{Annotation, ClassHandle, MethodHandle, TypeRef};
//!
//! let owner = "com.example.Cache";
//! let class = ClassHandle::new(owner)
//!     .with_annotated_method(
//!         MethodHandle::new(owner, "isEnabled", TypeRef::boolean()),
//!         Annotation::new("org.weakref.jmx.Managed"),
//!     )
//!     .with_annotated_method(
//!         MethodHandle::new(owner, "flush", TypeRef::void()),
//!         Annotation::new("org.weakref.jmx.Managed").with_description("drops every entry"),
//!     );
//!
//! let info = MBeanInfoBuilder::new().build_info(&class).unwrap();
//!
//! assert!(info.attribute("Enabled").unwrap().readable);
//! assert_eq!(info.operations.len(), 2);
//! ```
//!
//! # Project Structure
//!
//! - [`builder`]: the collect/classify/fold/materialize pipeline
//! - [`finder`]: exported-method discovery across a class hierarchy
//! - [`paranamer`]: parameter-name recovery
//! - [`util`]: logging setup

pub mod builder;
pub mod finder;
pub mod paranamer;
pub mod util;

pub use builder::MBeanInfoBuilder;
pub use finder::{AnnotatedMethods, AnnotationFinder, HierarchyAnnotationFinder};
pub use mbeaninfo_core::{
    BuilderConfig, ConfigError, IntrospectionError, ManagementDescriptor, ParameterNamesError,
};
pub use paranamer::{
    AdaptiveParanamer, DebugInfoParanamer, LocalVariableTableParanamer, Paranamer,
};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
