//! Discovery of exported methods on a class

mod hierarchy;

pub use hierarchy::{HierarchyAnnotationFinder, MANAGED_ANNOTATION};

use mbeaninfo_core::reflect::{ClassHandle, Marker, MethodHandle};
use std::collections::HashMap;
use std::sync::Arc;

/// Exported methods and the marker that exports each of them.
pub type AnnotatedMethods = HashMap<MethodHandle, Arc<dyn Marker>>;

#[cfg_attr(test, mockall::automock)]
pub trait AnnotationFinder: Send + Sync {
    /// Every key of the returned map is treated as exported.
    fn find_annotated_methods(&self, class: &ClassHandle) -> AnnotatedMethods;
}
