//! Method and class metadata consumed by the info builder
//!
//! Handles in this module are cheap to clone and compare. They describe what a
//! compiled class exposes: qualified names, parameter and return types, the
//! debug records parameter names are recovered from, and the markers attached
//! to each declared method.

mod class;
mod marker;
mod method;
mod types;

pub use class::{ClassHandle, ClassKind, DeclaredMethod};
pub use marker::{Annotation, ElementValue, Marker};
pub use method::{LocalVariable, LocalVariableTable, MethodHandle, MethodSignature};
pub use types::{TypeKind, TypeRef};
