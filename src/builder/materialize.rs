use super::entry::{AttributeEntry, OperationEntry};
use crate::paranamer::Paranamer;
use mbeaninfo_core::error::IntrospectionError;
use mbeaninfo_core::model::{AttributeInfo, Descriptor, Impact, OperationInfo, ParameterInfo};
use tracing::warn;

/// Applies the reserved-prefix contract to a residual descriptor before it
/// is handed to a record constructor.
fn scrub(mut descriptor: Descriptor, reserved_prefix: &str, owner: &str) -> Descriptor {
    let removed = descriptor.strip(reserved_prefix);
    if !removed.is_empty() {
        warn!(owner, fields = ?removed, "Removed reserved fields from descriptor");
    }
    descriptor
}

pub(crate) fn attribute_info(
    entry: AttributeEntry,
    reserved_prefix: &str,
) -> Result<AttributeInfo, IntrospectionError> {
    let descriptor = scrub(entry.residual_descriptor(), reserved_prefix, &entry.name);

    AttributeInfo::new(
        entry.name,
        entry.description,
        entry.getter,
        entry.setter,
        descriptor,
    )
}

pub(crate) fn operation_info(
    entry: OperationEntry,
    paranamer: &dyn Paranamer,
    reserved_prefix: &str,
) -> Result<OperationInfo, IntrospectionError> {
    let descriptor = scrub(entry.residual_descriptor(), reserved_prefix, &entry.name);
    let method = &entry.method;

    let names = paranamer.lookup_parameter_names(method)?;
    let types = method.parameter_types();
    if names.len() != types.len() {
        return Err(IntrospectionError::ParameterCountMismatch {
            operation: method.to_string(),
            declared: types.len(),
            recovered: names.len(),
        });
    }

    let signature = names
        .into_iter()
        .zip(types)
        .map(|(name, ty)| ParameterInfo::new(name, ty.name(), None))
        .collect();

    OperationInfo::new(
        method.name(),
        entry.description.as_str(),
        signature,
        method.return_type().to_string(),
        Impact::Unknown,
        descriptor,
    )
}
