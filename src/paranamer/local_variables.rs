use super::Paranamer;
use mbeaninfo_core::error::ParameterNamesError;
use mbeaninfo_core::reflect::MethodHandle;
use tracing::trace;

/// Reads parameter names from a method's local variable table.
///
/// Parameters occupy the first local slots, after `this` for instance
/// methods. `long` and `double` parameters take two slots each.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalVariableTableParanamer;

impl LocalVariableTableParanamer {
    pub fn new() -> Self {
        Self
    }
}

impl Paranamer for LocalVariableTableParanamer {
    fn lookup_parameter_names(
        &self,
        method: &MethodHandle,
    ) -> Result<Vec<String>, ParameterNamesError> {
        if method.parameter_count() == 0 {
            return Ok(Vec::new());
        }

        let table = method
            .local_variables()
            .ok_or_else(|| ParameterNamesError::NoDebugInfo {
                method: method.to_string(),
            })?;

        let mut next_slot = Some(if method.is_static() { 0 } else { 1 });
        let mut names = Vec::with_capacity(method.parameter_count());

        for ty in method.parameter_types() {
            // Past the last addressable slot.
            let slot = next_slot.ok_or_else(|| ParameterNamesError::MissingSlot {
                method: method.to_string(),
                slot: u16::MAX,
            })?;
            let variable = table
                .lookup(slot)
                .ok_or_else(|| ParameterNamesError::MissingSlot {
                    method: method.to_string(),
                    slot,
                })?;
            names.push(variable.name.clone());
            next_slot = slot.checked_add(ty.slot_width());
        }

        trace!(method = %method, names = ?names, "Read parameter names from local variables");
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mbeaninfo_core::reflect::{LocalVariable, LocalVariableTable, TypeRef};

    const OWNER: &str = "com.example.Server";

    #[test]
    fn test_no_parameters_needs_no_debug_info() {
        let method = MethodHandle::new(OWNER, "start", TypeRef::void());
        assert_eq!(
            LocalVariableTableParanamer.lookup_parameter_names(&method),
            Ok(vec![])
        );
    }

    #[test]
    fn test_instance_method_skips_this() {
        let method = MethodHandle::new(OWNER, "resize", TypeRef::void())
            .with_parameters(vec![TypeRef::int(), TypeRef::string()])
            .with_local_variables(LocalVariableTable::new(vec![
                LocalVariable::new(0, "this", "Lcom/example/Server;"),
                LocalVariable::new(1, "width", "I"),
                LocalVariable::new(2, "label", "Ljava/lang/String;"),
                LocalVariable::new(3, "scratch", "I").with_range(4, 8),
            ]));

        assert_eq!(
            LocalVariableTableParanamer.lookup_parameter_names(&method),
            Ok(vec!["width".to_string(), "label".to_string()])
        );
    }

    #[test]
    fn test_static_method_starts_at_slot_zero() {
        let method = MethodHandle::new(OWNER, "parse", TypeRef::int())
            .with_static(true)
            .with_parameter(TypeRef::string())
            .with_local_variables(LocalVariableTable::new(vec![LocalVariable::new(
                0,
                "text",
                "Ljava/lang/String;",
            )]));

        assert_eq!(
            LocalVariableTableParanamer.lookup_parameter_names(&method),
            Ok(vec!["text".to_string()])
        );
    }

    #[test]
    fn test_wide_types_take_two_slots() {
        let method = MethodHandle::new(OWNER, "schedule", TypeRef::void())
            .with_parameters(vec![TypeRef::long(), TypeRef::double(), TypeRef::int()])
            .with_local_variables(LocalVariableTable::new(vec![
                LocalVariable::new(0, "this", "Lcom/example/Server;"),
                LocalVariable::new(1, "delay", "J"),
                LocalVariable::new(3, "factor", "D"),
                LocalVariable::new(5, "retries", "I"),
            ]));

        assert_eq!(
            LocalVariableTableParanamer.lookup_parameter_names(&method),
            Ok(vec![
                "delay".to_string(),
                "factor".to_string(),
                "retries".to_string()
            ])
        );
    }

    #[test]
    fn test_slots_beyond_range_are_missing() {
        let table: LocalVariableTable = (0..=32767u16)
            .map(|i| LocalVariable::new(i * 2, format!("p{i}"), "J"))
            .collect();
        let method = MethodHandle::new(OWNER, "bulk", TypeRef::void())
            .with_static(true)
            .with_parameters(vec![TypeRef::long(); 32769])
            .with_local_variables(table);

        assert!(matches!(
            LocalVariableTableParanamer.lookup_parameter_names(&method),
            Err(ParameterNamesError::MissingSlot { slot: u16::MAX, .. })
        ));
    }

    #[test]
    fn test_missing_table() {
        let method =
            MethodHandle::new(OWNER, "compute", TypeRef::int()).with_parameter(TypeRef::int());
        assert_eq!(
            LocalVariableTableParanamer.lookup_parameter_names(&method),
            Err(ParameterNamesError::NoDebugInfo {
                method: "com.example.Server.compute(int)".to_string()
            })
        );
    }

    #[test]
    fn test_missing_slot() {
        let method = MethodHandle::new(OWNER, "compute", TypeRef::int())
            .with_parameters(vec![TypeRef::int(), TypeRef::int()])
            .with_local_variables(LocalVariableTable::new(vec![LocalVariable::new(1, "a", "I")]));

        assert!(matches!(
            LocalVariableTableParanamer.lookup_parameter_names(&method),
            Err(ParameterNamesError::MissingSlot { slot: 2, .. })
        ));
    }
}
