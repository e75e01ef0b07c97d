use super::Paranamer;
use mbeaninfo_core::error::ParameterNamesError;
use mbeaninfo_core::reflect::MethodHandle;

/// Reads the parameter-name record some compilers emit on request.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugInfoParanamer;

impl DebugInfoParanamer {
    pub fn new() -> Self {
        Self
    }
}

impl Paranamer for DebugInfoParanamer {
    fn lookup_parameter_names(
        &self,
        method: &MethodHandle,
    ) -> Result<Vec<String>, ParameterNamesError> {
        if method.parameter_count() == 0 {
            return Ok(Vec::new());
        }

        let names = method
            .parameter_names()
            .ok_or_else(|| ParameterNamesError::NoDebugInfo {
                method: method.to_string(),
            })?;

        if names.len() != method.parameter_count() {
            return Err(ParameterNamesError::CountMismatch {
                method: method.to_string(),
                declared: method.parameter_count(),
                recorded: names.len(),
            });
        }

        Ok(names.to_vec())
    }
}
