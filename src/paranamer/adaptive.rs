use super::{DebugInfoParanamer, LocalVariableTableParanamer, Paranamer};
use mbeaninfo_core::error::ParameterNamesError;
use mbeaninfo_core::reflect::MethodHandle;
use std::sync::Arc;
use tracing::trace;

/// Tries each paranamer in turn and returns the first success.
pub struct AdaptiveParanamer {
    paranamers: Vec<Arc<dyn Paranamer>>,
}

impl AdaptiveParanamer {
    pub fn new(paranamers: Vec<Arc<dyn Paranamer>>) -> Self {
        Self { paranamers }
    }

    pub fn with_paranamer(mut self, paranamer: Arc<dyn Paranamer>) -> Self {
        self.paranamers.push(paranamer);
        self
    }
}

impl Default for AdaptiveParanamer {
    /// Declared parameter-name records first, then local variable tables.
    fn default() -> Self {
        Self::new(vec![
            Arc::new(DebugInfoParanamer),
            Arc::new(LocalVariableTableParanamer),
        ])
    }
}

impl Paranamer for AdaptiveParanamer {
    fn lookup_parameter_names(
        &self,
        method: &MethodHandle,
    ) -> Result<Vec<String>, ParameterNamesError> {
        let mut last_error = ParameterNamesError::NoDebugInfo {
            method: method.to_string(),
        };

        for paranamer in &self.paranamers {
            match paranamer.lookup_parameter_names(method) {
                Ok(names) => return Ok(names),
                Err(e) => {
                    trace!(method = %method, error = %e, "Paranamer failed, trying next");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
