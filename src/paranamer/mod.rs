//! Recovery of positional parameter names from compiled method metadata

mod adaptive;
mod debug_info;
mod local_variables;

pub use adaptive::AdaptiveParanamer;
pub use debug_info::DebugInfoParanamer;
pub use local_variables::LocalVariableTableParanamer;

use mbeaninfo_core::error::ParameterNamesError;
use mbeaninfo_core::reflect::MethodHandle;

#[cfg_attr(test, mockall::automock)]
pub trait Paranamer: Send + Sync {
    /// Returns one name per declared parameter, in declaration order.
    fn lookup_parameter_names(
        &self,
        method: &MethodHandle,
    ) -> Result<Vec<String>, ParameterNamesError>;
}
