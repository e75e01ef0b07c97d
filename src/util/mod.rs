//! Utility modules for mbeaninfo
//!
//! Currently only structured logging setup.

pub mod logging;

pub use logging::{init_default, init_from_env, init_logging, LoggingConfig};
