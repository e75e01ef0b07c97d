//! Structured logging setup for mbeaninfo
//!
//! The builder itself only emits `tracing` events: per-phase summaries at
//! `debug`, per-method classification and swallowed marker probes at
//! `trace`. Applications embedding the library normally install their own
//! subscriber; the helpers here are for tools and tests that want one set up
//! the same way every time.
//!
//! # Example
//!
//! ```no_run
//! use mbeaninfo::util::{init_logging, LoggingConfig};
//!
//! init_logging(LoggingConfig::development());
//! tracing::debug!(class = "com.example.Server", "Building management descriptor");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LEVEL_VAR: &str = "MBEANINFO_LOG_LEVEL";
const JSON_VAR: &str = "MBEANINFO_LOG_JSON";

static INIT: Once = Once::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Level,

    /// JSON lines instead of human-readable output
    pub use_json: bool,

    pub include_target: bool,

    /// File and line number of the emitting call site
    pub include_location: bool,

    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
            include_thread_ids: true,
        }
    }

    /// Shows the per-phase summaries the builder logs at `debug`.
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            ..Default::default()
        }
    }

    /// Reads `MBEANINFO_LOG_LEVEL` and `MBEANINFO_LOG_JSON`, falling back to
    /// the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let level = env::var(LEVEL_VAR)
            .ok()
            .and_then(|v| parse_level(&v))
            .unwrap_or(Level::INFO);

        let use_json = env::var(JSON_VAR)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            ..Default::default()
        }
    }
}

/// Parses `trace`, `debug`, `info`, `warn` or `error`, ignoring case.
pub fn parse_level(level_str: &str) -> Option<Level> {
    level_str.trim().parse::<Level>().ok()
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        match format!("mbeaninfo={}", config.level).parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("Invalid log directive for level {}: {}", config.level, e),
        }

        let layer = fmt::layer()
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_thread_ids(config.include_thread_ids)
            .with_thread_names(config.include_thread_ids);

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.use_json {
            registry.with(layer.json()).try_init()
        } else {
            registry.with(layer).try_init()
        };

        if let Err(e) = result {
            eprintln!("Logging already initialized elsewhere: {}", e);
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}
