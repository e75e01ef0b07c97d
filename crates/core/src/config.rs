use std::fmt;
use thiserror::Error;

/// Prefix shared by every internal scratch field name.
pub const DEFAULT_RESERVED_PREFIX: &str = "org.weakref.jmx.";

/// What to do when two exported methods claim the same accessor slot of an
/// attribute, e.g. both `getOk` and `isOk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The method visited last wins. Visitation order is unspecified.
    #[default]
    LastWriterWins,
    /// Fail with `IntrospectionError::DuplicateAccessor`.
    Reject,
}

/// How an attribute name is derived from the accessor name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeNaming {
    /// `getFoo` -> `Foo`
    #[default]
    Verbatim,
    /// `getFoo` -> `foo`
    Decapitalize,
}

impl AttributeNaming {
    pub fn apply(&self, suffix: &str) -> String {
        match self {
            AttributeNaming::Verbatim => suffix.to_string(),
            AttributeNaming::Decapitalize => {
                let mut chars = suffix.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    pub reserved_prefix: String,
    pub duplicate_policy: DuplicatePolicy,
    pub attribute_naming: AttributeNaming,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            reserved_prefix: DEFAULT_RESERVED_PREFIX.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
            attribute_naming: AttributeNaming::default(),
        }
    }
}

impl BuilderConfig {
    /// Lenient defaults with duplicate accessors rejected.
    pub fn strict() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reserved_prefix.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Reserved prefix must not be empty".to_string(),
            ));
        }
        if !self.reserved_prefix.ends_with('.') {
            return Err(ConfigError::ValidationFailed(format!(
                "Reserved prefix must end with '.': {}",
                self.reserved_prefix
            )));
        }
        if self.reserved_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationFailed(format!(
                "Reserved prefix must not contain whitespace: {:?}",
                self.reserved_prefix
            )));
        }

        Ok(())
    }
}

impl fmt::Display for BuilderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MBean Info Builder Configuration:")?;
        writeln!(f, "  Reserved Prefix: {}", self.reserved_prefix)?;
        writeln!(f, "  Duplicate Policy: {:?}", self.duplicate_policy)?;
        writeln!(f, "  Attribute Naming: {:?}", self.attribute_naming)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[test]
    fn test_default_config_is_valid() {
        let config = BuilderConfig::default();
        assert_eq!(config.reserved_prefix, "org.weakref.jmx.");
        assert_eq!(config.duplicate_policy, DuplicatePolicy::LastWriterWins);
        assert_eq!(config.attribute_naming, AttributeNaming::Verbatim);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = BuilderConfig::strict();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[parameterized(
        empty = { "" },
        no_trailing_dot = { "org.weakref.jmx" },
        whitespace = { "org. weakref." },
    )]
    fn test_invalid_prefix(prefix: &str) {
        let config = BuilderConfig {
            reserved_prefix: prefix.to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[parameterized(
        verbatim_keeps_case = { AttributeNaming::Verbatim, "Foo", "Foo" },
        verbatim_lowercase = { AttributeNaming::Verbatim, "foo", "foo" },
        decapitalize = { AttributeNaming::Decapitalize, "Foo", "foo" },
        decapitalize_acronym = { AttributeNaming::Decapitalize, "URL", "uRL" },
        decapitalize_single = { AttributeNaming::Decapitalize, "X", "x" },
    )]
    fn test_attribute_naming(naming: AttributeNaming, suffix: &str, expected: &str) {
        assert_eq!(naming.apply(suffix), expected);
    }

    #[test]
    fn test_display_lists_fields() {
        let rendered = BuilderConfig::default().to_string();
        assert!(rendered.contains("Reserved Prefix: org.weakref.jmx."));
        assert!(rendered.contains("LastWriterWins"));
    }
}
