//! TOML configuration for the three status line regions
//!
//! A status line is configured as three independent template strings:
//!
//! ```toml
//! left = "{AppTitle}"
//! middle = "{VTType} {InputMode}"
//! right = "{Clock} {AnsiCursorLocation}"
//! ```
//!
//! Omitted regions fall back to the built-in defaults.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::definitions::StatusLineDefinition;
use crate::error::ParseError;

/// Errors that can occur when loading a status line configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read status line config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse status line config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Template strings for the three status line regions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusLineConfig {
    pub left: String,
    pub middle: String,
    pub right: String,
}

impl Default for StatusLineConfig {
    fn default() -> Self {
        Self {
            left: "{AppTitle}".to_string(),
            middle: "{VTType} {InputMode}".to_string(),
            right: "{Clock} {AnsiCursorLocation}".to_string(),
        }
    }
}

impl StatusLineConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse the three region templates into segments.
    ///
    /// Diagnostics from all regions are accumulated; see
    /// [`StatusLineDefinition::parse`] for span semantics.
    pub fn compile(&self) -> Result<StatusLineDefinition, Vec<ParseError>> {
        StatusLineDefinition::parse(&self.left, &self.middle, &self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_compiles() {
        let definition = StatusLineConfig::default()
            .compile()
            .expect("defaults should parse");
        assert!(!definition.left.is_empty());
        assert!(!definition.middle.is_empty());
        assert!(!definition.right.is_empty());
    }

    #[test]
    fn test_from_toml() {
        let config = StatusLineConfig::from_toml(
            r#"
left = "{AppTitle}"
right = "{Clock}"
"#,
        )
        .expect("should parse TOML");
        assert_eq!(config.left, "{AppTitle}");
        assert_eq!(config.right, "{Clock}");
        // Omitted region keeps its default.
        assert_eq!(config.middle, StatusLineConfig::default().middle);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = StatusLineConfig::from_toml(r#"centre = "{Clock}""#);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = StatusLineConfig::from_toml("left = {{{{");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_compile_reports_malformed_region() {
        let config = StatusLineConfig {
            left: "{Search}".to_string(),
            middle: String::new(),
            right: String::new(),
        };
        let errors = config.compile().expect_err("left region is malformed");
        assert_eq!(errors.len(), 1);
    }
}
