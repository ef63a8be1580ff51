//! Configuration for the event bus

use ruleflow_core::{Result, RuleError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Event bus configuration
///
/// Every key is optional in YAML; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Collect counters and timings for fired events
    pub enable_metrics: bool,

    /// Log at warn level when an event is fired with no handlers
    pub warn_on_unhandled: bool,
}

impl BusConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            enable_metrics: true,
            warn_on_unhandled: false,
        }
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    /// Warn about events nobody listens to
    pub fn warn_on_unhandled(mut self, warn: bool) -> Self {
        self.warn_on_unhandled = warn;
        self
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document is a valid, all-defaults configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| RuleError::Config(format!("Failed to parse bus config: {}", e)))
    }

    /// Load a configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded bus config");
        Self::from_yaml_str(&content)
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BusConfig::default();
        assert!(config.enable_metrics);
        assert!(!config.warn_on_unhandled);
    }

    #[test]
    fn test_builder_setters() {
        let config = BusConfig::new()
            .enable_metrics(false)
            .warn_on_unhandled(true);
        assert!(!config.enable_metrics);
        assert!(config.warn_on_unhandled);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = BusConfig::from_yaml_str("warn_on_unhandled: true\n").unwrap();
        assert!(config.enable_metrics);
        assert!(config.warn_on_unhandled);
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(BusConfig::from_yaml_str("").unwrap(), BusConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = BusConfig::from_yaml_str("enable_metrics: maybe\n").unwrap_err();
        assert!(matches!(err, RuleError::Config(_)));
        assert!(err.to_string().contains("Failed to parse bus config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enable_metrics: false").unwrap();

        let config = BusConfig::from_file(file.path()).unwrap();
        assert!(!config.enable_metrics);
        assert!(!config.warn_on_unhandled);
    }

    #[test]
    fn test_from_missing_file() {
        let err = BusConfig::from_file("/nonexistent/ruleflow/bus.yaml").unwrap_err();
        assert!(matches!(err, RuleError::Io(_)));
    }
}
