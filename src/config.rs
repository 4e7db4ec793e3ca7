//! Configuration types for rule setup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Top-level configuration.
///
/// Parsed from a TOML string by the embedding framework and used by the
/// composition root to construct rules before any traversal starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Whether the traversal trace is enabled.
    #[serde(default)]
    pub trace: bool,

    /// Per-rule settings, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleSettings>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled. Unconfigured rules are enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |s| s.enabled.unwrap_or(true))
    }

    /// Returns the option table for a rule, if configured.
    #[must_use]
    pub fn rule_options(&self, rule_name: &str) -> Option<&RuleOptions> {
        self.rules.get(rule_name).map(|s| &s.options)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: RuleOptions,
}

/// Rule-specific options as a flat key-value table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleOptions(HashMap<String, toml::Value>);

impl RuleOptions {
    /// Gets a string option.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(toml::Value::as_str)
    }

    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.0
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Parse error in config content.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
