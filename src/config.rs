//! # Configuration Management
//!
//! Configuration for consumers of the codecs: how strictly decoded headers
//! are vetted before dispatch, and how logging is set up.
//!
//! The codecs themselves take no configuration. Encoding always enforces
//! the 2-bit version and 5-bit report count ranges; decoding always accepts
//! any four octets. [`DecodePolicy`] is applied afterwards, by the
//! dispatcher.
//!
//! ## Configuration Sources
//! - TOML strings via `from_toml()`
//! - Direct instantiation with defaults

use crate::core::header::{RTP_VERSION, VERSION_MASK};
use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Post-decode header checks
    #[serde(default)]
    pub decode: DecodeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.decode.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// How decoded headers are vetted before they reach a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Accept any decoded header
    #[default]
    Permissive,
    /// Reject headers whose version differs from `expected_version`
    Strict,
}

/// Decode configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DecodeConfig {
    #[serde(default)]
    pub policy: DecodePolicy,

    /// Version required under [`DecodePolicy::Strict`]
    #[serde(default = "default_expected_version")]
    pub expected_version: u8,
}

fn default_expected_version() -> u8 {
    RTP_VERSION
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            policy: DecodePolicy::Permissive,
            expected_version: default_expected_version(),
        }
    }
}

impl DecodeConfig {
    /// Validate decode configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.expected_version > VERSION_MASK {
            errors.push(format!(
                "Expected version {} does not fit in 2 bits (maximum: {VERSION_MASK})",
                self.expected_version
            ));
        }

        errors
    }

    /// Check a decoded version against the policy
    pub fn check_version(&self, version: u8) -> Result<()> {
        match self.policy {
            DecodePolicy::Strict if version != self.expected_version => {
                Err(ProtocolError::UnsupportedVersion(version))
            }
            _ => Ok(()),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to include the event target in log lines
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("control-wire"),
            log_level: Level::INFO,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        level.as_str().to_ascii_lowercase().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
