//! Structured logging setup.
//!
//! The codecs never log. Consumers such as the dispatcher emit `tracing`
//! events; this installs a formatting subscriber for them.

use crate::config::LoggingConfig;
use crate::error::constants::ERR_SUBSCRIBER_INSTALLED;
use crate::error::{ProtocolError, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;

/// Install a global fmt subscriber configured from `config`.
///
/// Fails with `ConfigError` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    fmt()
        .with_max_level(LevelFilter::from_level(config.log_level))
        .with_target(config.with_target)
        .try_init()
        .map_err(|_| ProtocolError::ConfigError(ERR_SUBSCRIBER_INSTALLED.to_string()))?;

    info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}
