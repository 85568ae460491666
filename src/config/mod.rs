//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MEREC_AROMAN` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use merec_aroman::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reports rendered as {}", config.output.format);
//! ```

mod error;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use output::{OutputConfig, MAX_PRECISION};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report format and number formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `MEREC_AROMAN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MEREC_AROMAN__OUTPUT__PRECISION=6` -> `output.precision = 6`
    /// - `MEREC_AROMAN__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MEREC_AROMAN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.output.validate()?;
        Ok(())
    }
}
