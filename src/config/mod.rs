//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NASA_TLX` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use nasa_tlx::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Exports go to {}", config.export.output_dir.display());
//! ```

mod error;
mod export;
mod instrument;
mod logging;
mod persistence;
mod session;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use instrument::InstrumentConfig;
pub use logging::LoggingConfig;
pub use persistence::PersistenceConfig;
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Instrument name and build tag
    #[serde(default)]
    pub instrument: InstrumentConfig,

    /// Wizard behaviour
    #[serde(default)]
    pub session: SessionConfig,

    /// Optional local submission history
    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NASA_TLX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NASA_TLX__PERSISTENCE__ENABLED=true` -> `persistence.enabled = true`
    /// - `NASA_TLX__EXPORT__OUTPUT_DIR=/data` -> `export.output_dir = /data`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NASA_TLX")
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
        self.instrument.validate()?;
        self.persistence.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
