//! # Configuration
//!
//! Typed settings for the sales analytics workspace, read from `config.toml`
//! and `SALES__*` environment variables, plus the logging bootstrap that every
//! binary calls first.

use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::ConfigArgs;
pub use logging::init_tracing;
pub use settings::{AnalysisSettings, BonusRates, Config, LoggingSettings, StrategySettings};

/// Loads and validates the application configuration.
///
/// Every section is optional: a missing file or missing keys fall back to
/// defaults. Environment variables such as `SALES__ANALYSIS__TOP_PRODUCTS_LIMIT=5`
/// override the file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config = read_config(path)?;
    config.validate()?;
    Ok(config)
}

/// Reads the layered configuration without validating it.
pub(crate) fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("SALES")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    tracing::debug!(path = %path.display(), "configuration loaded");

    Ok(config)
}
