use crate::error::ConfigError;
use crate::settings::Config;
use clap::Args;
use core_types::{RevenueBasis, UnresolvedPolicy};
use std::path::PathBuf;

/// Command-line overrides for values normally read from `config.toml`.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// How many best-selling products to list per seller.
    #[arg(long)]
    pub top_products: Option<usize>,

    /// Revenue source: "item_lines" or "record_total".
    #[arg(long)]
    pub revenue_basis: Option<RevenueBasis>,

    /// Dangling reference handling: "skip" or "reject".
    #[arg(long)]
    pub unresolved: Option<UnresolvedPolicy>,

    /// Log filter directive, e.g. "debug" or "analytics=trace".
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl ConfigArgs {
    /// Reads the config file, applies the overrides, then validates the result.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let mut config = crate::read_config(&self.config)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Writes every override that was given on the command line into `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(limit) = self.top_products {
            config.analysis.top_products_limit = limit;
        }
        if let Some(basis) = self.revenue_basis {
            config.analysis.revenue_basis = basis;
        }
        if let Some(policy) = self.unresolved {
            config.analysis.unresolved_references = policy;
        }
        if let Some(filter) = &self.log_filter {
            config.logging.filter = filter.clone();
        }
    }
}
