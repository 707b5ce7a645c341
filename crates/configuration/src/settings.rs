use core_types::{BonusStrategyId, RevenueBasis, RevenueStrategyId, UnresolvedPolicy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub strategies: StrategySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Knobs for the aggregation and ranking pass itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// How many best-selling products to list per seller.
    pub top_products_limit: usize,
    /// Whether seller revenue is built from item lines or receipt totals.
    pub revenue_basis: RevenueBasis,
    /// How dangling seller or product references are handled.
    pub unresolved_references: UnresolvedPolicy,
}

/// Selects the revenue and bonus formulas and carries their parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    pub revenue: RevenueStrategyId,
    pub bonus: BonusStrategyId,
    pub bonus_rates: BonusRates,
}

/// Fractions of profit paid as bonus for each ranking tier.
///
/// 0.15 corresponds to 15% of the seller's profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusRates {
    /// Rank 0.
    pub leader: Decimal,
    /// Ranks 1 and 2, unless that rank is also the last one.
    pub runner_up: Decimal,
    /// Every other rank except the last.
    pub standard: Decimal,
    /// The last-placed seller (only when it is not also the leader).
    pub last_place: Decimal,
}

/// Where log output goes and how verbose it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `"info"` or `"analytics=debug"`. `RUST_LOG` wins over it.
    pub filter: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
    /// File name prefix for the rolling log files.
    pub file_prefix: String,
}

// --- Default Implementations ---
// A missing section (or a missing config file) falls back to these.

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_products_limit: 10,
            revenue_basis: RevenueBasis::default(),
            unresolved_references: UnresolvedPolicy::default(),
        }
    }
}

impl Default for BonusRates {
    fn default() -> Self {
        Self {
            leader: dec!(0.15),
            runner_up: dec!(0.10),
            standard: dec!(0.05),
            last_place: Decimal::ZERO,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
            file_prefix: "sales-analytics.log".to_string(),
        }
    }
}

impl Config {
    /// Checks the values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.strategies.bonus_rates.validate()?;
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_products_limit == 0 {
            return Err(ConfigError::ValidationError(
                "analysis.top_products_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl BonusRates {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tiers = [
            ("leader", self.leader),
            ("runner_up", self.runner_up),
            ("standard", self.standard),
            ("last_place", self.last_place),
        ];
        for (tier, rate) in tiers {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(ConfigError::ValidationError(format!(
                    "strategies.bonus_rates.{tier} must be between 0 and 1, got {rate}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.top_products_limit, 10);
        assert_eq!(config.strategies.bonus_rates.leader, dec!(0.15));
    }

    #[test]
    fn zero_top_products_limit_is_rejected() {
        let mut config = Config::default();
        config.analysis.top_products_limit = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn out_of_range_bonus_rate_is_rejected() {
        let mut config = Config::default();
        config.strategies.bonus_rates.runner_up = dec!(1.5);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("runner_up"));
    }
}
