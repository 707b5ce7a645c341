use crate::error::AnalyticsError;
use configuration::{AnalysisSettings, Config};
use std::fmt;
use strategies::{
    create_bonus_calculator, create_revenue_calculator, BonusByProfit, BonusCalculator,
    RevenueCalculator, SimpleRevenue,
};

/// The strategies and settings one analysis run is parameterized with.
///
/// Both strategy slots start empty and must be filled before analysis; an
/// empty slot is reported as `AnalyticsError::InvalidOptions`.
///
/// ```ignore
/// let options = AnalysisOptions::new()
///     .revenue_calculator(SimpleRevenue)
///     .bonus_calculator(|rank: usize, _: usize, seller: &SellerStat| {
///         if rank == 0 { seller.profit / dec!(10) } else { Decimal::ZERO }
///     });
/// ```
#[derive(Default)]
pub struct AnalysisOptions {
    calculate_revenue: Option<Box<dyn RevenueCalculator>>,
    calculate_bonus: Option<Box<dyn BonusCalculator>>,
    settings: AnalysisSettings,
}

impl AnalysisOptions {
    /// Options with no strategies and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// `SimpleRevenue` and `BonusByProfit` with their default rates.
    pub fn with_defaults() -> Self {
        Self::new()
            .revenue_calculator(SimpleRevenue)
            .bonus_calculator(BonusByProfit::default())
    }

    /// Builds the strategies named in `config` and copies its analysis settings.
    pub fn from_config(config: &Config) -> Result<Self, AnalyticsError> {
        let revenue = create_revenue_calculator(config.strategies.revenue)?;
        let bonus = create_bonus_calculator(config.strategies.bonus, config)?;

        Ok(Self {
            calculate_revenue: Some(revenue),
            calculate_bonus: Some(bonus),
            settings: config.analysis.clone(),
        })
    }

    pub fn revenue_calculator(mut self, calculator: impl RevenueCalculator + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(calculator));
        self
    }

    pub fn bonus_calculator(mut self, calculator: impl BonusCalculator + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(calculator));
        self
    }

    pub fn settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn analysis_settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Returns both strategies, or the reason the options cannot be used.
    pub(crate) fn resolve(
        &self,
    ) -> Result<(&dyn RevenueCalculator, &dyn BonusCalculator), AnalyticsError> {
        let revenue = self.calculate_revenue.as_deref().ok_or_else(|| {
            AnalyticsError::InvalidOptions("calculate_revenue strategy is missing".to_string())
        })?;
        let bonus = self.calculate_bonus.as_deref().ok_or_else(|| {
            AnalyticsError::InvalidOptions("calculate_bonus strategy is missing".to_string())
        })?;
        self.settings
            .validate()
            .map_err(|e| AnalyticsError::InvalidOptions(e.to_string()))?;

        Ok((revenue, bonus))
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .field("settings", &self.settings)
            .finish()
    }
}
