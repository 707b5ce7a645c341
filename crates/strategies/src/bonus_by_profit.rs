use crate::error::StrategyError;
use crate::BonusCalculator;
use configuration::BonusRates;
use core_types::SellerStat;
use rust_decimal::Decimal;

/// Tiered bonus: a fixed fraction of profit chosen by the seller's rank.
///
/// | rank                | rate         | default |
/// |---------------------|--------------|---------|
/// | 0                   | `leader`     | 15%     |
/// | `seller_count - 1`  | `last_place` | 0%      |
/// | 1 or 2              | `runner_up`  | 10%     |
/// | anything else       | `standard`   | 5%      |
///
/// Tiers are checked top to bottom: a lone seller is paid as the leader even
/// though it is also in last place, and the second of two sellers is last.
#[derive(Debug, Clone, Default)]
pub struct BonusByProfit {
    rates: BonusRates,
}

impl BonusByProfit {
    /// Creates a new `BonusByProfit` with the given rates.
    ///
    /// Every rate must be a fraction between 0 and 1.
    pub fn new(rates: BonusRates) -> Result<Self, StrategyError> {
        rates
            .validate()
            .map_err(|e| StrategyError::InvalidParameters(e.to_string()))?;
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &BonusRates {
        &self.rates
    }

    fn rate_for(&self, rank: usize, seller_count: usize) -> Decimal {
        if rank == 0 {
            self.rates.leader
        } else if rank + 1 == seller_count {
            self.rates.last_place
        } else if rank == 1 || rank == 2 {
            self.rates.runner_up
        } else {
            self.rates.standard
        }
    }
}

impl BonusCalculator for BonusByProfit {
    fn calculate_bonus(&self, rank: usize, seller_count: usize, seller: &SellerStat) -> Decimal {
        seller.profit * self.rate_for(rank, seller_count)
    }
}
