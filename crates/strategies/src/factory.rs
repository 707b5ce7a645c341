use crate::bonus_by_profit::BonusByProfit;
use crate::error::StrategyError;
use crate::simple_revenue::SimpleRevenue;
use crate::{BonusCalculator, RevenueCalculator};
use configuration::Config;
use core_types::{BonusStrategyId, RevenueStrategyId};

/// Creates the revenue formula identified by `id`.
pub fn create_revenue_calculator(
    id: RevenueStrategyId,
) -> Result<Box<dyn RevenueCalculator>, StrategyError> {
    tracing::debug!(strategy = ?id, "building revenue calculator");
    // The compiler will error here if a new RevenueStrategyId is added but not handled.
    match id {
        RevenueStrategyId::Simple => Ok(Box::new(SimpleRevenue::new())),
    }
}

/// Creates the bonus formula identified by `id`, parameterized from `config`.
pub fn create_bonus_calculator(
    id: BonusStrategyId,
    config: &Config,
) -> Result<Box<dyn BonusCalculator>, StrategyError> {
    match id {
        BonusStrategyId::ByProfit => {
            let rates = config.strategies.bonus_rates.clone();
            tracing::debug!(?rates, "building profit-tiered bonus calculator");
            Ok(Box::new(BonusByProfit::new(rates)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Product, PurchaseItem, Seller, SellerStat};
    use rust_decimal_macros::dec;

    #[test]
    fn builds_configured_bonus_rates() {
        let mut config = Config::default();
        config.strategies.bonus_rates.leader = dec!(0.2);
        let calc = create_bonus_calculator(BonusStrategyId::ByProfit, &config).unwrap();

        let seller = Seller {
            id: "s1".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Smirnova".to_string(),
        };
        let mut stat = SellerStat::new(&seller);
        stat.profit = dec!(50);
        assert_eq!(calc.calculate_bonus(0, 3, &stat), dec!(10));
    }

    #[test]
    fn invalid_rates_surface_as_strategy_error() {
        let mut config = Config::default();
        config.strategies.bonus_rates.standard = dec!(-0.1);
        assert!(create_bonus_calculator(BonusStrategyId::ByProfit, &config).is_err());
    }

    #[test]
    fn builds_simple_revenue() {
        let calc = create_revenue_calculator(RevenueStrategyId::Simple).unwrap();
        let product = Product {
            sku: "SKU_010".to_string(),
            name: "Coffee".to_string(),
            purchase_price: dec!(5),
            sale_price: dec!(8),
        };
        let item = PurchaseItem {
            sku: "SKU_010".to_string(),
            quantity: dec!(2),
            discount: dec!(50),
            price: None,
            sale_price: None,
        };
        assert_eq!(calc.calculate_revenue(&item, &product).unwrap(), dec!(8));
    }
}
