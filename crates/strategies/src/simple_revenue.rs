use crate::error::StrategyError;
use crate::RevenueCalculator;
use core_types::{Product, PurchaseItem};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Unit price times quantity, less the line's percentage discount.
///
/// The unit price is the line's own `price`, then its `sale_price`, then the
/// catalogue `sale_price`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    pub fn new() -> Self {
        Self
    }
}

impl RevenueCalculator for SimpleRevenue {
    fn calculate_revenue(
        &self,
        item: &PurchaseItem,
        product: &Product,
    ) -> Result<Decimal, StrategyError> {
        let price = item.price.or(item.sale_price).unwrap_or(product.sale_price);
        let discount_factor = item
            .discount
            .checked_div(dec!(100))
            .and_then(|share| Decimal::ONE.checked_sub(share));

        discount_factor
            .and_then(|factor| price.checked_mul(item.quantity)?.checked_mul(factor))
            .ok_or_else(|| {
                StrategyError::Overflow(format!(
                    "revenue of {} x {} at {}",
                    item.quantity, item.sku, price
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            sku: "SKU_001".to_string(),
            name: "Green tea".to_string(),
            purchase_price: dec!(60),
            sale_price: dec!(100),
        }
    }

    fn item(quantity: Decimal, discount: Decimal) -> PurchaseItem {
        PurchaseItem {
            sku: "SKU_001".to_string(),
            quantity,
            discount,
            price: None,
            sale_price: None,
        }
    }

    #[test]
    fn applies_discount_to_catalogue_price() {
        let revenue = SimpleRevenue.calculate_revenue(&item(dec!(3), dec!(10)), &product()).unwrap();
        assert_eq!(revenue, dec!(270));
    }

    #[test]
    fn prefers_line_price_over_sale_price_over_catalogue() {
        let mut line = item(dec!(2), Decimal::ZERO);
        line.sale_price = Some(dec!(80));
        assert_eq!(SimpleRevenue.calculate_revenue(&line, &product()).unwrap(), dec!(160));

        line.price = Some(dec!(75));
        assert_eq!(SimpleRevenue.calculate_revenue(&line, &product()).unwrap(), dec!(150));
    }

    #[test]
    fn missing_quantity_yields_zero() {
        let revenue = SimpleRevenue.calculate_revenue(&item(Decimal::ZERO, dec!(5)), &product()).unwrap();
        assert_eq!(revenue, Decimal::ZERO);
    }

    #[test]
    fn huge_price_times_quantity_is_an_overflow_error() {
        let mut line = item(dec!(10000000000), Decimal::ZERO);
        line.sale_price = Some(dec!(100000000000000000000));

        let result = SimpleRevenue.calculate_revenue(&line, &product());
        assert!(matches!(result, Err(StrategyError::Overflow(_))));
    }

    #[test]
    fn full_discount_yields_zero() {
        let revenue = SimpleRevenue.calculate_revenue(&item(dec!(4), dec!(100)), &product()).unwrap();
        assert_eq!(revenue, Decimal::ZERO);
    }
}
