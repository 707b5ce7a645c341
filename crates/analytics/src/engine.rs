use crate::error::AnalyticsError;
use crate::options::AnalysisOptions;
use crate::report::SellerReport;
use configuration::AnalysisSettings;
use core_types::{Dataset, Product, ReferenceKind, RevenueBasis, SellerStat, UnresolvedPolicy};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use strategies::{BonusCalculator, RevenueCalculator};

/// Number of decimal places kept in reported money figures.
const MONEY_SCALE: u32 = 2;

/// A stateless calculator that turns a sales dataset into ranked seller reports.
#[derive(Debug, Default)]
pub struct SalesAnalyzer {}

/// The per-run working state: one accumulator per seller plus hash indices.
struct Ledger<'a> {
    stats: Vec<SellerStat>,
    seller_index: HashMap<&'a str, usize>,
    product_index: HashMap<&'a str, &'a Product>,
}

impl SalesAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for the sales analysis.
    ///
    /// # Arguments
    ///
    /// * `dataset` - Customers, products, sellers and purchase records. Each collection must be non-empty.
    /// * `options` - The revenue and bonus strategies plus analysis settings.
    ///
    /// # Returns
    ///
    /// One `SellerReport` per input seller, ordered by profit (highest first).
    /// Sellers with equal profit keep their order from the seller list.
    pub fn analyze(
        &self,
        dataset: &Dataset,
        options: &AnalysisOptions,
    ) -> Result<Vec<SellerReport>, AnalyticsError> {
        self.validate_dataset(dataset)?;
        let (revenue_calc, bonus_calc) = options.resolve()?;
        let settings = options.analysis_settings();

        tracing::info!(
            sellers = dataset.sellers.len(),
            products = dataset.products.len(),
            purchase_records = dataset.purchase_records.len(),
            "starting sales analysis"
        );

        let mut ledger = self.initialize(dataset);
        self.fold_records(dataset, revenue_calc, settings, &mut ledger)?;
        self.rank(&mut ledger);
        let reports = self.finalize(&ledger, bonus_calc, settings);

        tracing::info!(reports = reports.len(), "sales analysis complete");
        Ok(reports)
    }

    /// Rejects a dataset with any empty collection.
    fn validate_dataset(&self, dataset: &Dataset) -> Result<(), AnalyticsError> {
        let collections = [
            ("customers", dataset.customers.is_empty()),
            ("products", dataset.products.is_empty()),
            ("sellers", dataset.sellers.is_empty()),
            ("purchase_records", dataset.purchase_records.is_empty()),
        ];
        for (name, is_empty) in collections {
            if is_empty {
                return Err(AnalyticsError::InvalidData(format!(
                    "'{name}' must be a non-empty collection"
                )));
            }
        }
        Ok(())
    }

    /// Builds zeroed accumulators and the seller/product lookup tables.
    ///
    /// A duplicated id or SKU resolves to its last occurrence.
    fn initialize<'a>(&self, dataset: &'a Dataset) -> Ledger<'a> {
        let stats: Vec<SellerStat> = dataset.sellers.iter().map(SellerStat::new).collect();
        let seller_index = dataset
            .sellers
            .iter()
            .enumerate()
            .map(|(slot, seller)| (seller.id.as_str(), slot))
            .collect();
        let product_index = dataset
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        Ledger {
            stats,
            seller_index,
            product_index,
        }
    }

    /// Folds every purchase record, in order, into its seller's accumulator.
    fn fold_records(
        &self,
        dataset: &Dataset,
        revenue_calc: &dyn RevenueCalculator,
        settings: &AnalysisSettings,
        ledger: &mut Ledger<'_>,
    ) -> Result<(), AnalyticsError> {
        let policy = settings.unresolved_references;
        let mut skipped_records = 0usize;
        let mut skipped_items = 0usize;

        for (position, record) in dataset.purchase_records.iter().enumerate() {
            let Some(&slot) = ledger.seller_index.get(record.seller_id.as_str()) else {
                check_unresolved(policy, ReferenceKind::Seller, &record.seller_id, position)?;
                skipped_records += 1;
                continue;
            };
            let stat = &mut ledger.stats[slot];
            stat.sales_count += 1;
            let overflow = |what| AnalyticsError::Overflow {
                seller: record.seller_id.clone(),
                what,
            };

            let mut line_revenue = Decimal::ZERO;
            for item in &record.items {
                let Some(product) = ledger.product_index.get(item.sku.as_str()) else {
                    check_unresolved(policy, ReferenceKind::Product, &item.sku, position)?;
                    skipped_items += 1;
                    continue;
                };

                let item_revenue = revenue_calc.calculate_revenue(item, product)?;
                let cost = product
                    .purchase_price
                    .checked_mul(item.quantity)
                    .ok_or_else(|| overflow("item cost"))?;

                line_revenue = line_revenue
                    .checked_add(item_revenue)
                    .ok_or_else(|| overflow("item revenue"))?;
                stat.profit = item_revenue
                    .checked_sub(cost)
                    .and_then(|margin| stat.profit.checked_add(margin))
                    .ok_or_else(|| overflow("item profit"))?;
                stat.products_sold
                    .add(&item.sku, item.quantity)
                    .ok_or_else(|| overflow("units sold"))?;
            }

            let record_revenue = match settings.revenue_basis {
                RevenueBasis::ItemLines => line_revenue,
                RevenueBasis::RecordTotal => record.total_amount.unwrap_or(line_revenue),
            };
            stat.revenue = stat
                .revenue
                .checked_add(record_revenue)
                .ok_or_else(|| overflow("record revenue"))?;
        }

        tracing::debug!(skipped_records, skipped_items, "purchase records folded");
        Ok(())
    }

    /// Orders sellers by profit, highest first. The sort is stable.
    fn rank(&self, ledger: &mut Ledger<'_>) {
        ledger.stats.sort_by(|a, b| b.profit.cmp(&a.profit));
        tracing::debug!(
            leader = ledger.stats.first().map(|s| s.id.as_str()),
            "sellers ranked by profit"
        );
    }

    /// Assigns bonuses by rank and turns each accumulator into a report.
    fn finalize(
        &self,
        ledger: &Ledger<'_>,
        bonus_calc: &dyn BonusCalculator,
        settings: &AnalysisSettings,
    ) -> Vec<SellerReport> {
        let seller_count = ledger.stats.len();

        ledger
            .stats
            .iter()
            .enumerate()
            .map(|(rank, stat)| {
                let bonus = bonus_calc.calculate_bonus(rank, seller_count, stat);
                let top_products = stat
                    .products_sold
                    .top(settings.top_products_limit)
                    .into_iter()
                    .map(|(sku, _)| {
                        ledger
                            .product_index
                            .get(sku)
                            .map_or_else(|| sku.to_string(), |product| product.name.clone())
                    })
                    .collect();

                SellerReport {
                    seller_id: stat.id.clone(),
                    name: stat.name.clone(),
                    revenue: round_money(stat.revenue),
                    profit: round_money(stat.profit),
                    sales_count: stat.sales_count,
                    top_products,
                    bonus: round_money(bonus),
                }
            })
            .collect()
    }
}

/// Applies the unresolved-reference policy: `Ok` means skip, `Err` aborts the run.
fn check_unresolved(
    policy: UnresolvedPolicy,
    kind: ReferenceKind,
    key: &str,
    record: usize,
) -> Result<(), AnalyticsError> {
    match policy {
        UnresolvedPolicy::Skip => {
            tracing::warn!(%kind, key, record, "skipping unresolved reference");
            Ok(())
        }
        UnresolvedPolicy::Reject => Err(AnalyticsError::UnresolvedReference {
            kind,
            key: key.to_string(),
            record,
        }),
    }
}

/// Rounds half away from zero to two places and pins the scale at two.
fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}
