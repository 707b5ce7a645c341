//! # Sales Strategy Library
//!
//! This crate holds the pluggable formulas the sales analyzer is parameterized
//! with. It defines one trait per formula and provides the stock
//! implementations.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   files or output formats. It depends only on `core-types` and `configuration`.
//! - **Formula Agnostic Analyzer:** The analyzer only sees `RevenueCalculator` and
//!   `BonusCalculator`, so any formula (including a plain closure) can be swapped in.
//! - **Extensibility:** Adding a formula means a new module implementing one of the
//!   traits, a new variant in `RevenueStrategyId`/`BonusStrategyId`, and a new arm in
//!   the `factory`.

// Declare all the modules that constitute this crate.
pub mod bonus_by_profit;
pub mod error;
pub mod factory;
pub mod simple_revenue;

// Re-export the key components to create a clean, public-facing API.
pub use bonus_by_profit::BonusByProfit;
pub use error::StrategyError;
pub use factory::{create_bonus_calculator, create_revenue_calculator};
pub use simple_revenue::SimpleRevenue;

// Re-export the strategy identifiers from core_types
pub use core_types::{BonusStrategyId, RevenueStrategyId};

use core_types::{Product, PurchaseItem, SellerStat};
use rust_decimal::Decimal;

/// Computes the gross revenue of a single purchased item line.
///
/// The `Send + Sync` bounds let one set of strategies be shared by analyses
/// running on different threads.
pub trait RevenueCalculator: Send + Sync {
    /// Returns the revenue for `item`, given the catalogue entry it resolved to.
    ///
    /// Fails with `StrategyError::Overflow` when the figures exceed `Decimal`'s range.
    fn calculate_revenue(&self, item: &PurchaseItem, product: &Product)
        -> Result<Decimal, StrategyError>;
}

/// Computes the bonus owed to a seller from their final ranking.
pub trait BonusCalculator: Send + Sync {
    /// # Arguments
    ///
    /// * `rank` - 0-based position after sorting by profit, best first.
    /// * `seller_count` - Number of ranked sellers.
    /// * `seller` - The seller's accumulated totals.
    fn calculate_bonus(&self, rank: usize, seller_count: usize, seller: &SellerStat) -> Decimal;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&PurchaseItem, &Product) -> Result<Decimal, StrategyError> + Send + Sync,
{
    fn calculate_revenue(
        &self,
        item: &PurchaseItem,
        product: &Product,
    ) -> Result<Decimal, StrategyError> {
        self(item, product)
    }
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerStat) -> Decimal + Send + Sync,
{
    fn calculate_bonus(&self, rank: usize, seller_count: usize, seller: &SellerStat) -> Decimal {
        self(rank, seller_count, seller)
    }
}
