//! # Sales Analytics Engine
//!
//! This crate turns a static sales dataset into a ranked, per-seller report:
//! revenue, profit, number of sales, a rank-based bonus, and each seller's
//! best-selling products.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It performs no I/O and
//!   depends only on `core-types`, `configuration` and `strategies`.
//! - **Stateless Calculation:** The `SalesAnalyzer` holds no state between runs.
//!   All working state lives inside a single `analyze` call, so one analyzer can
//!   serve concurrent callers.
//! - **Injected Formulas:** Revenue and bonus formulas are supplied through
//!   `AnalysisOptions`; the analyzer has no built-in default.
//!
//! ## Public API
//!
//! - `SalesAnalyzer`: The struct that contains the aggregation and ranking logic.
//! - `analyze_sales_data`: Shorthand for `SalesAnalyzer::new().analyze(..)`.
//! - `AnalysisOptions`: The strategies and settings for a run.
//! - `SellerReport`: One finalized row of the output.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod options;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::SalesAnalyzer;
pub use error::AnalyticsError;
pub use options::AnalysisOptions;
pub use report::SellerReport;

use core_types::Dataset;

/// Analyzes `dataset` with the strategies in `options`.
///
/// Fails with `AnalyticsError::InvalidData` when any collection is empty and
/// with `AnalyticsError::InvalidOptions` when a strategy is missing.
pub fn analyze_sales_data(
    dataset: &Dataset,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, AnalyticsError> {
    SalesAnalyzer::new().analyze(dataset, options)
}
