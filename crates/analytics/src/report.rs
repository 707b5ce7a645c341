use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The finalized figures for one seller.
///
/// This struct is the final output of the `SalesAnalyzer`. Money fields are
/// rounded to exactly two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    /// Product names (or the raw SKU if the product is unknown), best seller first.
    pub top_products: Vec<String>,
    pub bonus: Decimal,
}
