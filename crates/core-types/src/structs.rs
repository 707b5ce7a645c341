use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A customer record. No field is consumed by the analysis, so it is kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customer(pub serde_json::Value);

/// A catalogue entry, keyed by its unique SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    /// What the business paid per unit; the basis of cost-of-goods.
    pub purchase_price: Decimal,
    /// List price, used when an item line carries no price of its own.
    #[serde(default)]
    pub sale_price: Decimal,
}

/// A seller whose performance is being measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// The display name used in reports: first and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One line of a purchase: a quantity of a single SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub sku: String,
    /// Units bought. Missing in the source data means zero.
    #[serde(default)]
    pub quantity: Decimal,
    /// Percentage discount, 0 to 100.
    #[serde(default)]
    pub discount: Decimal,
    /// Explicit unit price for this line, if the source recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Unit sale price captured at checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
}

/// A single transaction attributed to one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub seller_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub items: Vec<PurchaseItem>,
    /// The receipt total as recorded at the till.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
}

/// The full input bundle for one analysis run.
///
/// Absent collections deserialize as empty and are rejected by the analyzer's validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

/// Cumulative units sold per SKU, remembering the order in which SKUs were first sold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTally {
    entries: Vec<(String, Decimal)>,
    index: HashMap<String, usize>,
}

impl ProductTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `sku`, creating the entry at zero on first sight.
    ///
    /// Returns the new running total, or `None` (leaving the tally untouched)
    /// if the total would overflow.
    pub fn add(&mut self, sku: &str, quantity: Decimal) -> Option<Decimal> {
        match self.index.get(sku) {
            Some(&slot) => {
                let total = self.entries[slot].1.checked_add(quantity)?;
                self.entries[slot].1 = total;
                Some(total)
            }
            None => {
                self.index.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), quantity));
                Some(quantity)
            }
        }
    }

    pub fn get(&self, sku: &str) -> Option<Decimal> {
        self.index.get(sku).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(sku, quantity)` pairs in first-sold order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(sku, qty)| (sku.as_str(), *qty))
    }

    /// The best sellers by quantity, highest first, capped at `limit`.
    ///
    /// The sort is stable: SKUs with equal quantities keep their first-sold order.
    pub fn top(&self, limit: usize) -> Vec<(&str, Decimal)> {
        let mut ranked: Vec<(&str, Decimal)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

/// The running totals for one seller while purchase records are folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    pub products_sold: ProductTally,
}

impl SellerStat {
    /// Creates a zeroed accumulator for `seller`.
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.full_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: ProductTally::new(),
        }
    }
}
