use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which revenue formula the strategy factory should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueStrategyId {
    /// Discounted unit price times quantity.
    #[default]
    Simple,
}

/// Identifies which bonus formula the strategy factory should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusStrategyId {
    /// Tiered percentage of profit based on the seller's rank.
    #[default]
    ByProfit,
}

/// Where a seller's revenue figure comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueBasis {
    /// Sum of the revenue strategy over every counted item line.
    #[default]
    ItemLines,
    /// The record's `total_amount`, falling back to the item-line sum when absent.
    RecordTotal,
}

impl FromStr for RevenueBasis {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "item_lines" => Ok(Self::ItemLines),
            "record_total" => Ok(Self::RecordTotal),
            other => Err(CoreError::UnknownIdentifier("revenue basis", other.to_string())),
        }
    }
}

/// What to do when a purchase record points at a seller or product that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Drop the record (unknown seller) or the item line (unknown sku) and keep going.
    #[default]
    Skip,
    /// Abort the whole analysis on the first dangling reference.
    Reject,
}

impl FromStr for UnresolvedPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(Self::Skip),
            "reject" => Ok(Self::Reject),
            other => Err(CoreError::UnknownIdentifier("unresolved reference policy", other.to_string())),
        }
    }
}

/// The kind of key a purchase record failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceKind {
    Seller,
    Product,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Seller => write!(f, "seller"),
            ReferenceKind::Product => write!(f, "product"),
        }
    }
}
