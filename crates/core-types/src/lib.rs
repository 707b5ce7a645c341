pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusStrategyId, ReferenceKind, RevenueBasis, RevenueStrategyId, UnresolvedPolicy};
pub use error::CoreError;
pub use structs::{
    Customer, Dataset, Product, ProductTally, PurchaseItem, PurchaseRecord, Seller, SellerStat,
};
