use core_types::ReferenceKind;
use strategies::StrategyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input data: {0}")]
    InvalidData(String),

    #[error("Invalid analysis options: {0}")]
    InvalidOptions(String),

    #[error("Purchase record #{record} references unknown {kind} '{key}'")]
    UnresolvedReference {
        kind: ReferenceKind,
        key: String,
        record: usize,
    },

    #[error("Arithmetic overflow in the totals of seller '{seller}' while adding {what}")]
    Overflow { seller: String, what: &'static str },

    #[error("Strategy failed: {0}")]
    Strategy(#[from] StrategyError),
}
