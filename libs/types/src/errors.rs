//! Error types for the matching engine
//!
//! Exactly two failure kinds exist: validation failures and the trading
//! gate. Matching itself cannot fail once validation passes — an empty
//! book or a non-crossing order is a normal, trade-free result. Display
//! strings are part of the call contract; callers surface them verbatim.

use crate::ids::OrderId;
use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Order validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Trading is currently disabled")]
    TradingDisabled,
}

/// First detected rule violation for an incoming order
///
/// Side validity and the market-no-price rule need no variants here: both
/// are enforced by the type system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id must not be the nil UUID")]
    NilOrderId,

    #[error("quantity must be greater than or equal to 0.00000001")]
    QuantityBelowMinimum,

    #[error("price must be a positive number")]
    NonPositivePrice,

    #[error("id {0} already rests in the book")]
    DuplicateOrderId(OrderId),
}
