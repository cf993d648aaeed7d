//! Pre-match order validation
//!
//! Runs before any book access and stops at the first violated rule.
//! Side validity and the market-no-price rule are type-level guarantees,
//! so only the id, quantity, and limit price need runtime checks.

use rust_decimal::Decimal;
use types::errors::ValidationError;
use types::numeric::Quantity;
use types::order::Order;

/// Validate an incoming order
///
/// Returns the first violated rule, checked in field order: id,
/// quantity, price.
pub fn validate(order: &Order) -> Result<(), ValidationError> {
    if order.id().is_nil() {
        return Err(ValidationError::NilOrderId);
    }
    if order.quantity() < Quantity::minimum() {
        return Err(ValidationError::QuantityBelowMinimum);
    }
    if let Order::Limit(limit) = order {
        if limit.price.as_decimal() <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice);
        }
    }
    Ok(())
}
