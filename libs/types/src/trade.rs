//! Trade execution types
//!
//! A trade records one pairing of an ask and a bid. The price is always
//! the resting (book-side) order's limit price; the incoming order never
//! sets the trade price, even for limit-vs-limit crosses.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A completed execution between a resting and an incoming order
///
/// The engine returns trades to the caller and retains none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub ask_order_id: OrderId,
    pub bid_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    /// Create a new trade
    pub fn new(
        ask_order_id: OrderId,
        bid_order_id: OrderId,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            ask_order_id,
            bid_order_id,
            price,
            quantity,
        }
    }

    /// Trade value (price × quantity)
    pub fn notional(&self) -> Decimal {
        self.quantity.as_decimal() * self.price.as_decimal()
    }
}
