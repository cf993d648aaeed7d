//! Crossing detection logic
//!
//! Determines when an incoming order's price permits execution against a
//! resting order.

use types::numeric::Price;
use types::order::{Order, Side};

/// Check if a bid and ask can match at given prices
///
/// For a buy order to match with a sell order the buy price must be >=
/// the sell price.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if an incoming order crosses a resting order at `resting_price`
///
/// Market orders ignore price entirely and always cross.
pub fn crosses(incoming: &Order, resting_price: Price) -> bool {
    match incoming {
        Order::Market(_) => true,
        Order::Limit(limit) => match limit.side {
            Side::Bid => can_match(limit.price, resting_price),
            Side::Ask => can_match(resting_price, limit.price),
        },
    }
}
