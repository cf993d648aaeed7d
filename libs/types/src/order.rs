//! Order intent types
//!
//! An incoming order is either a limit order (with a price bound) or a
//! market order (no price bound). The two kinds are separate structs under
//! a tagged sum type, so "market orders must not carry a price" is a
//! compile-time invariant rather than a runtime check.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order
    Bid,
    /// Sell order
    Ask,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

/// Resting order with a caller-specified price bound
///
/// The only kind of order the book stores. `timestamp` is the
/// caller-supplied time-priority tie-breaker; the engine does not check
/// it against a wall clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub timestamp: i64,
}

/// Order with no price bound, takes the best available opposite price
///
/// Never rests: any remainder after matching is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub id: OrderId,
    pub side: Side,
    pub quantity: Quantity,
    pub timestamp: i64,
}

/// An incoming order intent, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Order {
    Limit(LimitOrder),
    Market(MarketOrder),
}

impl Order {
    pub fn id(&self) -> OrderId {
        match self {
            Order::Limit(order) => order.id,
            Order::Market(order) => order.id,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            Order::Limit(order) => order.side,
            Order::Market(order) => order.side,
        }
    }

    pub fn quantity(&self) -> Quantity {
        match self {
            Order::Limit(order) => order.quantity,
            Order::Market(order) => order.quantity,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            Order::Limit(order) => order.timestamp,
            Order::Market(order) => order.timestamp,
        }
    }

    /// Limit price, if the order has one
    pub fn price(&self) -> Option<Price> {
        match self {
            Order::Limit(order) => Some(order.price),
            Order::Market(_) => None,
        }
    }

    pub fn is_market(&self) -> bool {
        matches!(self, Order::Market(_))
    }
}

impl From<LimitOrder> for Order {
    fn from(order: LimitOrder) -> Self {
        Order::Limit(order)
    }
}

impl From<MarketOrder> for Order {
    fn from(order: MarketOrder) -> Self {
        Order::Market(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit_order() -> LimitOrder {
        LimitOrder {
            id: OrderId::new(),
            side: Side::Bid,
            price: Price::from_u64(50_000),
            quantity: Quantity::from_str("1.5").unwrap(),
            timestamp: 1,
        }
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Bid.opposite(), Side::Ask);
        assert_eq!(Side::Ask.opposite(), Side::Bid);
    }

    #[test]
    fn test_order_accessors() {
        let limit = limit_order();
        let order = Order::from(limit.clone());
        assert_eq!(order.id(), limit.id);
        assert_eq!(order.side(), Side::Bid);
        assert_eq!(order.quantity(), limit.quantity);
        assert_eq!(order.price(), Some(limit.price));
        assert!(!order.is_market());
    }

    #[test]
    fn test_market_order_has_no_price() {
        let order = Order::Market(MarketOrder {
            id: OrderId::new(),
            side: Side::Ask,
            quantity: Quantity::from_u64(2),
            timestamp: 7,
        });
        assert_eq!(order.price(), None);
        assert!(order.is_market());
    }

    #[test]
    fn test_order_serialization_is_tagged() {
        let order = Order::from(limit_order());
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"type\":\"LIMIT\""));

        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }

    #[test]
    fn test_market_order_serialization_omits_price() {
        let order = Order::Market(MarketOrder {
            id: OrderId::new(),
            side: Side::Bid,
            quantity: Quantity::from_u64(1),
            timestamp: 1,
        });
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"type\":\"MARKET\""));
        assert!(!json.contains("price"));
    }
}
