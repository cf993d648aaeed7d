//! Resting-order store for a single instrument
//!
//! A flat index (id → order state) with one arrival-ordered key list per
//! side. The priority-ordered view is always a recomputed projection over
//! the index — never cached, never separately mutated — so the book and
//! its sorted views cannot drift.
//!
//! Determinism: stable sorts and first-wins minimum selection over the
//! arrival-ordered key lists make ordering bit-exact even when price,
//! timestamp, and quantity all tie.

use std::collections::HashMap;
use types::errors::ValidationError;
use types::ids::OrderId;
use types::numeric::Quantity;
use types::order::{LimitOrder, Side};

use crate::matching::policy::MatchingAlgorithm;

/// Resting limit orders, partitioned by side
///
/// The book exclusively owns resting orders; the engine is its sole
/// mutator. Orders never move between sides.
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// All resting orders keyed by id
    orders: HashMap<OrderId, LimitOrder>,
    /// Bid ids in arrival order
    bids: Vec<OrderId>,
    /// Ask ids in arrival order
    asks: Vec<OrderId>,
    /// Priority policy, fixed at construction
    algorithm: MatchingAlgorithm,
}

impl OrderBook {
    /// Create an empty book with the given priority policy
    pub fn new(algorithm: MatchingAlgorithm) -> Self {
        Self {
            orders: HashMap::new(),
            bids: Vec::new(),
            asks: Vec::new(),
            algorithm,
        }
    }

    /// The active priority policy
    pub fn algorithm(&self) -> MatchingAlgorithm {
        self.algorithm
    }

    /// Check whether an order id is live in the book
    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.contains_key(id)
    }

    /// Number of resting orders across both sides
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the book has no resting orders
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Insert a limit order with positive remaining quantity
    ///
    /// Fails if the id is already live; ids must be unique among resting
    /// orders.
    pub fn insert(&mut self, order: LimitOrder) -> Result<(), ValidationError> {
        if self.orders.contains_key(&order.id) {
            return Err(ValidationError::DuplicateOrderId(order.id));
        }
        debug_assert!(!order.quantity.is_zero(), "resting orders must have quantity");
        self.side_keys_mut(order.side).push(order.id);
        self.orders.insert(order.id, order);
        Ok(())
    }

    /// Subtract `filled` from an order's remaining quantity
    ///
    /// The order is removed the moment its remainder reaches zero;
    /// subtraction clamps, so over-fills cannot leave a negative resident.
    pub fn reduce_or_remove(&mut self, id: &OrderId, filled: Quantity) {
        let Some(order) = self.orders.get_mut(id) else {
            return;
        };
        order.quantity = order.quantity - filled;
        if order.quantity.is_zero() {
            let side = order.side;
            self.orders.remove(id);
            self.side_keys_mut(side).retain(|key| key != id);
        }
    }

    /// Best-priority resting order on `side`, or `None` if the side is
    /// empty
    pub fn best(&self, side: Side) -> Option<&LimitOrder> {
        // min_by keeps the first of equal elements, so arrival order is
        // the final tie-breaker.
        self.side_orders(side)
            .min_by(|a, b| self.algorithm.compare(side, a, b))
    }

    /// Full bid side, freshly sorted by the active policy
    pub fn bids(&self) -> Vec<LimitOrder> {
        self.side_sorted(Side::Bid)
    }

    /// Full ask side, freshly sorted by the active policy
    pub fn asks(&self) -> Vec<LimitOrder> {
        self.side_sorted(Side::Ask)
    }

    fn side_sorted(&self, side: Side) -> Vec<LimitOrder> {
        let mut orders: Vec<LimitOrder> = self.side_orders(side).cloned().collect();
        orders.sort_by(|a, b| self.algorithm.compare(side, a, b));
        orders
    }

    fn side_orders(&self, side: Side) -> impl Iterator<Item = &LimitOrder> {
        self.side_keys(side)
            .iter()
            .filter_map(|id| self.orders.get(id))
    }

    fn side_keys(&self, side: Side) -> &[OrderId] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn side_keys_mut(&mut self, side: Side) -> &mut Vec<OrderId> {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }
}
