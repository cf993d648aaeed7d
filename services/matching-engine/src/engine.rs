//! Matching engine core
//!
//! Orchestrates the trading gate, validation, the matching sweep, and
//! book mutation. `match_order` is a synchronous decision function: it
//! runs to completion, mutates nothing but the book, and performs no
//! I/O. For shared use, callers must treat each call as one critical
//! section (e.g. one mutex per engine instance); `&mut self` enforces
//! exactly that within safe Rust.

use types::errors::{EngineError, ValidationError};
use types::numeric::Quantity;
use types::order::{LimitOrder, Order, Side};
use types::trade::Trade;

use crate::book::OrderBook;
use crate::matching::{crossing, policy::MatchingAlgorithm};
use crate::validator;

/// Single-instrument matching engine
///
/// Instance-scoped state only; multiple instruments require multiple
/// engine instances.
pub struct MatchingEngine {
    book: OrderBook,
    trading_active: bool,
}

impl MatchingEngine {
    /// Create an engine with the given priority policy
    ///
    /// The policy is fixed for the engine's lifetime. Trading starts
    /// enabled.
    pub fn new(algorithm: MatchingAlgorithm) -> Self {
        Self {
            book: OrderBook::new(algorithm),
            trading_active: true,
        }
    }

    /// The policy selected at construction
    pub fn algorithm(&self) -> MatchingAlgorithm {
        self.book.algorithm()
    }

    /// Halt matching; idempotent
    pub fn stop_trading(&mut self) {
        self.trading_active = false;
    }

    /// Resume matching; idempotent
    pub fn start_trading(&mut self) {
        self.trading_active = true;
    }

    /// Whether the engine currently accepts orders
    pub fn is_trading_active(&self) -> bool {
        self.trading_active
    }

    /// Match an incoming order against the book
    ///
    /// Returns the trades produced, in the sequence matches occurred; an
    /// empty list is a normal, successful result. On any error the book
    /// is untouched. A limit-order remainder rests in the book; a
    /// market-order remainder is discarded.
    pub fn match_order(&mut self, order: Order) -> Result<Vec<Trade>, EngineError> {
        if !self.trading_active {
            return Err(EngineError::TradingDisabled);
        }
        validator::validate(&order)?;
        if self.book.contains(&order.id()) {
            return Err(ValidationError::DuplicateOrderId(order.id()).into());
        }

        let (trades, remaining) = self.sweep(&order);

        if let Order::Limit(limit) = order {
            if !remaining.is_zero() {
                self.book.insert(LimitOrder {
                    quantity: remaining,
                    ..limit
                })?;
            }
        }
        Ok(trades)
    }

    /// Current bid side, best priority first
    pub fn bids(&self) -> Vec<LimitOrder> {
        self.book.bids()
    }

    /// Current ask side, best priority first
    pub fn asks(&self) -> Vec<LimitOrder> {
        self.book.asks()
    }

    /// Greedy sweep against the best opposite resting order
    ///
    /// Each iteration pairs the incoming remainder with the current best
    /// counter-order and yields at most one trade. Bounded by the book's
    /// finite size: every iteration either exhausts the incoming order or
    /// removes a resting one.
    fn sweep(&mut self, incoming: &Order) -> (Vec<Trade>, Quantity) {
        let mut trades = Vec::new();
        let mut remaining = incoming.quantity();

        while !remaining.is_zero() {
            let Some(best) = self.book.best(incoming.side().opposite()) else {
                break;
            };
            if !crossing::crosses(incoming, best.price) {
                break;
            }

            let resting_id = best.id;
            let resting_price = best.price;
            let fill = remaining.min(best.quantity);

            trades.push(match incoming.side() {
                Side::Bid => Trade::new(resting_id, incoming.id(), resting_price, fill),
                Side::Ask => Trade::new(incoming.id(), resting_id, resting_price, fill),
            });

            self.book.reduce_or_remove(&resting_id, fill);
            remaining = remaining - fill;
        }

        (trades, remaining)
    }
}
