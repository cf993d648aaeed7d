//! Priority policies for resting orders
//!
//! Both policies rank by best price first (lowest ask, highest bid).
//! They differ only in how ties at one price level break: price-time
//! rewards queue position, pro-rata rewards size commitment. Cross-level
//! sweeping is identical for both.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use types::order::{LimitOrder, Side};

/// Matching priority policy, fixed per engine instance at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchingAlgorithm {
    /// Best price, then earliest arrival
    PriceTime,
    /// Best price, then largest remaining quantity, then earliest arrival
    ProRata,
}

impl MatchingAlgorithm {
    /// Rank two resting orders on the same side; `Ordering::Less` matches
    /// first.
    ///
    /// Orders never move between sides, so `a` and `b` always share
    /// `side`.
    pub fn compare(&self, side: Side, a: &LimitOrder, b: &LimitOrder) -> Ordering {
        let by_price = match side {
            Side::Ask => a.price.cmp(&b.price),
            Side::Bid => b.price.cmp(&a.price),
        };
        by_price.then_with(|| match self {
            MatchingAlgorithm::PriceTime => a.timestamp.cmp(&b.timestamp),
            MatchingAlgorithm::ProRata => b
                .quantity
                .cmp(&a.quantity)
                .then_with(|| a.timestamp.cmp(&b.timestamp)),
        })
    }
}
