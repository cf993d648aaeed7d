//! Matching Engine Service
//!
//! Single-instrument order matching core: accepts limit and market order
//! intents, maintains the resting book, and decides which resting orders
//! execute against an incoming order, at what price, and for what
//! quantity. Supports price-time and pro-rata priority, selected at
//! construction.
//!
//! **Key Invariants:**
//! - Trade price is always the resting order's limit price
//! - Deterministic matching (same inputs → same outputs)
//! - Conservation of quantity
//! - A resting order with zero remaining quantity is removed immediately

pub mod book;
pub mod matching;
pub mod validator;
pub mod engine;

pub use engine::MatchingEngine;
pub use matching::policy::MatchingAlgorithm;
