//! Matching logic module
//!
//! Crossing predicates and the priority policies (price-time, pro-rata).

pub mod crossing;
pub mod policy;

pub use crossing::crosses;
pub use policy::MatchingAlgorithm;
