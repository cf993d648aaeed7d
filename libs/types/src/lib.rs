//! Types library for the matching venue
//!
//! This library provides all core type definitions used by the matching
//! engine, ensuring type safety and deterministic behavior.
//!
//! # Modules
//! - `ids`: Unique identifiers (OrderId)
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `order`: Order intent types (limit, market)
//! - `trade`: Trade execution types
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
    pub use crate::errors::*;
}
