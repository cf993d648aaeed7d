//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point
//! errors). Quantities carry the venue's minimum increment of 1e-8;
//! because the arithmetic is exact, "dust" remainders compare equal to
//! zero and never linger in the book.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Limit price for an order
///
/// Thin ordered wrapper over `Decimal`. Positivity is an order-level rule
/// enforced by validation, not by this constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Wrap a raw decimal value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create from a whole number of quote units
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse from a decimal string, e.g. "3000.50"
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        Decimal::from_str_exact(s).map(Self)
    }

    /// Get the inner decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check whether the price is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order quantity
///
/// Non-negative by construction through `try_new`; arithmetic clamps at
/// zero so a fully filled order always compares equal to `zero()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a quantity, rejecting negative values
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value >= Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The zero quantity
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The minimum tradable increment (1e-8)
    pub fn minimum() -> Self {
        Self(Decimal::new(1, 8))
    }

    /// Create from a whole number of base units
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse from a decimal string, e.g. "1.5"
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        Decimal::from_str_exact(s).map(Self)
    }

    /// Get the inner decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check for zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    /// Subtraction clamped at zero
    fn sub(self, rhs: Quantity) -> Quantity {
        Quantity::try_new(self.0 - rhs.0).unwrap_or(Quantity::zero())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
