//! Unique identifier types for venue entities
//!
//! Order identifiers use UUID v7 for time-sortable ordering. The engine
//! treats them as opaque: callers supply them, and uniqueness is only
//! enforced among live resting orders.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an order
///
/// Caller-supplied and opaque to the engine. `new()` mints a UUID v7 for
/// callers that want time-sortable ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Create a new OrderId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Check for the all-zero UUID (rejected by validation)
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_creation() {
        let id1 = OrderId::new();
        let id2 = OrderId::new();
        assert_ne!(id1, id2, "OrderIds should be unique");
    }

    #[test]
    fn test_order_id_nil() {
        assert!(OrderId::from_uuid(Uuid::nil()).is_nil());
        assert!(!OrderId::new().is_nil());
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
