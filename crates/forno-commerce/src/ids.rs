//! Identifier newtypes.
//!
//! Catalog ids come from the menu provider and are compared verbatim.
//! Order ids are minted here when a cart is finalized.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }
    };
}

define_id!(
    /// Stable menu item id, e.g. `"margherita"`. Unique within a catalog.
    ItemId
);

define_id!(
    /// Order request id.
    OrderId
);

impl OrderId {
    /// Mint a fresh id: wall-clock micros plus a process-wide sequence.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};

        static SEQUENCE: AtomicU64 = AtomicU64::new(0);

        let micros = chrono::Utc::now().timestamp_micros();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("ord-{:x}-{:04x}", micros, seq & 0xffff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_is_verbatim() {
        let id = ItemId::new("quattro-formaggi");
        assert_eq!(id.as_str(), "quattro-formaggi");
        assert_eq!(id.to_string(), "quattro-formaggi");
        assert_ne!(id, ItemId::from("Quattro-Formaggi"));
    }

    #[test]
    fn test_order_ids_are_unique() {
        let a = OrderId::generate();
        let b = OrderId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("ord-"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ItemId::new("chocolate");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"chocolate\"");
        let back: ItemId = serde_json::from_str("\"chocolate\"").unwrap();
        assert_eq!(back, id);
    }
}
