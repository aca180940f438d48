//! Cart and cart entry types.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cart::CartPricing;
use crate::catalog::Item;
use crate::ids::ItemId;
use crate::money::Money;
use crate::price::PriceParser;

/// One distinct item and how many of it the shopper wants.
///
/// `quantity` is always at least 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Snapshot of the catalog item.
    pub item: Item,
    /// Quantity.
    pub quantity: i64,
}

impl CartEntry {
    /// unit price * quantity, saturating on overflow.
    pub fn line_total(&self, parser: &PriceParser) -> Money {
        let unit = parser.parse(&self.item.price);
        unit.try_multiply(self.quantity).unwrap_or_else(|| {
            warn!(item_id = %self.item.id, quantity = self.quantity, "line total overflow, saturating");
            unit * self.quantity
        })
    }
}

/// A shopping cart: entries keyed by item id, in first-added order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item`. Existing entries are incremented, new ones appended.
    ///
    /// Returns false only when the quantity is already `i64::MAX`.
    pub fn add_item(&mut self, item: &Item) -> bool {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.item.id == item.id) {
            return match existing.quantity.checked_add(1) {
                Some(quantity) => {
                    existing.quantity = quantity;
                    true
                }
                None => false,
            };
        }

        self.entries.push(CartEntry {
            item: item.clone(),
            quantity: 1,
        });
        true
    }

    /// Remove the entry for `id`. Returns false if there was none.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.item.id != id);
        self.entries.len() < len_before
    }

    /// Set the quantity for `id`.
    ///
    /// A quantity of zero or less removes the entry. Unknown ids are ignored.
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        match self.entries.iter_mut().find(|e| &e.item.id == id) {
            Some(entry) if entry.quantity != quantity => {
                entry.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove every entry. Returns false if the cart was already empty.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }

    /// Entries in first-added order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get the entry for an item.
    pub fn get(&self, id: &ItemId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.item.id == id)
    }

    /// Quantity of an item, 0 if absent.
    pub fn quantity_of(&self, id: &ItemId) -> i64 {
        self.get(id).map_or(0, |e| e.quantity)
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |acc, e| acc.saturating_add(e.quantity))
    }

    /// Sum of `unit price * quantity` over all entries, saturating on overflow.
    pub fn total_price(&self, parser: &PriceParser) -> Money {
        let lines: Vec<Money> = self.entries.iter().map(|e| e.line_total(parser)).collect();
        Money::try_sum(lines.iter()).unwrap_or_else(|| {
            warn!(entries = lines.len(), "cart total overflow, saturating");
            lines.iter().copied().sum()
        })
    }

    /// Full pricing breakdown.
    pub fn pricing(&self, parser: &PriceParser) -> CartPricing {
        CartPricing::calculate(self, parser)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
