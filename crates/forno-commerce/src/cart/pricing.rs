//! Cart totals.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::ids::ItemId;
use crate::money::Money;
use crate::price::PriceParser;

/// Totals for a cart, as read by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of quantities.
    pub total_items: i64,
    /// Sum of line totals.
    pub total_price: Money,
    /// Per-entry breakdown, in cart order.
    pub lines: Vec<LinePricing>,
}

impl CartPricing {
    /// Compute totals for a cart.
    pub fn calculate(cart: &Cart, parser: &PriceParser) -> Self {
        let lines: Vec<LinePricing> = cart
            .entries()
            .iter()
            .map(|entry| LinePricing {
                item_id: entry.item.id.clone(),
                unit_price: parser.parse(&entry.item.price),
                quantity: entry.quantity,
                total: entry.line_total(parser),
            })
            .collect();

        Self {
            total_items: cart.total_items(),
            total_price: cart.total_price(parser),
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing for a single cart entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    pub item_id: ItemId,
    /// Parsed unit price (zero if the catalog price is malformed).
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price * quantity.
    pub total: Money,
}
