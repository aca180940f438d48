//! Order request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::{ItemId, OrderId};
use crate::money::Money;
use crate::price::PriceParser;

/// Snapshot of a cart, ready to hand to an ordering/payment system.
///
/// Submission and confirmation happen outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Unique request identifier.
    pub id: OrderId,
    /// One line per cart entry, in cart order.
    pub lines: Vec<OrderLine>,
    /// Sum of quantities.
    pub total_items: i64,
    /// Sum of line totals.
    pub total: Money,
    /// Display string for the total.
    pub total_display: String,
    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,
}

impl OrderRequest {
    /// Serialize for submission.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A line in an order request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Catalog item id.
    pub item_id: ItemId,
    /// Item name at time of order.
    pub name: String,
    /// Unit price at time of order.
    pub unit_price: Money,
    /// Catalog price string at time of order.
    pub unit_price_display: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// unit_price * quantity.
    pub line_total: Money,
}

/// Snapshot `cart` into an order request.
///
/// Fails only for an empty cart.
pub fn finalize(cart: &Cart, parser: &PriceParser) -> Result<OrderRequest, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let lines: Vec<OrderLine> = cart
        .entries()
        .iter()
        .map(|entry| OrderLine {
            item_id: entry.item.id.clone(),
            name: entry.item.name.clone(),
            unit_price: parser.parse(&entry.item.price),
            unit_price_display: entry.item.price.clone(),
            quantity: entry.quantity,
            line_total: entry.line_total(parser),
        })
        .collect();

    let total = cart.total_price(parser);
    let request = OrderRequest {
        id: OrderId::generate(),
        total_items: cart.total_items(),
        total,
        total_display: parser.format(total),
        lines,
        created_at: Utc::now(),
    };

    debug!(order_id = %request.id, lines = request.lines.len(), total = %request.total_display, "order finalized");
    Ok(request)
}
