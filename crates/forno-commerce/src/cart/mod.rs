//! Shopping cart module.
//!
//! Contains the cart, its totals, and the observable store that owns it.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartEntry};
pub use pricing::{CartPricing, LinePricing};
pub use store::{CartEvent, CartStore, Subscription};
