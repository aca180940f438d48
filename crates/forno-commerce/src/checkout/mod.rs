//! Checkout module.
//!
//! Turns the cart into an order request for an external ordering system.

mod order;

pub use order::{finalize, OrderLine, OrderRequest};
