//! Search module.
//!
//! Free-text and category filtering over the catalog.

mod filter;

pub use filter::{filter, matches, FilterState};
