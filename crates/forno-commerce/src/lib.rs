//! Menu domain types and logic for the Forno storefront.
//!
//! - **Catalog**: items, categories, catalog documents
//! - **Search**: free-text and category filtering
//! - **Navigation**: one-item-at-a-time browsing over the filtered list
//! - **Cart**: entries, totals, an observable store
//! - **Checkout**: order request snapshots
//! - **Price**: localized price strings to [`Money`] and back
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use forno_commerce::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("margherita", "Margherita", "Tomate e mozzarella", Category::Salgado, "R$ 49,90"),
//!     Item::new("chocolate", "Chocolate", "Chocolate ao leite", Category::Doce, "R$ 44,90"),
//! ])
//! .unwrap();
//!
//! let mut session = MenuSession::new(Arc::new(catalog), PriceParser::default());
//! session.set_query("choc");
//! session.add_current_to_cart();
//!
//! assert_eq!(session.cart().total_items(), 1);
//! assert_eq!(session.cart().total_price().to_string(), "R$ 44,90");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod price;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod navigation;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use price::{PriceFormat, PriceParser};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::price::{PriceFormat, PriceParser};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Item};

    // Search
    pub use crate::search::{filter, FilterState};

    // Navigation
    pub use crate::navigation::{Direction, NavigationController, NavigationIntent, NavigationState};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartEvent, CartPricing, CartStore, Subscription};

    // Checkout
    pub use crate::checkout::{finalize, OrderLine, OrderRequest};

    pub use crate::session::MenuSession;
}
