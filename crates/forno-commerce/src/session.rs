//! Menu session: the state a storefront screen works against.
//!
//! Wires the catalog, the filter, navigation and the cart store together.
//! Every filter change recomputes the filtered list and reconciles the
//! navigation index before the next request is handled.

use std::sync::Arc;

use tracing::debug;

use crate::cart::{Cart, CartStore};
use crate::catalog::{Catalog, CategoryFilter, Item};
use crate::checkout::{finalize, OrderRequest};
use crate::error::CommerceError;
use crate::navigation::{NavigationController, NavigationIntent, NavigationState};
use crate::price::PriceParser;
use crate::search::{matches, FilterState};

/// Browsing and cart state for one shopper.
#[derive(Debug)]
pub struct MenuSession {
    catalog: Arc<Catalog>,
    filter: FilterState,
    /// Catalog indices of the items passing the filter, in catalog order.
    visible: Vec<usize>,
    navigation: NavigationController,
    cart: CartStore,
}

impl MenuSession {
    /// Start a session with an unfiltered view and an empty cart.
    pub fn new(catalog: Arc<Catalog>, parser: PriceParser) -> Self {
        Self::with_cart(catalog, CartStore::new(parser))
    }

    /// Start a session around an existing cart store.
    pub fn with_cart(catalog: Arc<Catalog>, cart: CartStore) -> Self {
        let mut session = Self {
            catalog,
            filter: FilterState::default(),
            visible: Vec::new(),
            navigation: NavigationController::new(),
            cart,
        };
        session.refilter();
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Change the search text.
    pub fn set_query(&mut self, query: impl Into<String>) -> NavigationState {
        if self.filter.set_query(query) {
            self.refilter();
        }
        self.navigation.state()
    }

    /// Change the category tab.
    pub fn set_category(&mut self, category: CategoryFilter) -> NavigationState {
        if self.filter.set_category(category) {
            self.refilter();
        }
        self.navigation.state()
    }

    /// Items passing the current filter.
    pub fn filtered(&self) -> Vec<&Item> {
        let items = self.catalog.items();
        self.visible.iter().map(|&i| &items[i]).collect()
    }

    /// Number of items passing the current filter.
    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    /// Navigation position.
    pub fn navigation(&self) -> NavigationState {
        self.navigation.state()
    }

    /// Item under the cursor, or None when nothing matches the filter.
    pub fn current_item(&self) -> Option<&Item> {
        let index = self.navigation.state().current()?;
        self.visible
            .get(index)
            .map(|&i| &self.catalog.items()[i])
    }

    pub fn next(&mut self) -> NavigationState {
        self.navigation.next(self.visible.len())
    }

    pub fn prev(&mut self) -> NavigationState {
        self.navigation.prev(self.visible.len())
    }

    pub fn select(&mut self, index: usize) -> NavigationState {
        self.navigation.select(index, self.visible.len())
    }

    /// Dispatch a navigation intent from any input source.
    pub fn apply(&mut self, intent: NavigationIntent) -> NavigationState {
        self.navigation.apply(intent, self.visible.len())
    }

    /// Add the current item to the cart. None when there is no current item.
    pub fn add_current_to_cart(&mut self) -> Option<&Cart> {
        let index = self.navigation.state().current()?;
        let item = self.catalog.items().get(*self.visible.get(index)?)?;
        Some(self.cart.add_item(item))
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Snapshot the cart into an order request.
    pub fn finalize(&self) -> Result<OrderRequest, CommerceError> {
        finalize(self.cart.cart(), self.cart.parser())
    }

    fn refilter(&mut self) {
        let query = self.filter.query.as_str();
        let category = self.filter.category;
        self.visible = self
            .catalog
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| matches(item, query, category))
            .map(|(i, _)| i)
            .collect();

        let state = self.navigation.reconcile(self.visible.len());
        debug!(
            query = %self.filter.query,
            category = %category,
            count = self.visible.len(),
            current = ?state.current(),
            "menu filter applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn session() -> MenuSession {
        let catalog = Catalog::new(vec![
            Item::new("margherita", "Margherita", "Classica", Category::Salgado, "R$ 49,90"),
            Item::new("pepperoni", "Pepperoni", "Picante", Category::Salgado, "R$ 54,90"),
            Item::new("chocolate", "Chocolate", "Doce", Category::Doce, "R$ 44,90"),
        ])
        .unwrap();
        MenuSession::new(Arc::new(catalog), PriceParser::default())
    }

    #[test]
    fn test_starts_on_first_item() {
        let s = session();
        assert_eq!(s.filtered_count(), 3);
        assert_eq!(s.current_item().unwrap().name, "Margherita");
    }

    #[test]
    fn test_navigation_follows_filtered_list() {
        let mut s = session();
        s.set_category(CategoryFilter::Only(Category::Salgado));
        s.next();
        assert_eq!(s.current_item().unwrap().name, "Pepperoni");
        s.next();
        assert_eq!(s.current_item().unwrap().name, "Pepperoni");
    }

    #[test]
    fn test_filter_change_reconciles() {
        let mut s = session();
        s.select(2);
        let state = s.set_query("pep");
        assert_eq!(state.active_index, 0);
        assert_eq!(s.current_item().unwrap().name, "Pepperoni");

        let state = s.set_query("zzz");
        assert_eq!(state.current(), None);
        assert!(s.current_item().is_none());
        assert!(s.add_current_to_cart().is_none());
    }

    #[test]
    fn test_add_current_to_cart() {
        let mut s = session();
        s.select(2);
        let cart = s.add_current_to_cart().unwrap();
        assert_eq!(cart.entries()[0].item.name, "Chocolate");
        assert_eq!(s.cart().total_items(), 1);
    }

    #[test]
    fn test_finalize_through_session() {
        let mut s = session();
        assert_eq!(s.finalize(), Err(CommerceError::EmptyCart));
        s.add_current_to_cart();
        assert_eq!(s.finalize().unwrap().total_items, 1);
    }
}
