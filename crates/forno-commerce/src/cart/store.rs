//! Observable cart store.
//!
//! The store is constructed by the session that owns it and handed to
//! whatever needs the cart. Listeners are called synchronously, in
//! subscription order, after every mutation that changed the cart.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::cart::{Cart, CartPricing};
use crate::catalog::Item;
use crate::ids::ItemId;
use crate::money::Money;
use crate::price::PriceParser;

/// What a mutation did to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// One unit of an item was added; `quantity` is the new entry quantity.
    ItemAdded { item_id: ItemId, quantity: i64 },
    /// An entry was removed.
    ItemRemoved { item_id: ItemId },
    /// An entry's quantity was replaced.
    QuantityChanged { item_id: ItemId, quantity: i64 },
    /// Every entry was removed.
    Cleared,
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(&CartEvent, &Cart)>;

/// Owns the cart and notifies listeners of changes.
pub struct CartStore {
    cart: Cart,
    parser: PriceParser,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty store that prices items with `parser`.
    pub fn new(parser: PriceParser) -> Self {
        Self {
            cart: Cart::new(),
            parser,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Price parser used for totals.
    pub fn parser(&self) -> &PriceParser {
        &self.parser
    }

    /// Add one unit of `item`.
    pub fn add_item(&mut self, item: &Item) -> &Cart {
        if self.cart.add_item(item) {
            let quantity = self.cart.quantity_of(&item.id);
            debug!(item_id = %item.id, quantity, "cart item added");
            self.emit(CartEvent::ItemAdded {
                item_id: item.id.clone(),
                quantity,
            });
        }
        &self.cart
    }

    /// Remove the entry for `id`, if any.
    pub fn remove_item(&mut self, id: &ItemId) -> &Cart {
        if self.cart.remove_item(id) {
            debug!(item_id = %id, "cart item removed");
            self.emit(CartEvent::ItemRemoved { item_id: id.clone() });
        }
        &self.cart
    }

    /// Set the quantity for `id`; zero or less removes the entry.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: i64) -> &Cart {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        if self.cart.set_quantity(id, quantity) {
            let quantity = self.cart.quantity_of(id);
            debug!(item_id = %id, quantity, "cart quantity changed");
            self.emit(CartEvent::QuantityChanged {
                item_id: id.clone(),
                quantity,
            });
        }
        &self.cart
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> &Cart {
        if self.cart.clear() {
            debug!("cart cleared");
            self.emit(CartEvent::Cleared);
        }
        &self.cart
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Sum of `unit price * quantity`.
    pub fn total_price(&self) -> Money {
        self.cart.total_price(&self.parser)
    }

    /// Per-entry breakdown with totals.
    pub fn pricing(&self) -> CartPricing {
        self.cart.pricing(&self.parser)
    }

    /// Register a listener.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&CartEvent, &Cart) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(s, _)| *s != subscription);
        self.listeners.len() < len_before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self, event: CartEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event, &self.cart);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(PriceParser::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("parser", &self.parser)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn margherita() -> Item {
        Item::new("margherita", "Margherita", "", Category::Salgado, "R$ 49,90")
    }

    fn recorder(store: &mut CartStore) -> (Subscription, Rc<RefCell<Vec<CartEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let sub = store.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));
        (sub, events)
    }

    #[test]
    fn test_mutations_return_new_cart() {
        let mut store = CartStore::default();
        assert_eq!(store.add_item(&margherita()).total_items(), 1);
        assert_eq!(store.set_quantity(&ItemId::new("margherita"), 4).total_items(), 4);
        assert!(store.clear().is_empty());
    }

    #[test]
    fn test_listeners_receive_events() {
        let mut store = CartStore::default();
        let (_, events) = recorder(&mut store);
        let id = ItemId::new("margherita");

        store.add_item(&margherita());
        store.add_item(&margherita());
        store.set_quantity(&id, 5);
        store.set_quantity(&id, 0);
        store.add_item(&margherita());
        store.clear();

        assert_eq!(
            *events.borrow(),
            vec![
                CartEvent::ItemAdded { item_id: id.clone(), quantity: 1 },
                CartEvent::ItemAdded { item_id: id.clone(), quantity: 2 },
                CartEvent::QuantityChanged { item_id: id.clone(), quantity: 5 },
                CartEvent::ItemRemoved { item_id: id.clone() },
                CartEvent::ItemAdded { item_id: id.clone(), quantity: 1 },
                CartEvent::Cleared,
            ]
        );
    }

    #[test]
    fn test_noops_do_not_notify() {
        let mut store = CartStore::default();
        let (_, events) = recorder(&mut store);

        store.remove_item(&ItemId::new("ghost"));
        store.set_quantity(&ItemId::new("ghost"), 3);
        store.set_quantity(&ItemId::new("ghost"), -1);
        store.clear();

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_listener_sees_updated_cart() {
        let mut store = CartStore::default();
        let totals = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&totals);
        store.subscribe(move |_, cart| sink.borrow_mut().push(cart.total_items()));

        store.add_item(&margherita());
        store.add_item(&margherita());

        assert_eq!(*totals.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = CartStore::default();
        let (sub, events) = recorder(&mut store);
        assert_eq!(store.listener_count(), 1);

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add_item(&margherita());

        assert!(events.borrow().is_empty());
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_set_quantity_stores_requested_value() {
        let mut store = CartStore::default();
        let (_, events) = recorder(&mut store);
        let id = ItemId::new("margherita");

        store.add_item(&margherita());
        let cart = store.set_quantity(&id, 12_000);

        assert_eq!(cart.quantity_of(&id), 12_000);
        assert_eq!(store.total_price(), Money::new(4990 * 12_000));
        assert_eq!(
            events.borrow().last(),
            Some(&CartEvent::QuantityChanged { item_id: id.clone(), quantity: 12_000 })
        );
    }

    #[test]
    fn test_totals() {
        let mut store = CartStore::default();
        store.add_item(&margherita());
        store.add_item(&margherita());
        assert_eq!(store.total_items(), 2);
        assert_eq!(store.total_price(), Money::new(9980));
        assert_eq!(store.pricing().total_price, Money::new(9980));
    }
}
