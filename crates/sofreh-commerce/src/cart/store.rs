//! The session's cart store.

use std::fmt;

use tracing::{debug, warn};

use crate::cart::{CartCandidate, CartEvent, CartItem, SubscriptionId};
use crate::clock::SharedClock;
use crate::ids::ItemId;
use crate::money::{Currency, Money};

type Listener = Box<dyn FnMut(&CartEvent)>;

/// Owner of the cart's items.
///
/// One store is created per session and handed by reference to whatever
/// needs to read or change the cart. Every operation is synchronous and
/// cannot fail; ids that are not in the cart are ignored.
///
/// All items share one currency: the first item's. Totals are reported in
/// it, or in the menu's currency while the cart is empty.
pub struct CartStore {
    items: Vec<CartItem>,
    clock: SharedClock,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            items: Vec::new(),
            clock,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add one unit of a menu item.
    ///
    /// An item already in the cart gets its quantity raised by one and keeps
    /// the name, price, and image it was first added with. A new item priced
    /// in a different currency from the cart's items is ignored.
    pub fn add_item(&mut self, candidate: CartCandidate) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == candidate.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            let event = CartEvent::QuantityIncreased {
                id: existing.id.clone(),
                quantity: existing.quantity,
            };
            debug!(item_id = %existing.id, quantity = existing.quantity, "cart quantity increased");
            self.emit(event);
            return;
        }

        if let Some(first) = self.items.first() {
            if first.price.currency != candidate.price.currency {
                warn!(
                    item_id = %candidate.id,
                    currency = %candidate.price.currency,
                    cart_currency = %first.price.currency,
                    "item priced in another currency not added to cart"
                );
                return;
            }
        }

        let item = CartItem::from_candidate(candidate, self.clock.now());
        debug!(item_id = %item.id, price = item.price.amount, "item added to cart");
        let event = CartEvent::ItemAdded {
            id: item.id.clone(),
        };
        self.items.push(item);
        self.emit(event);
    }

    /// Set an item's quantity.
    ///
    /// A quantity below 1 removes the item. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity < 1 {
            self.remove_item(id);
            return;
        }

        let Some(item) = self.items.iter_mut().find(|i| i.id.as_str() == id) else {
            debug!(item_id = id, "quantity update for item not in cart ignored");
            return;
        };
        if item.quantity == quantity {
            return;
        }
        item.quantity = quantity;
        debug!(item_id = id, quantity, "cart quantity changed");
        let event = CartEvent::QuantityChanged {
            id: item.id.clone(),
            quantity,
        };
        self.emit(event);
    }

    /// Remove an item. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: &str) {
        let Some(index) = self.items.iter().position(|i| i.id.as_str() == id) else {
            return;
        };
        let removed = self.items.remove(index);
        debug!(item_id = %removed.id, "item removed from cart");
        self.emit(CartEvent::ItemRemoved { id: removed.id });
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let removed = self.items.len();
        self.items.clear();
        debug!(removed, "cart cleared");
        self.emit(CartEvent::Cleared { removed });
    }

    /// Sum of price times quantity over every item, computed on each call.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency()), |acc, item| {
                acc.saturating_add(&item.line_total())
            })
    }

    /// Items in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get an item by id.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id.as_str() == id)
    }

    /// Check whether an item is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Price times quantity for one item.
    pub fn line_total(&self, id: &str) -> Option<Money> {
        self.get(id).map(CartItem::line_total)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all items (the navigation badge count).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Ids in cart order.
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|i| &i.id)
    }

    /// The currency totals are reported in.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|item| item.price.currency)
            .unwrap_or_default()
    }

    /// Register a listener called after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < len_before
    }

    fn emit(&mut self, event: CartEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("currency", &self.currency())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn store() -> (CartStore, Arc<FixedClock>) {
        let clock = FixedClock::shared(start());
        (CartStore::new(clock.clone()), clock)
    }

    fn kebab() -> CartCandidate {
        CartCandidate::new("kebab", "menu.items.kebab", Money::toman(150_000))
    }

    fn soda() -> CartCandidate {
        CartCandidate::new("soda", "menu.items.soda", Money::toman(20_000))
    }

    #[test]
    fn test_cart_creation() {
        let (cart, _) = store();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::toman(0));
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let (mut cart, _) = store();
        cart.add_item(kebab());
        cart.add_item(kebab());

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("kebab").unwrap().quantity, 2);
        assert_eq!(cart.total(), Money::toman(300_000));
    }

    #[test]
    fn test_readd_keeps_first_snapshot() {
        let (mut cart, clock) = store();
        cart.add_item(kebab());

        clock.advance(Duration::minutes(10));
        let mut repriced = kebab();
        repriced.price = Money::toman(999_000);
        repriced.name = "renamed".to_string();
        repriced.image = Some("new.jpg".to_string());
        cart.add_item(repriced);

        let item = cart.get("kebab").unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, Money::toman(150_000));
        assert_eq!(item.name, "menu.items.kebab");
        assert_eq!(item.image, None);
        assert_eq!(item.added_at, start());
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let (mut cart, _) = store();
        cart.add_item(soda());
        cart.add_item(kebab());
        cart.add_item(soda());

        let ids: Vec<&str> = cart.ids().map(ItemId::as_str).collect();
        assert_eq!(ids, vec!["soda", "kebab"]);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let (mut cart, _) = store();
        cart.add_item(kebab());
        cart.update_quantity("kebab", 5);
        assert_eq!(cart.get("kebab").unwrap().quantity, 5);
        assert_eq!(cart.item_count(), 5);

        cart.update_quantity("kebab", 2);
        assert_eq!(cart.get("kebab").unwrap().quantity, 2);
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        let (mut cart, _) = store();
        cart.add_item(soda());
        cart.update_quantity("soda", 0);
        assert!(cart.is_empty());

        cart.add_item(soda());
        cart.update_quantity("soda", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_item_is_noop() {
        let (mut cart, _) = store();
        cart.add_item(soda());
        cart.update_quantity("kebab", 4);
        assert_eq!(cart.len(), 1);
        assert!(!cart.contains("kebab"));
    }

    #[test]
    fn test_remove_item() {
        let (mut cart, _) = store();
        cart.add_item(kebab());
        cart.add_item(soda());
        cart.remove_item("kebab");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::toman(20_000));
    }

    #[test]
    fn test_remove_unknown_item_on_empty_cart() {
        let (mut cart, _) = store();
        cart.remove_item("nonexistent");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (mut cart, _) = store();
        cart.add_item(kebab());
        cart.add_item(soda());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::toman(0));

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_total() {
        let (mut cart, _) = store();
        cart.add_item(soda());
        cart.update_quantity("soda", 3);
        assert_eq!(cart.line_total("soda"), Some(Money::toman(60_000)));
        assert_eq!(cart.line_total("kebab"), None);
    }

    #[test]
    fn test_listeners_see_each_change() {
        let (mut cart, _) = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cart.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        cart.add_item(kebab());
        cart.add_item(kebab());
        cart.update_quantity("kebab", 4);
        cart.update_quantity("kebab", 4);
        cart.remove_item("nonexistent");
        cart.remove_item("kebab");
        cart.clear();

        let kebab_id = ItemId::new("kebab");
        assert_eq!(
            *seen.borrow(),
            vec![
                CartEvent::ItemAdded { id: kebab_id.clone() },
                CartEvent::QuantityIncreased { id: kebab_id.clone(), quantity: 2 },
                CartEvent::QuantityChanged { id: kebab_id.clone(), quantity: 4 },
                CartEvent::ItemRemoved { id: kebab_id },
            ]
        );
    }

    #[test]
    fn test_cart_keeps_one_currency() {
        let (mut cart, _) = store();
        assert_eq!(cart.currency(), Currency::Toman);

        cart.add_item(CartCandidate::new("latte", "latte", Money::new(450, Currency::Usd)));
        assert_eq!(cart.currency(), Currency::Usd);
        assert_eq!(cart.total(), Money::new(450, Currency::Usd));

        cart.add_item(kebab());
        assert!(!cart.contains("kebab"));
        assert_eq!(cart.total(), Money::new(450, Currency::Usd));

        cart.clear();
        cart.add_item(kebab());
        assert_eq!(cart.total(), Money::toman(150_000));
    }

    #[test]
    fn test_unsubscribe() {
        let (mut cart, _) = store();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let sub = cart.subscribe(move |_| *sink.borrow_mut() += 1);

        cart.add_item(soda());
        assert!(cart.unsubscribe(sub));
        assert!(!cart.unsubscribe(sub));
        cart.add_item(soda());

        assert_eq!(*count.borrow(), 1);
    }
}
