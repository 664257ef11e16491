//! End-to-end cart behavior through the public API.

use chrono::{NaiveDate, NaiveDateTime};
use sofreh_commerce::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 20)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn new_cart() -> CartStore {
    CartStore::new(FixedClock::shared(noon()))
}

fn candidate(id: &str) -> CartCandidate {
    Catalog::restaurant_menu()
        .get(id)
        .map(MenuItem::to_candidate)
        .unwrap()
}

fn expected_total(cart: &CartStore) -> i64 {
    cart.items().iter().map(|i| i.price.amount * i.quantity).sum()
}

#[test]
fn test_repeated_adds_collapse_into_one_entry() {
    let mut cart = new_cart();
    for n in 1..=7 {
        cart.add_item(candidate("joojeh"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("joojeh").unwrap().quantity, n);
    }
}

#[test]
fn test_quantities_stay_positive() {
    let mut cart = new_cart();
    let ids = ["kebab", "joojeh", "ghormeh", "soda"];
    for id in ids {
        cart.add_item(candidate(id));
    }

    let steps: [(&str, i64); 8] = [
        ("kebab", 3),
        ("joojeh", 0),
        ("ghormeh", -1),
        ("soda", 2),
        ("soda", 1),
        ("kebab", -100),
        ("missing", 5),
        ("soda", 9),
    ];
    for (id, qty) in steps {
        cart.update_quantity(id, qty);
        assert!(cart.items().iter().all(|i| i.quantity >= 1));
        assert_eq!(cart.total().amount, expected_total(&cart));
    }

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get("soda").unwrap().quantity, 9);
}

#[test]
fn test_total_is_idempotent() {
    let mut cart = new_cart();
    cart.add_item(candidate("kebab"));
    cart.add_item(candidate("mast_khiar"));
    cart.update_quantity("mast_khiar", 4);

    let first = cart.total();
    assert_eq!(first, cart.total());
    assert_eq!(first, Money::toman(150_000 + 4 * 25_000));
}

#[test]
fn test_add_two_then_clear() {
    let mut cart = new_cart();
    cart.add_item(candidate("shirazi_salad"));
    cart.add_item(candidate("ghormeh"));
    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total().amount, 0);
}

#[test]
fn test_remove_on_empty_cart() {
    let mut cart = new_cart();
    cart.remove_item("nonexistent");
    assert!(cart.is_empty());
}

#[test]
fn test_total_saturates() {
    let mut cart = new_cart();
    cart.add_item(candidate("kebab"));
    cart.add_item(candidate("soda"));
    cart.update_quantity("kebab", i64::MAX);

    assert_eq!(cart.total().amount, i64::MAX);
}

#[test]
fn test_checkout_round() {
    let mut cart = new_cart();
    cart.add_item(candidate("kebab"));
    cart.add_item(candidate("kebab"));
    let before = cart.total();

    let clock = FixedClock::new(noon());
    let form = CheckoutForm::new("Shiraz, Zand Blvd. 40", "0711234567");
    let receipt = submit_order(&form, &mut cart, &clock).unwrap();

    assert_eq!(receipt.total, before);
    assert_eq!(receipt.tracking_code.to_string(), "202403201200");
    assert!(cart.is_empty());
}

#[test]
fn test_badge_follows_events() {
    let mut cart = new_cart();
    let events = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&events);
    cart.subscribe(move |_| *sink.borrow_mut() += 1);

    cart.add_item(candidate("soda"));
    cart.add_item(candidate("soda"));
    cart.add_item(candidate("kebab"));
    cart.clear();
    cart.clear();

    assert_eq!(*events.borrow(), 4);
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn test_events_serialize_tagged() {
    let event = CartEvent::QuantityChanged {
        id: ItemId::new("soda"),
        quantity: 3,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["event"], "quantity_changed");
    assert_eq!(json["id"], "soda");
    assert_eq!(json["quantity"], 3);
}

#[test]
fn test_total_is_in_the_unit_of_its_lines() {
    let mut cart = new_cart();
    cart.add_item(candidate("kebab"));
    cart.add_item(candidate("soda"));
    cart.update_quantity("soda", 2);

    let line_sum = cart
        .ids()
        .filter_map(|id| cart.line_total(id.as_str()))
        .fold(0_i64, |acc, line| acc + line.amount);
    let total = cart.total();

    assert_eq!(total.currency, cart.line_total("kebab").unwrap().currency);
    assert_eq!(total.amount, line_sum);
    assert_eq!(total.display(sofreh_locale::Locale::En), "190,000 Toman");

    cart.add_item(CartCandidate::new(
        "espresso",
        "espresso",
        Money::new(350, Currency::Usd),
    ));
    assert!(!cart.contains("espresso"));
    assert_eq!(cart.total(), Money::toman(190_000));
}
