//! The restaurant menu.

use crate::catalog::MenuItem;
use crate::money::Money;
use serde::Serialize;

/// An ordered, read-only list of menu items.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from items.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The restaurant's menu, priced in toman.
    pub fn restaurant_menu() -> Self {
        Self::new(vec![
            MenuItem::new("kebab", Money::toman(150_000))
                .with_image("assets/img/alejandra-cifre-gonzalez-34B36bGmQlc-unsplash.jpg"),
            MenuItem::new("joojeh", Money::toman(120_000))
                .with_image("assets/img/blackieshoot-anCmjb-_g44-unsplash.jpg"),
            MenuItem::new("ghormeh", Money::toman(100_000))
                .with_image("assets/img/blake-wisz-d_hpBZUdQEA-unsplash.jpg"),
            MenuItem::new("shirazi_salad", Money::toman(30_000))
                .with_image("assets/img/jason-briscoe-GrdJp16CPk8-unsplash.jpg"),
            MenuItem::new("mast_khiar", Money::toman(25_000))
                .with_image("assets/img/kimia-kazemi-971_E-LvZuc-unsplash.jpg"),
            MenuItem::new("soda", Money::toman(20_000))
                .with_image("assets/img/liubov-ilchuk-_qZOwG2oaj4-unsplash.jpg"),
        ])
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id.as_str() == id)
    }

    /// Items in menu order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::restaurant_menu()
    }
}
