//! Catalog module.
//!
//! The restaurant's menu is fixed at compile time.

mod item;
mod menu;

pub use item::MenuItem;
pub use menu::Catalog;
