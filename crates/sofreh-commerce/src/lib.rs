//! Restaurant ordering domain for the Sofreh storefront.
//!
//! This crate provides the in-memory ordering core:
//!
//! - **Catalog**: The fixed restaurant menu
//! - **Cart**: The session's cart store (add, update, remove, clear, total)
//! - **Checkout**: Delivery form validation and locally generated receipts
//!
//! # Example
//!
//! ```
//! use sofreh_commerce::prelude::*;
//!
//! let catalog = Catalog::restaurant_menu();
//! let mut cart = CartStore::new(SystemClock::shared());
//!
//! let kebab = catalog.get("kebab").unwrap();
//! cart.add_item(kebab.to_candidate());
//! cart.add_item(kebab.to_candidate());
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().amount, 300_000);
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod clock;
pub mod validation;

pub mod catalog;
pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::ItemId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SharedClock, SystemClock};
    pub use crate::error::CommerceError;
    pub use crate::ids::ItemId;
    pub use crate::money::{Currency, Money};
    pub use crate::validation::{FieldError, FieldErrors};

    // Catalog
    pub use crate::catalog::{Catalog, MenuItem};

    // Cart
    pub use crate::cart::{CartCandidate, CartEvent, CartItem, CartStore, SubscriptionId};

    // Checkout
    pub use crate::checkout::{submit_order, CheckoutForm, OrderReceipt, TrackingCode};
}
