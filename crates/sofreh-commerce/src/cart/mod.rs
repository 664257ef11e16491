//! Shopping cart module.
//!
//! Contains the session's cart store, its items, and change events.

mod event;
mod item;
mod store;

pub use event::{CartEvent, SubscriptionId};
pub use item::{CartCandidate, CartItem};
pub use store::CartStore;
