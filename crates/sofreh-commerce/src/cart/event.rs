//! Cart change notifications.

use serde::Serialize;

use crate::ids::ItemId;

/// A state change in the cart store.
///
/// Emitted once per mutating call that actually changed something.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CartEvent {
    /// A new entry was appended with quantity 1.
    ItemAdded { id: ItemId },
    /// An existing entry was added again.
    QuantityIncreased { id: ItemId, quantity: i64 },
    /// An entry's quantity was set to a new value.
    QuantityChanged { id: ItemId, quantity: i64 },
    /// An entry was removed.
    ItemRemoved { id: ItemId },
    /// Every entry was removed.
    Cleared { removed: usize },
}

impl CartEvent {
    /// The item the event concerns, if it concerns a single item.
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            CartEvent::ItemAdded { id }
            | CartEvent::QuantityIncreased { id, .. }
            | CartEvent::QuantityChanged { id, .. }
            | CartEvent::ItemRemoved { id } => Some(id),
            CartEvent::Cleared { .. } => None,
        }
    }
}

/// Handle returned by `CartStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);
