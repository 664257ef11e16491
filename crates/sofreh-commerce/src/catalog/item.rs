//! Menu item type.

use crate::cart::CartCandidate;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable dish or drink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Stable catalog identifier.
    pub id: ItemId,
    /// Message key of the display name (localized at render time).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image asset reference.
    pub image: Option<String>,
}

impl MenuItem {
    /// Create a menu item whose name and description keys derive from its id
    /// (`menu.items.<id>`, `menu.items.<id>_desc`).
    pub fn new(id: impl Into<ItemId>, price: Money) -> Self {
        let id = id.into();
        Self {
            name: format!("menu.items.{}", id),
            id,
            price,
            image: None,
        }
    }

    /// Set the image asset.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Message key of the short description.
    pub fn description_key(&self) -> String {
        format!("{}_desc", self.name)
    }

    /// The descriptor the cart store takes when this item is added.
    pub fn to_candidate(&self) -> CartCandidate {
        CartCandidate {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}

impl From<&MenuItem> for CartCandidate {
    fn from(item: &MenuItem) -> Self {
        item.to_candidate()
    }
}
