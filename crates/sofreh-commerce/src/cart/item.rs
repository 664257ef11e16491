//! Cart item types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sofreh_locale::{format_jalali_datetime, LocaleError};

use crate::ids::ItemId;
use crate::money::Money;

/// What the menu hands the cart store when a customer adds something.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartCandidate {
    /// Catalog identifier.
    pub id: ItemId,
    /// Message key of the display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image asset reference.
    pub image: Option<String>,
}

impl CartCandidate {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
        }
    }
}

/// One distinct item in the cart with its aggregated quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Catalog identifier; unique within the cart.
    pub id: ItemId,
    /// Message key of the display name, as captured at first add.
    pub name: String,
    /// Unit price, as captured at first add.
    pub price: Money,
    /// Always at least 1.
    pub quantity: i64,
    /// Image asset reference, carried through unmodified.
    pub image: Option<String>,
    /// Local time of first insertion.
    pub added_at: NaiveDateTime,
}

impl CartItem {
    pub(crate) fn from_candidate(candidate: CartCandidate, added_at: NaiveDateTime) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            price: candidate.price,
            quantity: 1,
            image: candidate.image,
            added_at,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }

    /// `added_at` rendered as `jYYYY/jMM/jDD HH:mm:ss`.
    pub fn added_at_label(&self) -> Result<String, LocaleError> {
        format_jalali_datetime(&self.added_at)
    }
}
