//! Order receipts.

use chrono::NaiveDateTime;
use serde::Serialize;
use sofreh_locale::{format_jalali_datetime, LocaleError};

use crate::cart::CartItem;
use crate::checkout::TrackingCode;
use crate::money::Money;

/// What the customer sees after placing an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderReceipt {
    pub tracking_code: TrackingCode,
    /// Local time the order was placed.
    pub placed_at: NaiveDateTime,
    /// The cart's items at submission.
    pub items: Vec<CartItem>,
    /// The cart's total at submission.
    pub total: Money,
    pub address: String,
    pub phone: String,
}

impl OrderReceipt {
    /// Total units ordered.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// `placed_at` rendered as `jYYYY/jMM/jDD HH:mm:ss`.
    pub fn placed_at_label(&self) -> Result<String, LocaleError> {
        format_jalali_datetime(&self.placed_at)
    }
}
