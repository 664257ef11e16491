//! Delivery details form.

use serde::{Deserialize, Serialize};

use crate::validation::{has_min_chars, is_present, FieldErrors, DELIVERY_PHONE};

/// Minimum address length, in characters.
pub const ADDRESS_MIN_CHARS: usize = 10;

/// Delivery details entered at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    /// Free-form delivery address.
    pub address: String,
    /// Contact phone, 10 or 11 digits.
    pub phone: String,
}

impl CheckoutForm {
    pub fn new(address: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            phone: phone.into(),
        }
    }

    /// Validate every field, collecting all failures.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if !is_present(&self.address) {
            errors.add("address", "cart.address_required");
        } else if !has_min_chars(&self.address, ADDRESS_MIN_CHARS) {
            errors.add("address", "cart.address_min_length");
        }

        if !is_present(&self.phone) {
            errors.add("phone", "cart.phone_required");
        } else if !DELIVERY_PHONE.is_match(&self.phone) {
            errors.add("phone", "cart.phone_invalid");
        }

        errors.into_result(())
    }
}
