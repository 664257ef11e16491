//! Commerce error types.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Errors that can occur while placing an order.
///
/// The cart store itself never fails: unknown ids are silent no-ops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Menu item not found in the catalog.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// Checkout was submitted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// One or more checkout fields failed validation.
    #[error("Checkout form is invalid: {0}")]
    InvalidForm(FieldErrors),

    /// Timestamp could not be rendered.
    #[error("Locale error: {0}")]
    Locale(#[from] sofreh_locale::LocaleError),
}

impl CommerceError {
    /// Field-level errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CommerceError::InvalidForm(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for CommerceError {
    fn from(errors: FieldErrors) -> Self {
        CommerceError::InvalidForm(errors)
    }
}
