//! Authentication errors.

use sofreh_commerce::validation::FieldErrors;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// One or more form fields failed validation.
    #[error("invalid form: {0}")]
    Validation(#[from] FieldErrors),
}

impl AuthError {
    /// Field-level errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AuthError::Validation(errors) => Some(errors),
        }
    }
}
