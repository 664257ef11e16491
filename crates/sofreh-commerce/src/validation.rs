//! Field-level form validation.
//!
//! Forms validate every field and report all failures at once, each tagged
//! with the message key the UI shows next to the field.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name (e.g., "phone").
    pub field: &'static str,
    /// Message key describing the failure (e.g., "cart.phone_invalid").
    pub message_key: &'static str,
}

/// All failed fields of one form submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Only the first failure per field is kept.
    pub fn add(&mut self, field: &'static str, message_key: &'static str) {
        if self.get(field).is_none() {
            self.0.push(FieldError { field, message_key });
        }
    }

    /// Get the failure recorded for a field.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(value)` if nothing failed, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{} ({})", e.field, e.message_key))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A regular expression compiled on first use.
pub struct Pattern {
    source: &'static str,
    compiled: OnceLock<Option<Regex>>,
}

impl Pattern {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// The pattern text.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Test a value against the pattern.
    ///
    /// A pattern that fails to compile matches nothing.
    pub fn is_match(&self, value: &str) -> bool {
        self.compiled
            .get_or_init(|| Regex::new(self.source).ok())
            .as_ref()
            .is_some_and(|re| re.is_match(value))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

/// Email shape accepted by the login and register forms.
pub static EMAIL: Pattern = Pattern::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$");

/// Delivery phone number on the checkout form: 10 or 11 digits.
pub static DELIVERY_PHONE: Pattern = Pattern::new(r"^[0-9]{10,11}$");

/// Mobile number on the register form: 0 followed by 10 digits.
pub static MOBILE_PHONE: Pattern = Pattern::new(r"^0[0-9]{10}$");

/// Check that a value has non-whitespace content.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check that a value has at least `min` characters (not bytes).
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_error_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("address", "cart.address_required");
        errors.add("address", "cart.address_min_length");
        errors.add("phone", "cart.phone_required");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("address").unwrap().message_key, "cart.address_required");
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_empty_errors_is_ok() {
        assert_eq!(FieldErrors::new().into_result(7), Ok(7));
    }

    #[test]
    fn test_delivery_phone() {
        assert!(DELIVERY_PHONE.is_match("0912345678"));
        assert!(DELIVERY_PHONE.is_match("09123456789"));
        assert!(!DELIVERY_PHONE.is_match("091234567"));
        assert!(!DELIVERY_PHONE.is_match("091234567890"));
        assert!(!DELIVERY_PHONE.is_match("0912-345-678"));
    }

    #[test]
    fn test_mobile_phone() {
        assert!(MOBILE_PHONE.is_match("09123456789"));
        assert!(!MOBILE_PHONE.is_match("9123456789"));
        assert!(!MOBILE_PHONE.is_match("19123456789"));
    }

    #[test]
    fn test_email() {
        assert!(EMAIL.is_match("guest@example.com"));
        assert!(!EMAIL.is_match("guest@example"));
        assert!(!EMAIL.is_match("gu est@example.com"));
        assert!(!EMAIL.is_match("@example.com"));
    }

    #[test]
    fn test_min_chars_counts_characters() {
        // Persian letters are two bytes each in UTF-8.
        assert!(has_min_chars("تهرانخیابان", 10));
        assert!(!has_min_chars("short", 10));
    }
}
