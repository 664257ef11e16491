//! Registration form.

use std::fmt;

use serde::{Deserialize, Serialize};
use sofreh_commerce::validation::{has_min_chars, is_present, FieldErrors, EMAIL, MOBILE_PHONE};
use tracing::info;

use crate::AuthError;

/// Minimum password length, in characters.
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Values typed into the registration screen.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    /// Mobile number, `0` followed by ten digits.
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Validate every field, collecting all failures.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if !is_present(&self.full_name) {
            errors.add("full_name", "register.fullname_error");
        }
        if !is_present(&self.email) || !EMAIL.is_match(&self.email) {
            errors.add("email", "register.email_error");
        }
        if !is_present(&self.phone) || !MOBILE_PHONE.is_match(&self.phone) {
            errors.add("phone", "register.phone_error");
        }
        if !has_min_chars(&self.password, PASSWORD_MIN_CHARS) {
            errors.add("password", "register.password_error");
        }
        if self.password != self.confirm_password {
            errors.add("confirm_password", "register.confirm_password_error");
        }

        errors.into_result(())
    }

    /// Validate and accept the form.
    pub fn submit(&self) -> Result<Registration, AuthError> {
        self.validate()?;
        let registration = Registration {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
        };
        info!(email = %registration.email, "registration form submitted");
        Ok(registration)
    }
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// An accepted registration. Passwords are not retained.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegisterForm {
        RegisterForm {
            full_name: "Sara Ahmadi".to_string(),
            email: "sara@example.com".to_string(),
            phone: "09123456789".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        let registration = valid().submit().unwrap();
        assert_eq!(registration.full_name, "Sara Ahmadi");
        assert_eq!(registration.phone, "09123456789");
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = RegisterForm::default().validate().unwrap_err();
        // Two empty passwords match, so confirmation passes.
        assert_eq!(errors.len(), 4);
        assert!(errors.get("confirm_password").is_none());
    }

    #[test]
    fn test_phone_must_start_with_zero() {
        let form = RegisterForm {
            phone: "9123456789".to_string(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("phone").unwrap().message_key, "register.phone_error");
    }

    #[test]
    fn test_short_password() {
        let form = RegisterForm {
            password: "abc12".to_string(),
            confirm_password: "abc12".to_string(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("password").unwrap().message_key, "register.password_error");
    }

    #[test]
    fn test_confirmation_mismatch() {
        let form = RegisterForm {
            confirm_password: "secret2".to_string(),
            ..valid()
        };
        let err = form.submit().unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(
            errors.get("confirm_password").unwrap().message_key,
            "register.confirm_password_error"
        );
    }
}
