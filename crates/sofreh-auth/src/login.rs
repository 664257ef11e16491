//! Login form.

use std::fmt;

use serde::{Deserialize, Serialize};
use sofreh_commerce::validation::{is_present, FieldErrors, EMAIL};
use tracing::info;

use crate::AuthError;

/// Values typed into the login screen.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// "Remember me" checkbox.
    #[serde(default)]
    pub remember: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember: false,
        }
    }

    /// Validate every field, collecting all failures.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if !is_present(&self.email) || !EMAIL.is_match(&self.email) {
            errors.add("email", "login.email_error");
        }
        if self.password.is_empty() {
            errors.add("password", "login.password_error");
        }

        errors.into_result(())
    }

    /// Validate and accept the form.
    pub fn submit(&self) -> Result<LoginRequest, AuthError> {
        self.validate()?;
        let request = LoginRequest {
            email: self.email.trim().to_string(),
            remember: self.remember,
        };
        info!(email = %request.email, remember = request.remember, "login form submitted");
        Ok(request)
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("remember", &self.remember)
            .finish()
    }
}

/// An accepted login submission. The password is not retained.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub remember: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login() {
        let request = LoginForm::new("sara@example.com", "x").submit().unwrap();
        assert_eq!(request.email, "sara@example.com");
        assert!(!request.remember);
    }

    #[test]
    fn test_empty_login_reports_both_fields() {
        let err = LoginForm::default().submit().unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get("email").unwrap().message_key, "login.email_error");
        assert_eq!(errors.get("password").unwrap().message_key, "login.password_error");
    }

    #[test]
    fn test_malformed_email() {
        for email in ["sara", "sara@example", "sara @example.com", "@example.com"] {
            let errors = LoginForm::new(email, "secret").validate().unwrap_err();
            assert_eq!(errors.len(), 1, "{email}");
        }
    }

    #[test]
    fn test_debug_hides_password() {
        let form = LoginForm::new("sara@example.com", "hunter2");
        assert!(!format!("{:?}", form).contains("hunter2"));
    }
}
