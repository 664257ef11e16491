//! Account forms for the Sofreh storefront.
//!
//! Login and registration are placeholders: forms are validated field by
//! field and a valid submission is only logged. No account is looked up or
//! stored.

mod error;
mod login;
mod register;

pub use error::AuthError;
pub use login::{LoginForm, LoginRequest};
pub use register::{Registration, RegisterForm, PASSWORD_MIN_CHARS};
