//! Localization for the Sofreh storefront.
//!
//! This crate provides:
//! - `Locale` / `Direction` - Supported languages and their text direction
//! - `Messages` - Translated strings keyed by dotted names (`cart.title`)
//! - `NumberFormat` - Digit grouping and Persian digits
//! - `JalaliDate` - Gregorian to Jalali (Solar Hijri) conversion

mod error;
mod jalali;
mod locale;
mod messages;
mod number;

pub use error::LocaleError;
pub use jalali::*;
pub use locale::*;
pub use messages::*;
pub use number::*;
