//! Money type for representing prices.
//!
//! Amounts are integers in the smallest unit the catalog uses, so totals
//! never pick up floating-point error.

use serde::{Deserialize, Serialize};
use sofreh_locale::Locale;
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Iranian toman (10 rials). The menu is priced in toman.
    #[default]
    Toman,
    /// Iranian rial.
    Rial,
    /// US dollar, in cents.
    Usd,
}

impl Currency {
    /// Get the currency code (e.g., "IRT").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Toman => "IRT",
            Currency::Rial => "IRR",
            Currency::Usd => "USD",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::Toman | Currency::Rial => 0,
            Currency::Usd => 2,
        }
    }

    /// Currency word shown after an amount.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Currency::Toman, Locale::Fa) => "تومان",
            (Currency::Toman, Locale::En) => "Toman",
            (Currency::Rial, Locale::Fa) => "ریال",
            (Currency::Rial, Locale::En) => "Rial",
            (Currency::Usd, Locale::Fa) => "دلار",
            (Currency::Usd, Locale::En) => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the currency's smallest unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a toman amount.
    pub fn toman(amount: i64) -> Self {
        Self::new(amount, Currency::Toman)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }

    /// Add another amount, clamping at the numeric bounds.
    ///
    /// The result keeps `self`'s currency.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount), self.currency)
    }

    /// Format for display in a locale (e.g., "150,000 Toman", "۱۵۰٬۰۰۰ تومان").
    pub fn display(&self, locale: Locale) -> String {
        format!(
            "{} {}",
            self.display_amount(locale),
            self.currency.label(locale)
        )
    }

    /// Format the amount alone, without the currency word.
    pub fn display_amount(&self, locale: Locale) -> String {
        locale
            .number_format()
            .format_fixed(self.amount, self.currency.decimal_places())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(Locale::En))
    }
}
