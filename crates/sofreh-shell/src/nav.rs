//! The top bar.

use chrono::NaiveDateTime;
use serde::Serialize;
use sofreh_commerce::cart::CartStore;
use sofreh_locale::{format_jalali_clock, Messages};

use crate::ShellError;

/// What the top bar shows. One configuration covers every layout; pieces
/// can be switched off instead of keeping separate bar variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavBar {
    pub brand_key: &'static str,
    /// Text inside the brand avatar.
    pub initials_key: &'static str,
    pub greeting_key: Option<&'static str>,
    pub show_clock: bool,
    pub show_cart_badge: bool,
}

impl NavBar {
    pub const fn standard() -> Self {
        Self {
            brand_key: "app.title",
            initials_key: "app.brand_initials",
            greeting_key: Some("app.greeting"),
            show_clock: true,
            show_cart_badge: true,
        }
    }

    /// Resolve the bar's text for one render.
    ///
    /// The clock reads `HH:mm:ss jYYYY/jMM/jDD` and uses the locale's digits.
    pub fn render(
        &self,
        messages: &Messages,
        now: &NaiveDateTime,
        cart: &CartStore,
    ) -> Result<TopBar, ShellError> {
        let digits = messages.locale().number_format();
        let clock = if self.show_clock {
            Some(digits.localize_digits(&format_jalali_clock(now)?))
        } else {
            None
        };

        Ok(TopBar {
            brand: messages.get(self.brand_key).to_string(),
            initials: messages.get(self.initials_key).to_string(),
            greeting: self.greeting_key.map(|key| messages.get(key).to_string()),
            clock,
            cart_badge: self.show_cart_badge.then(|| cart.item_count()),
        })
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::standard()
    }
}

/// A rendered top bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopBar {
    pub brand: String,
    pub initials: String,
    pub greeting: Option<String>,
    pub clock: Option<String>,
    /// Total units in the cart.
    pub cart_badge: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sofreh_commerce::prelude::*;
    use sofreh_locale::Locale;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 20)
            .unwrap()
            .and_hms_opt(8, 5, 9)
            .unwrap()
    }

    fn cart_with_three() -> CartStore {
        let mut cart = CartStore::new(FixedClock::shared(now()));
        let menu = Catalog::restaurant_menu();
        cart.add_item(menu.get("soda").unwrap().to_candidate());
        cart.add_item(menu.get("soda").unwrap().to_candidate());
        cart.add_item(menu.get("kebab").unwrap().to_candidate());
        cart
    }

    #[test]
    fn test_english_bar() {
        let bar = NavBar::standard()
            .render(&Messages::new(Locale::En), &now(), &cart_with_three())
            .unwrap();
        assert_eq!(bar.brand, "Online Restaurant");
        assert_eq!(bar.clock.as_deref(), Some("08:05:09 1403/01/01"));
        assert_eq!(bar.cart_badge, Some(3));
    }

    #[test]
    fn test_persian_clock_digits() {
        let bar = NavBar::standard()
            .render(&Messages::new(Locale::Fa), &now(), &cart_with_three())
            .unwrap();
        assert_eq!(bar.clock.as_deref(), Some("۰۸:۰۵:۰۹ ۱۴۰۳/۰۱/۰۱"));
    }

    #[test]
    fn test_disabled_pieces() {
        let nav = NavBar {
            greeting_key: None,
            show_clock: false,
            show_cart_badge: false,
            ..NavBar::standard()
        };
        let bar = nav
            .render(&Messages::new(Locale::En), &now(), &cart_with_three())
            .unwrap();
        assert_eq!(bar.greeting, None);
        assert_eq!(bar.clock, None);
        assert_eq!(bar.cart_badge, None);
    }
}
