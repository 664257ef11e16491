//! Supported locales and their layout properties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LocaleError;

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Persian. The storefront's default language.
    #[default]
    Fa,
    /// English. Used as the fallback for missing Persian strings.
    En,
}

impl Locale {
    /// Locale used when a string is missing from the active one.
    pub const FALLBACK: Locale = Locale::En;

    /// All supported locales, in the order the language switcher lists them.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fa];

    /// Get the language code (e.g., "fa").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Fa => "fa",
            Locale::En => "en",
        }
    }

    /// Name of the language in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Fa => "فارسی",
            Locale::En => "English",
        }
    }

    /// Text direction for this locale.
    pub fn direction(&self) -> Direction {
        match self {
            Locale::Fa => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    /// Check if this locale is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// CSS-style font stack used to render this locale.
    pub fn font_family(&self) -> &'static str {
        match self {
            Locale::Fa => "'Vazirmatn', 'B Nazanin', sans-serif",
            Locale::En => "'AovelSansRounded', sans-serif",
        }
    }

    /// Number formatting rules for this locale.
    pub fn number_format(&self) -> crate::NumberFormat {
        match self {
            Locale::Fa => crate::NumberFormat::PERSIAN,
            Locale::En => crate::NumberFormat::LATIN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept region-qualified tags such as "fa-IR" or "en_US".
        let lang = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        match lang.as_str() {
            "fa" => Ok(Locale::Fa),
            "en" => Ok(Locale::En),
            _ => Err(LocaleError::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Horizontal text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Screen edge that leads in this direction ("left" for LTR).
    pub fn leading_edge(&self) -> Edge {
        match self {
            Direction::Ltr => Edge::Left,
            Direction::Rtl => Edge::Right,
        }
    }
}

/// A horizontal screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_persian() {
        assert_eq!(Locale::default(), Locale::Fa);
        assert!(Locale::default().is_rtl());
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("fa".parse::<Locale>(), Ok(Locale::Fa));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("fa-IR".parse::<Locale>(), Ok(Locale::Fa));
        assert_eq!("en_US".parse::<Locale>(), Ok(Locale::En));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_leading_edge() {
        assert_eq!(Locale::En.direction().leading_edge(), Edge::Left);
        assert_eq!(Locale::Fa.direction().leading_edge(), Edge::Right);
    }
}
