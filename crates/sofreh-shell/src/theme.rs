//! Light and dark color schemes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ShellError;

/// The active color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Message key of the mode's name.
    pub fn label_key(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme.light",
            ThemeMode::Dark => "theme.dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ShellError::UnknownTheme(s.to_string())),
        }
    }
}

/// Colors of one theme mode, as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    /// Surfaces such as the top bar and drawer.
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    /// Menu and cart item cards.
    pub card: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#f3f4f6",
        paper: "#ffffff",
        text_primary: "#111827",
        text_secondary: "#4b5563",
        primary: "#3b82f6",
        secondary: "#ef4444",
        card: "#e0f2fe",
    };

    pub const DARK: Palette = Palette {
        background: "#111827",
        paper: "#1f2937",
        text_primary: "#e2e8f0",
        text_secondary: "#9ca3af",
        primary: "#3b82f6",
        secondary: "#ef4444",
        card: "#374151",
    };

    /// Parse a `#rrggbb` color into RGB components.
    pub fn rgb(color: &str) -> Option<(u8, u8, u8)> {
        let hex = color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_palettes_differ_in_background() {
        assert_eq!(ThemeMode::Light.palette().background, "#f3f4f6");
        assert_eq!(ThemeMode::Dark.palette().background, "#111827");
        assert_eq!(ThemeMode::Dark.palette().card, "#374151");
    }

    #[test]
    fn test_rgb() {
        assert_eq!(Palette::rgb(Palette::LIGHT.primary), Some((0x3b, 0x82, 0xf6)));
        assert_eq!(Palette::rgb("3b82f6"), None);
        assert_eq!(Palette::rgb("#zz0000"), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
