//! The side drawer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sofreh_locale::{Direction, Edge};

use crate::{Route, ShellError};

/// Drawer width when open on a desktop viewport.
pub const OPEN_WIDTH_PX: u32 = 240;

/// Drawer width when collapsed to icons.
pub const CLOSED_WIDTH_PX: u32 = 65;

/// Widest viewport treated as mobile.
pub const MOBILE_MAX_WIDTH_PX: u32 = 600;

/// Screen class the layout adapts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    /// Classify a window width.
    pub fn from_width(width_px: u32) -> Self {
        if width_px <= MOBILE_MAX_WIDTH_PX {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Viewport::Mobile)
    }
}

impl FromStr for Viewport {
    type Err = ShellError;

    /// Accepts `mobile`, `desktop`, or a width in pixels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "mobile" => Ok(Viewport::Mobile),
            "desktop" => Ok(Viewport::Desktop),
            other => other
                .trim_end_matches("px")
                .parse::<u32>()
                .map(Viewport::from_width)
                .map_err(|_| ShellError::UnknownViewport(s.to_string())),
        }
    }
}

/// Horizontal space the drawer takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerWidth {
    /// Covers the whole screen.
    Full,
    Px(u32),
}

impl fmt::Display for DrawerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerWidth::Full => write!(f, "100%"),
            DrawerWidth::Px(px) => write!(f, "{}px", px),
        }
    }
}

/// One navigation link in the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawerEntry {
    pub route: Route,
    pub title_key: &'static str,
    /// Whether this is the screen being shown.
    pub active: bool,
}

/// Drawer open state and the viewport it is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Drawer {
    open: bool,
    viewport: Viewport,
}

impl Drawer {
    /// A drawer for the given viewport. It starts open on desktop and closed
    /// on mobile.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            open: !viewport.is_mobile(),
            viewport,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Lay out for a new viewport. Landing on mobile closes the drawer.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if viewport.is_mobile() {
            self.open = false;
        }
    }

    pub fn width(&self) -> DrawerWidth {
        match (self.open, self.viewport) {
            (true, Viewport::Mobile) => DrawerWidth::Full,
            (true, Viewport::Desktop) => DrawerWidth::Px(OPEN_WIDTH_PX),
            (false, _) => DrawerWidth::Px(CLOSED_WIDTH_PX),
        }
    }

    /// Screen edge the drawer is attached to.
    pub fn anchor(&self, direction: Direction) -> Edge {
        direction.leading_edge()
    }

    /// Navigation links, marking the current screen.
    pub fn entries(&self, current: Route) -> Vec<DrawerEntry> {
        Route::ALL
            .into_iter()
            .map(|route| DrawerEntry {
                route,
                title_key: route.title_key(),
                active: route == current,
            })
            .collect()
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        let mut drawer = Drawer::new(Viewport::Desktop);
        assert_eq!(drawer.width(), DrawerWidth::Px(240));

        drawer.toggle();
        assert_eq!(drawer.width(), DrawerWidth::Px(65));

        let mut mobile = Drawer::new(Viewport::Mobile);
        assert_eq!(mobile.width(), DrawerWidth::Px(65));
        mobile.toggle();
        assert_eq!(mobile.width(), DrawerWidth::Full);
    }

    #[test]
    fn test_switching_to_mobile_closes() {
        let mut drawer = Drawer::new(Viewport::Desktop);
        assert!(drawer.is_open());
        drawer.set_viewport(Viewport::Mobile);
        assert!(!drawer.is_open());

        drawer.set_viewport(Viewport::Desktop);
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_anchor_follows_direction() {
        let drawer = Drawer::default();
        assert_eq!(drawer.anchor(Direction::Rtl), Edge::Right);
        assert_eq!(drawer.anchor(Direction::Ltr), Edge::Left);
    }

    #[test]
    fn test_viewport_parse() {
        assert_eq!("mobile".parse::<Viewport>(), Ok(Viewport::Mobile));
        assert_eq!("600".parse::<Viewport>(), Ok(Viewport::Mobile));
        assert_eq!("601px".parse::<Viewport>(), Ok(Viewport::Desktop));
        assert!("tablet".parse::<Viewport>().is_err());
    }

    #[test]
    fn test_entries_mark_current() {
        let entries = Drawer::default().entries(Route::Cart);
        assert_eq!(entries.len(), 5);
        let active: Vec<_> = entries.iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].route, Route::Cart);
        assert_eq!(entries[0].title_key, "sidebar.home");
    }
}
