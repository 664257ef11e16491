//! Shell state for one session.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sofreh_commerce::cart::CartStore;
use sofreh_locale::{Direction, Edge, Locale, Messages};
use tracing::debug;

use crate::{Drawer, DrawerEntry, NavBar, Palette, Route, ShellError, ThemeMode, TopBar, Viewport};

/// Settings the shell starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShellSettings {
    pub locale: Locale,
    pub theme: ThemeMode,
    pub viewport: Viewport,
}

/// Current screen, drawer, theme, and language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    route: Route,
    drawer: Drawer,
    theme: ThemeMode,
    locale: Locale,
    nav: NavBar,
}

impl Shell {
    pub fn new(settings: ShellSettings) -> Self {
        Self {
            route: Route::Home,
            drawer: Drawer::new(settings.viewport),
            theme: settings.theme,
            locale: settings.locale,
            nav: NavBar::standard(),
        }
    }

    /// Replace the top bar configuration.
    pub fn with_nav(mut self, nav: NavBar) -> Self {
        self.nav = nav;
        self
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Show a screen.
    pub fn go(&mut self, route: Route) {
        if self.route != route {
            debug!(from = %self.route, to = %route, "navigate");
            self.route = route;
        }
    }

    /// Show the screen mounted at a path. The current screen is kept if the
    /// path is unknown.
    pub fn navigate(&mut self, path: &str) -> Result<Route, ShellError> {
        let route = Route::from_path(path)?;
        self.go(route);
        Ok(route)
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer.toggle();
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        debug!(?viewport, "viewport changed");
        self.drawer.set_viewport(viewport);
    }

    /// Drawer links with the current screen marked.
    pub fn drawer_entries(&self) -> Vec<DrawerEntry> {
        self.drawer.entries(self.route)
    }

    /// Edge the drawer hangs from in the active language.
    pub fn drawer_anchor(&self) -> Edge {
        self.drawer.anchor(self.direction())
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Switch between light and dark.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme changed");
        self.theme
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        debug!(%locale, "language changed");
        self.locale = locale;
    }

    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Translations for the active language.
    pub fn messages(&self) -> Messages {
        Messages::new(self.locale)
    }

    /// Title of the current screen in the active language.
    pub fn title(&self) -> &'static str {
        self.messages().get(self.route.title_key())
    }

    /// Render the top bar.
    pub fn top_bar(&self, now: &NaiveDateTime, cart: &CartStore) -> Result<TopBar, ShellError> {
        self.nav.render(&self.messages(), now, cart)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellSettings::default())
    }
}
