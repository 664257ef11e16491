//! Screens reachable from the drawer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ShellError;

/// A top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Menu,
    Cart,
    Login,
    Register,
}

impl Route {
    /// Drawer order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Register,
        Route::Login,
        Route::Menu,
        Route::Cart,
    ];

    /// Path the screen is mounted at.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Menu => "/menu",
            Route::Cart => "/cart",
            Route::Login => "/login",
            Route::Register => "/register",
        }
    }

    /// Message key of the screen's title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Home => "sidebar.home",
            Route::Menu => "sidebar.menu",
            Route::Cart => "sidebar.cart",
            Route::Login => "sidebar.login",
            Route::Register => "sidebar.register",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Menu => "menu",
            Route::Cart => "cart",
            Route::Login => "login",
            Route::Register => "register",
        }
    }

    /// Resolve a path. `/RestaurantOnline` is an alias of home and a
    /// trailing slash is ignored.
    pub fn from_path(path: &str) -> Result<Self, ShellError> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match normalized {
            "/" | "/RestaurantOnline" => Ok(Route::Home),
            "/menu" => Ok(Route::Menu),
            "/cart" => Ok(Route::Cart),
            "/login" => Ok(Route::Login),
            "/register" => Ok(Route::Register),
            _ => Err(ShellError::UnknownRoute(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = ShellError;

    /// Accepts a path (`/menu`) or a bare screen name (`menu`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('/') {
            return Route::from_path(s);
        }
        Route::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShellError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Ok(route));
        }
    }

    #[test]
    fn test_home_alias() {
        assert_eq!(Route::from_path("/RestaurantOnline"), Ok(Route::Home));
        assert_eq!(Route::from_path("/menu/"), Ok(Route::Menu));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(
            Route::from_path("/checkout"),
            Err(ShellError::UnknownRoute("/checkout".to_string()))
        );
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!("cart".parse::<Route>(), Ok(Route::Cart));
        assert_eq!("Login".parse::<Route>(), Ok(Route::Login));
        assert!("orders".parse::<Route>().is_err());
    }
}
