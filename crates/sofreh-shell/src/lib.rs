//! Navigation shell for the Sofreh storefront.
//!
//! The shell owns everything around the page content: which screen is
//! showing, the side drawer, the color theme, the active language, and the
//! top bar. It reads the cart only to show the item-count badge.
//!
//! # Example
//!
//! ```
//! use sofreh_shell::{Route, Shell, ShellSettings, Viewport};
//!
//! let mut shell = Shell::new(ShellSettings::default());
//! shell.navigate("/menu").unwrap();
//! assert_eq!(shell.route(), Route::Menu);
//!
//! shell.set_viewport(Viewport::Mobile);
//! assert!(!shell.drawer().is_open());
//! ```

mod drawer;
mod error;
mod nav;
mod route;
mod shell;
mod theme;

pub use drawer::{Drawer, DrawerEntry, DrawerWidth, Viewport, CLOSED_WIDTH_PX, MOBILE_MAX_WIDTH_PX, OPEN_WIDTH_PX};
pub use error::ShellError;
pub use nav::{NavBar, TopBar};
pub use route::Route;
pub use shell::{Shell, ShellSettings};
pub use theme::{Palette, ThemeMode};
