//! CLI command implementations.

pub mod config;
pub mod menu;
pub mod shop;

use clap::{Args, Subcommand};
use sofreh_locale::Locale;
use sofreh_shell::{ThemeMode, Viewport};

/// Arguments for the shop command.
#[derive(Args, Debug, Default)]
pub struct ShopArgs {
    /// Language to start in (fa or en).
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Color scheme (light or dark).
    #[arg(short, long)]
    pub theme: Option<ThemeMode>,

    /// Screen layout: mobile, desktop, or a width in pixels.
    #[arg(long)]
    pub viewport: Option<Viewport>,
}

/// Arguments for the menu command.
#[derive(Args, Debug)]
pub struct MenuArgs {
    /// Language to print the menu in.
    #[arg(short, long)]
    pub locale: Option<Locale>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
