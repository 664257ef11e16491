//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sofreh_locale::Locale;
use sofreh_observability::LoggingConfig;
use sofreh_shell::{ShellSettings, ThemeMode, Viewport};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["sofreh.toml", ".sofreh.toml", "sofreh.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SofrehConfig {
    /// Storefront configuration.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SofrehConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Initial shell state.
    pub fn shell_settings(&self) -> ShellSettings {
        ShellSettings {
            locale: self.storefront.locale,
            theme: self.storefront.theme,
            viewport: if self.storefront.mobile {
                Viewport::Mobile
            } else {
                Viewport::Desktop
            },
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storefront defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// UI language (`fa` or `en`).
    #[serde(default)]
    pub locale: Locale,

    /// Color scheme (`light` or `dark`).
    #[serde(default)]
    pub theme: ThemeMode,

    /// Lay out for a narrow screen.
    #[serde(default)]
    pub mobile: bool,
}

/// Generate a default sofreh.toml config file.
pub fn generate_default_config() -> String {
    r#"# Sofreh storefront configuration

[storefront]
# fa (Persian, right-to-left) or en
locale = "fa"
# light or dark
theme = "light"
# start with the narrow-screen layout
mobile = false

[logging]
# trace, debug, info, warn or error; RUST_LOG overrides it
level = "warn"
# human or json
format = "human"
"#
    .to_string()
}
