//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{SofrehConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: SofrehConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve_path(&cwd, path);
            (SofrehConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (SofrehConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }
}

/// Find the nearest config file at or above `start`.
///
/// Files that fail to parse are skipped.
pub fn find_config(start: &Path) -> Option<(PathBuf, SofrehConfig)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = SofrehConfig::load(&config_path) {
                    return Some((config_path, config));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Find the nearest config file path at or above `start`, parseable or not.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    })
}

/// Resolve a path relative to the working directory.
pub fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sofreh.toml"),
            "[storefront]\nlocale = \"en\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let (path, config) = find_config(&nested).unwrap();
        assert_eq!(path, dir.path().join("sofreh.toml"));
        assert_eq!(config.storefront.locale, sofreh_locale::Locale::En);
    }

    #[test]
    fn test_find_config_skips_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sofreh.toml"), "storefront = 12").unwrap();
        fs::write(dir.path().join(".sofreh.toml"), "[storefront]\ntheme = \"dark\"\n").unwrap();

        let (path, _) = find_config(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(".sofreh.toml"));
        assert_eq!(
            find_config_file(dir.path()).unwrap(),
            dir.path().join("sofreh.toml")
        );
    }

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/srv/shop");
        assert_eq!(resolve_path(cwd, "conf/sofreh.toml"), cwd.join("conf/sofreh.toml"));
        assert_eq!(resolve_path(cwd, "/etc/sofreh.toml"), PathBuf::from("/etc/sofreh.toml"));
    }
}
