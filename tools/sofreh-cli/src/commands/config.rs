//! Configuration management commands.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use sofreh_observability::{LogFormat, LogLevel};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, SofrehConfig, CONFIG_FILE_NAMES};
use crate::context::{find_config_file, Context};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let storefront = &ctx.config.storefront;
    ctx.output.info("[storefront]");
    ctx.output.kv("locale", storefront.locale.code());
    ctx.output.kv("theme", storefront.theme.as_str());
    ctx.output.kv("mobile", &storefront.mobile.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", ctx.config.logging.level.as_directive());
    ctx.output.kv("format", ctx.config.logging.format.as_str());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json_line(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = existing_config_path(ctx)?;

    let mut config = SofrehConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let config_path = existing_config_path(ctx)?;
    // Load strictly: discovery skips files that fail to parse.
    let config = SofrehConfig::load(&config_path)?;

    let warnings = config_warnings(&config);
    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }
    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn existing_config_path(ctx: &Context) -> Result<PathBuf> {
    ctx.config_path
        .clone()
        .or_else(|| find_config_file(&ctx.cwd))
        .ok_or_else(|| anyhow!("No config file found. Run `sofreh config init` to create one."))
}

/// Settings that parse but are probably not what was meant.
fn config_warnings(config: &SofrehConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.logging.level <= LogLevel::Debug && config.logging.format == LogFormat::Human {
        warnings.push(format!(
            "logging.level '{}' prints cart activity between prompts",
            config.logging.level.as_directive()
        ));
    }

    warnings
}

fn get_config_value(config: &SofrehConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storefront", "locale"] => Ok(config.storefront.locale.code().to_string()),
        ["storefront", "theme"] => Ok(config.storefront.theme.as_str().to_string()),
        ["storefront", "mobile"] => Ok(config.storefront.mobile.to_string()),
        ["logging", "level"] => Ok(config.logging.level.as_directive().to_string()),
        ["logging", "format"] => Ok(config.logging.format.as_str().to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut SofrehConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storefront", "locale"] => config.storefront.locale = value.parse()?,
        ["storefront", "theme"] => config.storefront.theme = value.parse()?,
        ["storefront", "mobile"] => config.storefront.mobile = value.parse()?,
        ["logging", "level"] => config.logging.level = value.parse()?,
        ["logging", "format"] => config.logging.format = value.parse()?,
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}
