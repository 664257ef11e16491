//! Sofreh CLI - Terminal storefront for the online restaurant.
//!
//! Commands:
//! - `sofreh shop` - Browse the menu, fill the cart and place an order (default)
//! - `sofreh menu` - Print the menu
//! - `sofreh config` - Manage configuration

mod commands;
mod config;
mod context;
mod input;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sofreh_observability::{init_logging, LogLevel};

use commands::{ConfigArgs, MenuArgs, ShopArgs};

/// Sofreh - Order from the online restaurant in your terminal
#[derive(Parser)]
#[command(name = "sofreh")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Print the menu
    Menu(MenuArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging.level = logging.level.min(LogLevel::Debug);
    }
    if let Err(e) = init_logging(&logging) {
        ctx.output.warn(&format!("Logging disabled: {}", e));
    }

    // Execute command
    let result = match cli.command.unwrap_or_else(|| Commands::Shop(ShopArgs::default())) {
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Menu(args) => commands::menu::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
