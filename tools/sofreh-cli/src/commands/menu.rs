//! Print the menu.

use anyhow::Result;
use sofreh_commerce::catalog::Catalog;
use sofreh_shell::Shell;

use super::MenuArgs;
use crate::context::Context;
use crate::render::Screen;

/// Run the menu command.
pub fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::restaurant_menu();

    if ctx.output.is_json() {
        ctx.output.json(&catalog);
        return Ok(());
    }

    let mut settings = ctx.config.shell_settings();
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }
    Screen::new(&Shell::new(settings)).menu(&catalog);
    Ok(())
}
