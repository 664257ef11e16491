//! Text rendering of the storefront screens.

use anyhow::Result;
use console::{pad_str, style, Alignment, Style, Term};
use sofreh_commerce::cart::CartStore;
use sofreh_commerce::catalog::Catalog;
use sofreh_commerce::checkout::OrderReceipt;
use sofreh_commerce::validation::FieldErrors;
use sofreh_locale::{Direction, Messages, NumberFormat};
use sofreh_shell::{Palette, Route, Shell, TopBar};

const MIN_WIDTH: usize = 40;

/// Renders screens for one shell state, aligned to the language's
/// reading direction.
pub struct Screen<'a> {
    shell: &'a Shell,
    messages: Messages,
    digits: NumberFormat,
    width: usize,
    accent: Style,
    muted: Style,
    danger: Style,
}

impl<'a> Screen<'a> {
    pub fn new(shell: &'a Shell) -> Self {
        let (_, cols) = Term::stdout().size();
        Self::with_width(shell, usize::from(cols))
    }

    /// A screen of a fixed column count.
    pub fn with_width(shell: &'a Shell, width: usize) -> Self {
        let palette = shell.palette();
        Self {
            shell,
            messages: shell.messages(),
            digits: shell.locale().number_format(),
            width: width.max(MIN_WIDTH),
            accent: Style::new().color256(ansi256(palette.primary)).bold(),
            muted: Style::new().color256(ansi256(palette.text_secondary)),
            danger: Style::new().color256(ansi256(palette.secondary)),
        }
    }

    /// `text` aligned to the reading direction's leading edge.
    fn line(&self, text: &str) -> String {
        let aligned = match self.shell.direction() {
            Direction::Ltr => pad_str(text, self.width, Alignment::Left, None),
            Direction::Rtl => pad_str(text, self.width, Alignment::Right, None),
        };
        aligned.trim_end().to_string()
    }

    fn print(&self, text: &str) {
        println!("{}", self.line(text));
    }

    fn rule(&self) {
        println!("{}", self.muted.apply_to("─".repeat(self.width)));
    }

    fn title(&self, key: &str) {
        println!();
        self.print(&self.accent.apply_to(self.messages.get(key)).to_string());
    }

    fn hint(&self, key: &str) {
        self.print(&self.muted.apply_to(self.messages.get(key)).to_string());
    }

    fn count(&self, n: i64) -> String {
        self.digits.format_integer(n)
    }

    pub fn top_bar(&self, bar: &TopBar) {
        let mut parts = vec![
            format!("[{}]", bar.initials),
            style(&bar.brand).bold().to_string(),
        ];
        if let Some(ref clock) = bar.clock {
            parts.push(clock.clone());
        }
        if let Some(ref greeting) = bar.greeting {
            parts.push(self.muted.apply_to(greeting).to_string());
        }
        if let Some(badge) = bar.cart_badge {
            parts.push(format!(
                "{} ({})",
                self.messages.get("sidebar.cart"),
                self.accent.apply_to(self.count(badge))
            ));
        }
        self.rule();
        self.print(&parts.join("  "));
        self.rule();
    }

    /// Full titles when open, icons when collapsed.
    pub fn drawer(&self) {
        let entries = self.shell.drawer_entries();
        if self.shell.drawer().is_open() {
            for entry in entries {
                let label = format!("{} {}", icon(entry.route), self.messages.get(entry.title_key));
                if entry.active {
                    self.print(&format!("▸ {}", self.accent.apply_to(label)));
                } else {
                    self.print(&format!("  {}", label));
                }
            }
        } else {
            let icons: Vec<String> = entries
                .iter()
                .map(|e| {
                    if e.active {
                        self.accent.apply_to(icon(e.route)).to_string()
                    } else {
                        icon(e.route).to_string()
                    }
                })
                .collect();
            self.print(&icons.join(" "));
        }
    }

    pub fn home(&self) {
        self.title("home.welcome");
        for feature in ["variety", "fast_service", "quality"] {
            let name = format!("home.features.{}", feature);
            let desc = format!("home.features.{}_desc", feature);
            self.print(&format!(
                "• {}: {}",
                style(self.messages.get(&name)).bold(),
                self.muted.apply_to(self.messages.get(&desc))
            ));
        }
        self.title("home.about_us");
        self.print(self.messages.get("home.about_us_desc"));
        self.hint("app.help_hint");
    }

    pub fn menu(&self, catalog: &Catalog) {
        self.title("menu.title");
        let locale = self.shell.locale();
        for item in catalog.iter() {
            self.print(&format!(
                "{}  {}  {}",
                self.muted.apply_to(item.id.as_str()),
                style(self.messages.get(&item.name)).bold(),
                self.accent.apply_to(item.price.display(locale))
            ));
            self.print(&format!("    {}", self.messages.get(&item.description_key())));
        }
        self.hint("menu.hint");
    }

    pub fn cart(&self, cart: &CartStore, last_order: Option<&OrderReceipt>) -> Result<()> {
        self.title("cart.title");
        let locale = self.shell.locale();

        if cart.is_empty() {
            self.print(self.messages.get("cart.empty"));
        } else {
            for item in cart.items() {
                self.print(&format!(
                    "{}  {}  ×{}  {}",
                    self.muted.apply_to(item.id.as_str()),
                    style(self.messages.get(&item.name)).bold(),
                    self.count(item.quantity),
                    item.line_total().display(locale)
                ));
                self.print(&format!(
                    "    {}: {}",
                    self.messages.get("cart.added_at"),
                    self.digits.localize_digits(&item.added_at_label()?)
                ));
            }
            self.rule();
            self.print(&format!(
                "{}: {}",
                self.messages.get("cart.total"),
                self.accent.apply_to(cart.total().display(locale))
            ));
            self.hint("cart.hint");
        }

        if let Some(receipt) = last_order {
            self.print(&format!(
                "{} · {}: {}",
                self.messages.get("cart.last_order"),
                self.messages.get("cart.tracking_code"),
                self.digits.localize_digits(receipt.tracking_code.as_str())
            ));
        }
        Ok(())
    }

    pub fn receipt(&self, receipt: &OrderReceipt) -> Result<()> {
        let locale = self.shell.locale();
        self.title("cart.order_success");
        self.print(&format!(
            "{}: {}",
            self.messages.get("cart.tracking_code"),
            self.accent
                .apply_to(self.digits.localize_digits(receipt.tracking_code.as_str()))
        ));
        self.print(&format!(
            "{}: {}",
            self.messages.get("cart.order_time"),
            self.digits.localize_digits(&receipt.placed_at_label()?)
        ));
        self.print(&format!(
            "{}: {}",
            self.messages.get("cart.total"),
            receipt.total.display(locale)
        ));
        Ok(())
    }

    pub fn login(&self) {
        self.title("login.title");
        self.print(&format!("• {}", self.messages.get("login.email")));
        self.print(&format!("• {}", self.messages.get("login.password")));
        self.hint("login.hint");
        self.print(&format!(
            "{} {}",
            self.messages.get("login.no_account"),
            self.messages.get("login.register")
        ));
    }

    pub fn register(&self) {
        self.title("register.title");
        for key in [
            "register.fullname",
            "register.email",
            "register.phone",
            "register.password",
            "register.confirm_password",
        ] {
            self.print(&format!("• {}", self.messages.get(key)));
        }
        self.hint("register.hint");
        self.print(self.messages.get("register.have_account"));
    }

    pub fn field_errors(&self, errors: &FieldErrors) {
        for error in errors {
            self.print(&format!(
                "✗ {}",
                self.danger.apply_to(self.messages.get(error.message_key))
            ));
        }
    }

    pub fn page(
        &self,
        route: Route,
        catalog: &Catalog,
        cart: &CartStore,
        last_order: Option<&OrderReceipt>,
    ) -> Result<()> {
        match route {
            Route::Home => self.home(),
            Route::Menu => self.menu(catalog),
            Route::Cart => self.cart(cart, last_order)?,
            Route::Login => self.login(),
            Route::Register => self.register(),
        }
        Ok(())
    }
}

fn icon(route: Route) -> &'static str {
    match route {
        Route::Home => "⌂",
        Route::Menu => "☰",
        Route::Cart => "◫",
        Route::Login => "→",
        Route::Register => "✎",
    }
}

/// Nearest color in the xterm 6×6×6 cube.
fn ansi256(color: &str) -> u8 {
    let Some((r, g, b)) = Palette::rgb(color) else {
        return 7;
    };
    let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}
