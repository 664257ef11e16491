//! Interactive shopping session.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sofreh_auth::{AuthError, LoginForm, RegisterForm};
use sofreh_commerce::prelude::*;
use sofreh_locale::Locale;
use sofreh_observability::SessionContext;
use sofreh_shell::{DrawerWidth, Route, Shell, ShellSettings, Viewport};
use tracing::{info, warn};

use super::ShopArgs;
use crate::context::Context;
use crate::input::Prompter;
use crate::render::Screen;

/// One line typed at the session prompt.
#[derive(Parser, Debug)]
#[command(name = "shop", no_binary_name = true, disable_version_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ReplCommand {
    /// Show the home screen
    Home,
    /// Show the menu
    Menu,
    /// Add one of a menu item to the cart
    Add { id: String },
    /// Show the cart
    Cart,
    /// One more of an item in the cart
    Inc { id: String },
    /// One less of an item in the cart (removes it at zero)
    Dec { id: String },
    /// Set the quantity of an item in the cart (below 1 removes it)
    Qty {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove an item from the cart
    Remove { id: String },
    /// Empty the cart
    Clear,
    /// Enter delivery details and place the order
    Checkout,
    /// Fill in the login form
    Login,
    /// Fill in the registration form
    Register,
    /// Go to a screen by path or name
    Go { route: Route },
    /// Open or collapse the drawer
    Drawer,
    /// Lay out for mobile, desktop, or a width in pixels
    Resize { viewport: Viewport },
    /// Switch between light and dark
    Theme,
    /// Change language (fa or en)
    Lang { locale: Locale },
    /// Leave the storefront
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Everything one shopper has open.
pub struct Session {
    catalog: Catalog,
    cart: CartStore,
    shell: Shell,
    clock: SharedClock,
    last_receipt: Option<OrderReceipt>,
}

impl Session {
    pub fn new(settings: ShellSettings, clock: SharedClock) -> Self {
        Self {
            catalog: Catalog::restaurant_menu(),
            cart: CartStore::new(clock.clone()),
            shell: Shell::new(settings),
            clock,
            last_receipt: None,
        }
    }

    /// Add one unit of a menu item, returning its name key.
    pub fn add(&mut self, id: &str) -> Result<String, CommerceError> {
        let item = self
            .catalog
            .get(id)
            .ok_or_else(|| CommerceError::ItemNotFound(id.to_string()))?;
        let name = item.name.clone();
        self.cart.add_item(item.to_candidate());
        Ok(name)
    }

    /// Change an item's quantity by `delta`. False if it is not in the cart.
    pub fn step(&mut self, id: &str, delta: i64) -> bool {
        match self.cart.get(id) {
            Some(item) => {
                let quantity = item.quantity.saturating_add(delta);
                self.cart.update_quantity(id, quantity);
                true
            }
            None => false,
        }
    }

    /// Set an item's quantity. False if it is not in the cart.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> bool {
        if !self.cart.contains(id) {
            return false;
        }
        self.cart.update_quantity(id, quantity);
        true
    }

    /// Remove an item. False if it was not in the cart.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.cart.contains(id) {
            return false;
        }
        self.cart.remove_item(id);
        true
    }

    /// Place the order and remember its receipt.
    pub fn checkout(&mut self, form: &CheckoutForm) -> Result<OrderReceipt, CommerceError> {
        let receipt = submit_order(form, &mut self.cart, self.clock.as_ref())?;
        self.last_receipt = Some(receipt.clone());
        Ok(receipt)
    }

    fn render(&self, ctx: &Context) -> Result<()> {
        if ctx.output.is_json() {
            return Ok(());
        }
        let screen = Screen::new(&self.shell);
        let bar = self.shell.top_bar(&self.clock.now(), &self.cart)?;
        screen.top_bar(&bar);
        screen.drawer();
        // A fully open drawer on mobile covers the page.
        if self.shell.drawer().width() == DrawerWidth::Full {
            return Ok(());
        }
        screen.page(
            self.shell.route(),
            &self.catalog,
            &self.cart,
            self.last_receipt.as_ref(),
        )
    }

    fn execute(
        &mut self,
        command: ReplCommand,
        prompter: &mut Prompter,
        ctx: &Context,
    ) -> Result<Step> {
        let messages = self.shell.messages();
        let not_in_cart = |id: &str| messages.format("cart.not_in_cart", &[("id", id)]);

        match command {
            ReplCommand::Home => self.shell.go(Route::Home),
            ReplCommand::Menu => self.shell.go(Route::Menu),
            ReplCommand::Cart => self.shell.go(Route::Cart),
            ReplCommand::Go { route } => self.shell.go(route),
            ReplCommand::Add { id } => match self.add(&id) {
                Ok(name) => ctx.output.success(
                    &messages.format("menu.added_to_cart", &[("name", messages.get(&name))]),
                ),
                Err(CommerceError::ItemNotFound(id)) => ctx
                    .output
                    .warn(&messages.format("menu.unknown_item", &[("id", &id)])),
                Err(e) => return Err(e.into()),
            },
            ReplCommand::Inc { id } => {
                if !self.step(&id, 1) {
                    ctx.output.warn(&not_in_cart(&id));
                }
            }
            ReplCommand::Dec { id } => {
                if !self.step(&id, -1) {
                    ctx.output.warn(&not_in_cart(&id));
                }
            }
            ReplCommand::Qty { id, quantity } => {
                if !self.set_quantity(&id, quantity) {
                    ctx.output.warn(&not_in_cart(&id));
                }
            }
            ReplCommand::Remove { id } => {
                if !self.remove(&id) {
                    ctx.output.warn(&not_in_cart(&id));
                }
            }
            ReplCommand::Clear => self.cart.clear(),
            ReplCommand::Checkout => {
                self.shell.go(Route::Cart);
                self.run_checkout(prompter, ctx)?;
            }
            ReplCommand::Login => {
                self.shell.go(Route::Login);
                self.run_login(prompter, ctx)?;
            }
            ReplCommand::Register => {
                self.shell.go(Route::Register);
                self.run_register(prompter, ctx)?;
            }
            ReplCommand::Drawer => self.shell.toggle_drawer(),
            ReplCommand::Resize { viewport } => self.shell.set_viewport(viewport),
            ReplCommand::Theme => {
                let mode = self.shell.toggle_theme();
                ctx.output.info(messages.get(mode.label_key()));
            }
            ReplCommand::Lang { locale } => self.shell.set_locale(locale),
            ReplCommand::Quit => return Ok(Step::Quit),
        }

        Ok(Step::Continue)
    }

    fn run_checkout(&mut self, prompter: &mut Prompter, ctx: &Context) -> Result<()> {
        let messages = self.shell.messages();
        if self.cart.is_empty() {
            ctx.output.warn(messages.get("cart.empty_checkout"));
            return Ok(());
        }

        let address = prompter.field(messages.get("cart.address"))?;
        let phone = prompter.field(messages.get("cart.phone"))?;
        let form = CheckoutForm::new(address, phone);

        match self.checkout(&form) {
            Ok(receipt) => {
                if ctx.output.is_json() {
                    ctx.output.json_line(&receipt);
                } else {
                    Screen::new(&self.shell).receipt(&receipt)?;
                }
            }
            Err(CommerceError::InvalidForm(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
                warn!(?fields, "checkout form rejected");
                self.report_errors(&errors, ctx);
            }
            Err(CommerceError::EmptyCart) => ctx.output.warn(messages.get("cart.empty_checkout")),
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn run_login(&mut self, prompter: &mut Prompter, ctx: &Context) -> Result<()> {
        let messages = self.shell.messages();
        let form = LoginForm {
            email: prompter.field(messages.get("login.email"))?,
            password: prompter.secret(messages.get("login.password"))?,
            remember: prompter.confirm(messages.get("login.remember"))?,
        };

        match form.submit() {
            Ok(request) => {
                if ctx.output.is_json() {
                    ctx.output.json_line(&request);
                } else {
                    ctx.output.success(messages.get("login.submitted"));
                }
            }
            Err(AuthError::Validation(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
                warn!(?fields, "login form rejected");
                self.report_errors(&errors, ctx);
            }
        }
        Ok(())
    }

    fn run_register(&mut self, prompter: &mut Prompter, ctx: &Context) -> Result<()> {
        let messages = self.shell.messages();
        let form = RegisterForm {
            full_name: prompter.field(messages.get("register.fullname"))?,
            email: prompter.field(messages.get("register.email"))?,
            phone: prompter.field(messages.get("register.phone"))?,
            password: prompter.secret(messages.get("register.password"))?,
            confirm_password: prompter.secret(messages.get("register.confirm_password"))?,
        };

        match form.submit() {
            Ok(registration) => {
                if ctx.output.is_json() {
                    ctx.output.json_line(&registration);
                } else {
                    ctx.output.success(messages.get("register.submitted"));
                }
            }
            Err(AuthError::Validation(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
                warn!(?fields, "registration form rejected");
                self.report_errors(&errors, ctx);
            }
        }
        Ok(())
    }

    fn report_errors(&self, errors: &FieldErrors, ctx: &Context) {
        if ctx.output.is_json() {
            ctx.output.json_line(&serde_json::json!({ "errors": errors }));
        } else {
            Screen::new(&self.shell).field_errors(errors);
        }
    }
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut settings = ctx.config.shell_settings();
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if let Some(viewport) = args.viewport {
        settings.viewport = viewport;
    }

    let mut session = Session::new(settings, SystemClock::shared());

    // Cart activity is streamed in JSON mode and traced in verbose mode.
    let output = ctx.output.clone();
    session.cart.subscribe(move |event| {
        if output.is_json() {
            output.json_line(event);
        } else {
            output.debug(&format!("cart: {:?}", event));
        }
    });

    let session_ctx = SessionContext::new();
    let _span = session_ctx.span().entered();
    info!(
        locale = %settings.locale,
        theme = %settings.theme,
        "shopping session started"
    );

    let mut prompter = Prompter::detect();
    session.render(ctx)?;

    loop {
        let Some(line) = prompter.line(session.shell.title())? else {
            break;
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ReplLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Also covers `help`, which clap reports as an error kind.
                e.print()?;
                continue;
            }
        };

        if session.execute(command, &mut prompter, ctx)? == Step::Quit {
            break;
        }
        session.render(ctx)?;
    }

    info!(
        elapsed_ms = session_ctx.elapsed_ms() as u64,
        items_in_cart = session.cart.len(),
        "shopping session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sofreh_commerce::clock::FixedClock;

    fn session() -> Session {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 0)
            .unwrap();
        Session::new(ShellSettings::default(), FixedClock::shared(now))
    }

    fn parse(line: &str) -> Result<ReplCommand, clap::Error> {
        ReplLine::try_parse_from(line.split_whitespace()).map(|l| l.command)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("add kebab").unwrap(), ReplCommand::Add { id: "kebab".into() });
        assert_eq!(
            parse("qty soda -2").unwrap(),
            ReplCommand::Qty { id: "soda".into(), quantity: -2 }
        );
        assert_eq!(parse("go /RestaurantOnline").unwrap(), ReplCommand::Go { route: Route::Home });
        assert_eq!(parse("go cart").unwrap(), ReplCommand::Go { route: Route::Cart });
        assert_eq!(
            parse("resize 320").unwrap(),
            ReplCommand::Resize { viewport: Viewport::Mobile }
        );
        assert_eq!(parse("lang en").unwrap(), ReplCommand::Lang { locale: Locale::En });
        assert_eq!(parse("exit").unwrap(), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse("add").is_err());
        assert!(parse("go /orders").is_err());
        assert!(parse("lang de").is_err());
        assert!(parse("fly").is_err());
        assert_eq!(
            parse("help").unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn test_add_unknown_item() {
        let mut s = session();
        assert_eq!(
            s.add("pizza"),
            Err(CommerceError::ItemNotFound("pizza".to_string()))
        );
        assert_eq!(s.add("kebab").unwrap(), "menu.items.kebab");
    }

    #[test]
    fn test_dec_to_zero_removes() {
        let mut s = session();
        s.add("soda").unwrap();
        s.add("soda").unwrap();
        assert!(s.step("soda", -1));
        assert_eq!(s.cart.get("soda").unwrap().quantity, 1);
        assert!(s.step("soda", -1));
        assert!(s.cart.is_empty());
        assert!(!s.step("soda", -1));
    }

    #[test]
    fn test_quantity_and_remove_report_missing() {
        let mut s = session();
        assert!(!s.set_quantity("kebab", 3));
        assert!(!s.remove("kebab"));
        s.add("kebab").unwrap();
        assert!(s.set_quantity("kebab", 3));
        assert_eq!(s.cart.item_count(), 3);
        assert!(s.remove("kebab"));
    }

    #[test]
    fn test_checkout_keeps_last_receipt() {
        let mut s = session();
        s.add("ghormeh").unwrap();
        let receipt = s
            .checkout(&CheckoutForm::new("Isfahan, Chaharbagh 7", "03112345678"))
            .unwrap();

        assert_eq!(receipt.tracking_code.as_str(), "202403050907");
        assert_eq!(s.last_receipt.as_ref(), Some(&receipt));
        assert!(s.cart.is_empty());
    }
}
