//! Translated UI strings.

use crate::Locale;

/// Message catalog lookup.
///
/// Keys are dotted names (`cart.title`). A key missing from the requested
/// locale resolves against `Locale::FALLBACK`, then to the key itself so a
/// missing translation is visible instead of blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    /// Create a catalog view for a locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate a key.
    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.locale, key)
            .or_else(|| lookup(Locale::FALLBACK, key))
            .unwrap_or(key)
    }

    /// Translate a key and substitute `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.get(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// Check whether the active locale (not the fallback) defines a key.
    pub fn has(&self, key: &str) -> bool {
        lookup(self.locale, key).is_some()
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let table = match locale {
        Locale::En => EN,
        Locale::Fa => FA,
    };
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const EN: &[(&str, &str)] = &[
    ("app.title", "Online Restaurant"),
    ("app.brand_initials", "OR"),
    ("app.greeting", "Welcome, dear guest"),
    ("app.help_hint", "Type help to see the commands"),
    ("currency", "Toman"),
    // Drawer
    ("sidebar.title", "Navigation"),
    ("sidebar.home", "Home"),
    ("sidebar.register", "Register"),
    ("sidebar.login", "Login"),
    ("sidebar.menu", "Menu"),
    ("sidebar.cart", "Cart"),
    ("sidebar.settings", "Settings"),
    ("sidebar.language", "Language"),
    ("sidebar.theme", "Theme"),
    ("theme.light", "Light"),
    ("theme.dark", "Dark"),
    // Home
    ("home.welcome", "Welcome to our online restaurant"),
    ("home.features.variety", "Variety"),
    ("home.features.variety_desc", "Traditional Persian dishes and fresh sides"),
    ("home.features.fast_service", "Fast service"),
    ("home.features.fast_service_desc", "Hot food at your door in no time"),
    ("home.features.quality", "Quality"),
    ("home.features.quality_desc", "Fresh ingredients cooked every day"),
    ("home.about_us", "About us"),
    ("home.about_us_desc", "A family kitchen serving home-style food since day one."),
    // Menu
    ("menu.title", "Our Menu"),
    ("menu.add_to_cart", "Add to cart"),
    ("menu.added_to_cart", "{name} added to your cart"),
    ("menu.unknown_item", "There is no menu item called {id}"),
    ("menu.hint", "Type add <id> to put an item in your cart"),
    ("menu.items.kebab", "Koobideh Kebab"),
    ("menu.items.kebab_desc", "Grilled minced lamb skewers with saffron rice"),
    ("menu.items.joojeh", "Joojeh Kebab"),
    ("menu.items.joojeh_desc", "Saffron-marinated chicken skewers"),
    ("menu.items.ghormeh", "Ghormeh Sabzi"),
    ("menu.items.ghormeh_desc", "Herb stew with beans and lamb"),
    ("menu.items.shirazi_salad", "Shirazi Salad"),
    ("menu.items.shirazi_salad_desc", "Cucumber, tomato and onion with lime"),
    ("menu.items.mast_khiar", "Mast-o-Khiar"),
    ("menu.items.mast_khiar_desc", "Yogurt with cucumber and dried mint"),
    ("menu.items.soda", "Soda"),
    ("menu.items.soda_desc", "Chilled soft drink"),
    // Cart
    ("cart.title", "Shopping Cart"),
    ("cart.items", "Items"),
    ("cart.empty", "Your cart is empty"),
    ("cart.added_at", "Added"),
    ("cart.order_summary", "Order summary"),
    ("cart.total", "Total"),
    ("cart.address", "Delivery address"),
    ("cart.address_required", "Please enter your address"),
    ("cart.address_min_length", "The address must be at least 10 characters"),
    ("cart.phone", "Phone number"),
    ("cart.phone_required", "Please enter your phone number"),
    ("cart.phone_invalid", "The phone number must be 10 or 11 digits"),
    ("cart.submit_order", "Place order"),
    ("cart.order_success", "Your order has been placed"),
    ("cart.empty_checkout", "Add something to your cart before checking out"),
    ("cart.tracking_code", "Tracking code"),
    ("cart.order_time", "Order time"),
    ("cart.last_order", "Last order"),
    ("cart.not_in_cart", "{id} is not in your cart"),
    ("cart.hint", "inc/dec/qty/remove <id> to change quantities, clear to empty the cart, checkout to order"),
    // Login
    ("login.title", "Login"),
    ("login.email", "Email"),
    ("login.password", "Password"),
    ("login.email_error", "Please enter a valid email"),
    ("login.password_error", "Please enter your password"),
    ("login.remember", "Remember me"),
    ("login.hint", "Type login to sign in"),
    ("login.submit", "Sign in"),
    ("login.submitted", "Login details received"),
    ("login.no_account", "Don't have an account?"),
    ("login.register", "Register"),
    // Register
    ("register.title", "Create an account"),
    ("register.fullname", "Full name"),
    ("register.email", "Email"),
    ("register.phone", "Mobile number"),
    ("register.password", "Password"),
    ("register.confirm_password", "Confirm password"),
    ("register.fullname_error", "Please enter your full name"),
    ("register.email_error", "Please enter a valid email"),
    ("register.phone_error", "The mobile number must start with 0 and have 11 digits"),
    ("register.password_error", "The password must be at least 6 characters"),
    ("register.confirm_password_error", "The passwords do not match"),
    ("register.submit", "Register"),
    ("register.submitted", "Registration details received"),
    ("register.have_account", "Already have an account?"),
    ("register.hint", "Type register to create an account"),
];

const FA: &[(&str, &str)] = &[
    ("app.title", "رستوران آنلاین"),
    ("app.brand_initials", "ر آ"),
    ("app.greeting", "خوش آمدید، کاربر گرامی"),
    ("app.help_hint", "برای دیدن دستورها help را بنویسید"),
    ("currency", "تومان"),
    // Drawer
    ("sidebar.title", "ناوبری"),
    ("sidebar.home", "خانه"),
    ("sidebar.register", "ثبت‌نام"),
    ("sidebar.login", "ورود"),
    ("sidebar.menu", "منو"),
    ("sidebar.cart", "سبد خرید"),
    ("sidebar.settings", "تنظیمات"),
    ("sidebar.language", "زبان"),
    ("sidebar.theme", "پوسته"),
    ("theme.light", "روشن"),
    ("theme.dark", "تیره"),
    // Home
    ("home.welcome", "به رستوران آنلاین ما خوش آمدید"),
    ("home.features.variety", "تنوع"),
    ("home.features.variety_desc", "غذاهای سنتی ایرانی و پیش‌غذاهای تازه"),
    ("home.features.fast_service", "سرویس سریع"),
    ("home.features.fast_service_desc", "غذای گرم در کوتاه‌ترین زمان درب منزل شما"),
    ("home.features.quality", "کیفیت"),
    ("home.features.quality_desc", "مواد اولیه تازه که هر روز پخته می‌شوند"),
    ("home.about_us", "درباره ما"),
    ("home.about_us_desc", "یک آشپزخانه خانوادگی با طعم غذای خانگی."),
    // Menu
    ("menu.title", "منوی ما"),
    ("menu.add_to_cart", "افزودن به سبد"),
    ("menu.added_to_cart", "{name} به سبد خرید اضافه شد"),
    ("menu.unknown_item", "آیتمی با شناسه {id} در منو نیست"),
    ("menu.hint", "برای افزودن به سبد خرید add <id> را بنویسید"),
    ("menu.items.kebab", "کباب کوبیده"),
    ("menu.items.kebab_desc", "سیخ کباب گوشت چرخ‌کرده با برنج زعفرانی"),
    ("menu.items.joojeh", "جوجه کباب"),
    ("menu.items.joojeh_desc", "جوجه کباب زعفرانی"),
    ("menu.items.ghormeh", "قورمه سبزی"),
    ("menu.items.ghormeh_desc", "خورش سبزی با لوبیا و گوشت"),
    ("menu.items.shirazi_salad", "سالاد شیرازی"),
    ("menu.items.shirazi_salad_desc", "خیار، گوجه و پیاز با آبلیمو"),
    ("menu.items.mast_khiar", "ماست و خیار"),
    ("menu.items.mast_khiar_desc", "ماست با خیار و نعناع خشک"),
    ("menu.items.soda", "نوشابه"),
    ("menu.items.soda_desc", "نوشیدنی گازدار خنک"),
    // Cart
    ("cart.title", "سبد خرید"),
    ("cart.items", "آیتم‌ها"),
    ("cart.empty", "سبد خرید شما خالی است"),
    ("cart.added_at", "زمان افزودن"),
    ("cart.order_summary", "خلاصه سفارش"),
    ("cart.total", "مجموع"),
    ("cart.address", "آدرس تحویل"),
    ("cart.address_required", "لطفاً آدرس خود را وارد کنید"),
    ("cart.address_min_length", "آدرس باید حداقل ۱۰ کاراکتر باشد"),
    ("cart.phone", "شماره تلفن"),
    ("cart.phone_required", "لطفاً شماره تلفن خود را وارد کنید"),
    ("cart.phone_invalid", "شماره تلفن باید ۱۰ یا ۱۱ رقم باشد"),
    ("cart.submit_order", "ثبت سفارش"),
    ("cart.order_success", "سفارش شما با موفقیت ثبت شد"),
    ("cart.empty_checkout", "پیش از ثبت سفارش، آیتمی به سبد اضافه کنید"),
    ("cart.tracking_code", "کد پیگیری"),
    ("cart.order_time", "زمان سفارش"),
    ("cart.last_order", "آخرین سفارش"),
    ("cart.not_in_cart", "{id} در سبد خرید شما نیست"),
    ("cart.hint", "inc/dec/qty/remove <id> برای تغییر تعداد، clear برای خالی کردن، checkout برای ثبت سفارش"),
    // Login
    ("login.title", "ورود"),
    ("login.email", "ایمیل"),
    ("login.password", "رمز عبور"),
    ("login.email_error", "لطفاً یک ایمیل معتبر وارد کنید"),
    ("login.password_error", "لطفاً رمز عبور را وارد کنید"),
    ("login.remember", "مرا به خاطر بسپار"),
    ("login.hint", "برای ورود login را بنویسید"),
    ("login.submit", "ورود"),
    ("login.submitted", "اطلاعات ورود دریافت شد"),
    ("login.no_account", "حساب کاربری ندارید؟"),
    ("login.register", "ثبت‌نام"),
    // Register
    ("register.title", "ایجاد حساب کاربری"),
    ("register.fullname", "نام و نام خانوادگی"),
    ("register.email", "ایمیل"),
    ("register.phone", "شماره موبایل"),
    ("register.password", "رمز عبور"),
    ("register.confirm_password", "تکرار رمز عبور"),
    ("register.fullname_error", "لطفاً نام و نام خانوادگی را وارد کنید"),
    ("register.email_error", "لطفاً یک ایمیل معتبر وارد کنید"),
    ("register.phone_error", "شماره موبایل باید با ۰ شروع شود و ۱۱ رقم باشد"),
    ("register.password_error", "رمز عبور باید حداقل ۶ کاراکتر باشد"),
    ("register.confirm_password_error", "رمزهای عبور یکسان نیستند"),
    ("register.submit", "ثبت‌نام"),
    ("register.submitted", "اطلاعات ثبت‌نام دریافت شد"),
    ("register.have_account", "حساب کاربری دارید؟"),
    ("register.hint", "برای ثبت‌نام register را بنویسید"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_locale() {
        assert_eq!(Messages::new(Locale::En).get("cart.title"), "Shopping Cart");
        assert_eq!(Messages::new(Locale::Fa).get("cart.title"), "سبد خرید");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let m = Messages::new(Locale::Fa);
        assert_eq!(m.get("does.not.exist"), "does.not.exist");
        assert!(!m.has("does.not.exist"));
    }

    #[test]
    fn test_placeholders() {
        let m = Messages::new(Locale::En);
        assert_eq!(
            m.format("menu.added_to_cart", &[("name", "Soda")]),
            "Soda added to your cart"
        );
    }

    #[test]
    fn test_catalogs_define_the_same_keys() {
        for (key, _) in EN {
            assert!(lookup(Locale::Fa, key).is_some(), "fa is missing {key}");
        }
        for (key, _) in FA {
            assert!(lookup(Locale::En, key).is_some(), "en is missing {key}");
        }
    }
}
