//! Locale-aware integer formatting.

/// Digit set and grouping rules for rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Character for zero; the other nine digits follow it contiguously.
    pub zero: char,
    /// Thousands separator.
    pub group_separator: char,
    /// Decimal separator.
    pub decimal_separator: char,
}

impl NumberFormat {
    /// ASCII digits with comma grouping ("150,000").
    pub const LATIN: NumberFormat = NumberFormat {
        zero: '0',
        group_separator: ',',
        decimal_separator: '.',
    };

    /// Extended Arabic-Indic digits with Arabic separators ("۱۵۰٬۰۰۰").
    pub const PERSIAN: NumberFormat = NumberFormat {
        zero: '\u{06F0}',
        group_separator: '\u{066C}',
        decimal_separator: '\u{066B}',
    };

    /// Format an integer with thousands grouping.
    pub fn format_integer(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() * 2 + 1);
        if value < 0 {
            out.push('-');
        }
        let len = digits.len();
        for (i, d) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(self.localize_digit(d));
        }
        out
    }

    /// Format a fixed-point value stored in minor units.
    ///
    /// `decimals` is the number of minor-unit digits (2 for cents, 0 for
    /// currencies without subdivisions).
    pub fn format_fixed(&self, minor_units: i64, decimals: u32) -> String {
        if decimals == 0 {
            return self.format_integer(minor_units);
        }
        let divisor = 10_u64.pow(decimals);
        let abs = minor_units.unsigned_abs();
        let whole = (abs / divisor) as i64;
        let frac = abs % divisor;

        let mut out = String::new();
        if minor_units < 0 {
            out.push('-');
        }
        out.push_str(&self.format_integer(whole));
        out.push(self.decimal_separator);
        let frac = format!("{:0width$}", frac, width = decimals as usize);
        out.extend(frac.chars().map(|d| self.localize_digit(d)));
        out
    }

    /// Replace ASCII digits in arbitrary text (dates, codes) with this
    /// format's digits. Other characters pass through.
    pub fn localize_digits(&self, text: &str) -> String {
        text.chars().map(|c| self.localize_digit(c)).collect()
    }

    fn localize_digit(&self, c: char) -> char {
        match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => {
                char::from_u32(self.zero as u32 + d).unwrap_or(c)
            }
            _ => c,
        }
    }
}
