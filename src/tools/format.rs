pub mod duration;
pub mod roman;
pub mod words;

pub use duration::Duration;
pub use roman::Roman;
pub use words::Words;

use crate::conf;
use crate::tools::numeral::{Numeral, NumeralSystem};

/// Suffixes of abbreviate, one per power of 1000
pub const ABBREVIATIONS: [&str; 6] = ["", "K", "M", "B", "T", "Q"];

pub const DECIMAL_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
pub const BINARY_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// currency code -> symbol
pub const CURRENCY_SYMBOLS: [(&str, &str); 20] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "¥"),
    ("INR", "₹"),
    ("IRR", "﷼"),
    ("IRT", "تومان"),
    ("RUB", "₽"),
    ("KRW", "₩"),
    ("TRY", "₺"),
    ("BDT", "৳"),
    ("AED", "د.إ"),
    ("SAR", "﷼"),
    ("CHF", "CHF"),
    ("CAD", "C$"),
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("NGN", "₦"),
    ("VND", "₫"),
];

/// locales rendering the symbol in front of the amount
const PREFIX_LOCALES: [&str; 5] = ["en", "ja", "zh", "ko", "hi"];

/// Number formatting tools.
pub struct Fmt;

impl Fmt {
    /// `abbreviate_p` with the configured precision.
    pub fn abbreviate(n: f64) -> String {
        Self::abbreviate_p(n, conf::defaults().precision)
    }

    /// 1500 -> "1.5K", 2500000 -> "2.5M", 999 -> "999"
    pub fn abbreviate_p(n: f64, precision: usize) -> String {
        if !n.is_finite() {
            return n.to_string();
        }
        let (mut mantissa, mut exp) = scale(n.abs(), 1000.0, ABBREVIATIONS.len() - 1);
        let sign = if n < 0.0 { "-" } else { "" };
        let mut body = Self::trim_zeros(&format!("{:.*}", precision, mantissa));
        // 999_999 rounds to "1000" at K, render it as "1M"
        if exp + 1 < ABBREVIATIONS.len() && body.parse::<f64>().is_ok_and(|v| v >= 1000.0) {
            mantissa /= 1000.0;
            exp += 1;
            body = Self::trim_zeros(&format!("{:.*}", precision, mantissa));
        }
        if body == "0" {
            return "0".to_string();
        }
        format!("{}{}{}", sign, body, ABBREVIATIONS[exp])
    }

    pub fn humanize(n: f64) -> String {
        Self::abbreviate(n)
    }

    pub fn shorten(n: f64) -> String {
        Self::abbreviate(n)
    }

    /// decimal units with the configured precision
    pub fn file_size(bytes: i64) -> String {
        Self::file_size_p(bytes, conf::defaults().size_precision, false)
    }

    pub fn bytes(bytes: i64) -> String {
        Self::file_size(bytes)
    }

    /// Human readable byte count. `binary` switches to base 1024 with KiB/MiB/... labels.
    pub fn file_size_p(bytes: i64, precision: usize, binary: bool) -> String {
        let (base, units) = if binary { (1024.0, &BINARY_UNITS) } else { (1000.0, &DECIMAL_UNITS) };
        let (mantissa, exp) = scale(bytes.unsigned_abs() as f64, base, units.len() - 1);
        let body = if exp == 0 {
            bytes.unsigned_abs().to_string()
        } else {
            Self::trim_zeros(&format!("{:.*}", precision, mantissa))
        };
        let sign = if bytes < 0 { "-" } else { "" };
        format!("{}{} {}", sign, body, units[exp])
    }

    pub fn currency_symbol(code: &str) -> Option<&'static str> {
        let code = code.trim().to_uppercase();
        CURRENCY_SYMBOLS.iter().find(|(c, _)| *c == code).map(|(_, s)| *s)
    }

    /// currency with the configured code and locale
    pub fn currency_d(amount: f64) -> String {
        let d = conf::defaults();
        Self::currency(amount, &d.currency, &d.locale)
    }

    /// `amount` with two decimals and grouping, symbol placed by `locale`.
    ///
    /// # 示例
    /// ```
    /// use numkit::tools::format::Fmt;
    /// assert_eq!(Fmt::currency(1234.5, "USD", "en_US"), "$1,234.50");
    /// assert_eq!(Fmt::currency(1234.5, "EUR", "de_DE"), "1,234.50 €");
    /// assert_eq!(Fmt::currency(10.0, "XYZ", "en"), "XYZ 10.00");
    /// ```
    pub fn currency(amount: f64, code: &str, locale: &str) -> String {
        let number = Self::number(amount.abs(), 2);
        let sign = if amount < 0.0 && number.chars().any(|c| c.is_ascii_digit() && c != '0') { "-" } else { "" };
        let locale = locale.trim().to_lowercase();
        let prefix = PREFIX_LOCALES.iter().any(|p| locale.starts_with(p));
        let symbol = Self::currency_symbol(code);

        match (prefix, symbol) {
            (true, Some(s)) if s.chars().all(|c| c.is_alphabetic()) => format!("{}{} {}", sign, s, number),
            (true, Some(s)) => format!("{}{}{}", sign, s, number),
            (true, None) => format!("{}{} {}", sign, code.trim().to_uppercase(), number),
            (false, Some(s)) => format!("{}{} {}", sign, number, s),
            (false, None) => format!("{}{} {}", sign, number, code.trim().to_uppercase()),
        }
    }

    /// percentage with the configured decimals, `%` appended
    pub fn percentage_d(v: f64) -> String {
        Self::percentage(v, conf::defaults().percent_decimals, true)
    }

    pub fn percentage(v: f64, decimals: usize, with_sign: bool) -> String {
        let mut s = format!("{:.*}", decimals, v);
        if with_sign {
            s.push('%');
        }
        s
    }

    /// 1 -> "1st", 12 -> "12th", 23 -> "23rd"
    pub fn ordinal(n: i64) -> String {
        let abs = n.unsigned_abs();
        let suffix = match (abs % 100, abs % 10) {
            (11..=13, _) => "th",
            (_, 1) => "st",
            (_, 2) => "nd",
            (_, 3) => "rd",
            _ => "th",
        };
        format!("{}{}", n, suffix)
    }

    /// to_scientific with the configured precision
    pub fn to_scientific_d(v: f64) -> String {
        Self::to_scientific(v, conf::defaults().scientific_precision)
    }

    /// 1234.5 with precision 2 -> "1.23e+3"
    pub fn to_scientific(v: f64, precision: usize) -> String {
        let s = format!("{:.*e}", precision, v);
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        }
    }

    pub fn from_scientific(s: &str) -> Option<f64> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        s.parse::<f64>().ok()
    }

    /// Spell `n` in one of the digit scripts; an unknown system name gives the plain decimal string.
    pub fn to_numeral_system<T: std::fmt::Display>(n: T, system: &str) -> String {
        let plain = n.to_string();
        match NumeralSystem::from_name(system) {
            Some(system) => Numeral::to_system(&plain, system),
            None => plain,
        }
    }

    /// `decimals` fraction digits and `,` thousands grouping
    pub fn number(v: f64, decimals: usize) -> String {
        let s = format!("{:.*}", decimals, v.abs());
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i.to_string(), Some(f.to_string())),
            None => (s.clone(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let sign = if v < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0') { "-" } else { "" };
        match frac_part {
            Some(f) => format!("{}{}.{}", sign, grouped, f),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// zero padded to `width`, sign included in the width
    pub fn pad(n: i64, width: usize) -> String {
        format!("{:0width$}", n, width = width)
    }

    /// "1.50" -> "1.5", "2.00" -> "2", "120" -> "120"
    pub fn trim_zeros(s: &str) -> String {
        if !s.contains('.') {
            return s.to_string();
        }
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            return "0".to_string();
        }
        trimmed.to_string()
    }
}

/// Divide `value` by `base` until it drops below `base` or `max_exp` is reached.
fn scale(value: f64, base: f64, max_exp: usize) -> (f64, usize) {
    let mut mantissa = value;
    let mut exp = 0;
    while mantissa >= base && exp < max_exp {
        mantissa /= base;
        exp += 1;
    }
    (mantissa, exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate() {
        assert_eq!(Fmt::abbreviate(1500.0), "1.5K");
        assert_eq!(Fmt::abbreviate(2_500_000.0), "2.5M");
        assert_eq!(Fmt::abbreviate(999.0), "999");
        assert_eq!(Fmt::abbreviate(0.0), "0");
        assert_eq!(Fmt::abbreviate(1000.0), "1K");
        assert_eq!(Fmt::abbreviate(-1500.0), "-1.5K");
        assert_eq!(Fmt::abbreviate_p(1_234_567_890.0, 2), "1.23B");
        assert_eq!(Fmt::abbreviate_p(3.2e15, 1), "3.2Q");
        assert_eq!(Fmt::abbreviate_p(5e18, 0), "5000Q");
        assert_eq!(Fmt::abbreviate_p(999_999.0, 1), "1M");
        assert_eq!(Fmt::abbreviate_p(999.96, 1), "1K");
        assert_eq!(Fmt::abbreviate_p(-999_999.0, 1), "-1M");
        assert_eq!(Fmt::abbreviate_p(999_949.0, 1), "999.9K");
        assert_eq!(Fmt::humanize(1500.0), Fmt::shorten(1500.0));
    }

    #[test]
    fn test_file_size() {
        assert_eq!(Fmt::file_size(500), "500 B");
        assert_eq!(Fmt::file_size(1500), "1.5 KB");
        assert_eq!(Fmt::file_size(0), "0 B");
        assert_eq!(Fmt::file_size(-1500), "-1.5 KB");
        assert_eq!(Fmt::bytes(2_000_000), "2 MB");
        assert_eq!(Fmt::file_size_p(1536, 2, true), "1.5 KiB");
        assert_eq!(Fmt::file_size_p(1024 * 1024 * 5, 1, true), "5 MiB");
        assert_eq!(Fmt::file_size_p(1023, 2, true), "1023 B");
        assert_eq!(Fmt::file_size_p(i64::MAX, 2, true), "8 EiB");
    }

    #[test]
    fn test_currency() {
        assert_eq!(Fmt::currency(1234.5, "USD", "en_US"), "$1,234.50");
        assert_eq!(Fmt::currency(-1234.5, "usd", "en"), "-$1,234.50");
        assert_eq!(Fmt::currency(1234.5, "EUR", "fr_FR"), "1,234.50 €");
        assert_eq!(Fmt::currency(50000.0, "IRR", "fa_IR"), "50,000.00 ﷼");
        assert_eq!(Fmt::currency(10.0, "CHF", "en_GB"), "CHF 10.00");
        assert_eq!(Fmt::currency(10.0, "XYZ", "de"), "10.00 XYZ");
        assert_eq!(Fmt::currency(-0.001, "USD", "en"), "$0.00");
        assert_eq!(Fmt::currency_d(5.0), "$5.00");
    }

    #[test]
    fn test_number_grouping() {
        assert_eq!(Fmt::number(1234567.891, 2), "1,234,567.89");
        assert_eq!(Fmt::number(999.0, 0), "999");
        assert_eq!(Fmt::number(-1000.0, 1), "-1,000.0");
        assert_eq!(Fmt::number(100000.0, 0), "100,000");
    }

    #[test]
    fn test_percentage_and_ordinal() {
        assert_eq!(Fmt::percentage(12.3456, 2, true), "12.35%");
        assert_eq!(Fmt::percentage(12.3456, 1, false), "12.3");
        assert_eq!(Fmt::percentage_d(50.0), "50.00%");

        let expect = [(1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th"), (11, "11th"), (12, "12th"), (13, "13th"), (21, "21st"), (22, "22nd"), (101, "101st"), (111, "111th"), (112, "112th"), (0, "0th"), (-1, "-1st")];
        for (n, s) in expect {
            assert_eq!(Fmt::ordinal(n), s);
        }
    }

    #[test]
    fn test_scientific() {
        assert_eq!(Fmt::to_scientific(1234.5, 2), "1.23e+3");
        assert_eq!(Fmt::to_scientific(0.000123, 1), "1.2e-4");
        assert_eq!(Fmt::to_scientific(0.0, 2), "0.00e+0");
        assert_eq!(Fmt::to_scientific_d(-5000.0), "-5.00e+3");
        assert_eq!(Fmt::from_scientific("1.23e+3"), Some(1230.0));
        assert_eq!(Fmt::from_scientific(" 2E-2 "), Some(0.02));
        assert_eq!(Fmt::from_scientific("abc"), None);
        assert_eq!(Fmt::from_scientific(""), None);
    }

    #[test]
    fn test_numeral_system() {
        assert_eq!(Fmt::to_numeral_system(2024, "persian"), "۲۰۲۴");
        assert_eq!(Fmt::to_numeral_system(-15, "devanagari"), "-१५");
        assert_eq!(Fmt::to_numeral_system(15, "chinese"), "一五");
        assert_eq!(Fmt::to_numeral_system(15, "arabic"), "15");
        assert_eq!(Fmt::to_numeral_system(15, "roman"), "15");
    }

    #[test]
    fn test_pad_and_trim() {
        assert_eq!(Fmt::pad(42, 5), "00042");
        assert_eq!(Fmt::pad(-42, 5), "-0042");
        assert_eq!(Fmt::trim_zeros("1.50"), "1.5");
        assert_eq!(Fmt::trim_zeros("2.00"), "2");
        assert_eq!(Fmt::trim_zeros("120"), "120");
        assert_eq!(Fmt::trim_zeros("-0.00"), "0");
    }
}
