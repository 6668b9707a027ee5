use lazy_static::lazy_static;
use regex::Regex;

use crate::tools::numeral::Numeral;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").expect("digit run pattern");
    static ref NUMERIC: Regex = Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("numeric pattern");
}

/// characters dropped by `parse` before the numeric check
const FORMATTING_CHARS: [char; 16] = [',', '_', '\'', '%', '$', '€', '£', '¥', '₹', '﷼', '₽', '₩', '₺', '৳', '₦', '₫'];

/// Number extraction from free text.
pub struct Extract;

impl Extract {
    /// first maximal run of ASCII digits
    ///
    /// # 示例
    /// ```
    /// use numkit::tools::extract::Extract;
    /// assert_eq!(Extract::first_number("abc123def456"), Some("123".to_string()));
    /// ```
    pub fn first_number(s: &str) -> Option<String> {
        DIGIT_RUN.find(s).map(|m| m.as_str().to_string())
    }

    pub fn all_numbers(s: &str) -> Vec<String> {
        DIGIT_RUN.find_iter(s).map(|m| m.as_str().to_string()).collect()
    }

    pub fn last_number(s: &str) -> Option<String> {
        DIGIT_RUN.find_iter(s).last().map(|m| m.as_str().to_string())
    }

    /// Parse a human formatted number: "$1,234.50" -> 1234.5, "(42)" -> -42, "۱۲%" -> 12.
    /// None when the cleaned text is not numeric.
    pub fn parse(s: &str) -> Option<f64> {
        let english = Numeral::to_english(s.trim());
        let mut cleaned: String =
            english.chars().filter(|c| !c.is_whitespace() && !FORMATTING_CHARS.contains(c)).collect();

        let mut negative = false;
        if cleaned.len() > 2 && cleaned.starts_with('(') && cleaned.ends_with(')') {
            negative = true;
            cleaned = cleaned[1..cleaned.len() - 1].to_string();
        }

        if !NUMERIC.is_match(&cleaned) {
            tracing::debug!("not numeric after cleanup: {:?} -> {:?}", s, cleaned);
            return None;
        }

        let value = cleaned.parse::<f64>().ok()?;
        Some(if negative { -value } else { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_numbers() {
        let s = "abc123def456";
        assert_eq!(Extract::first_number(s), Some("123".to_string()));
        assert_eq!(Extract::last_number(s), Some("456".to_string()));
        assert_eq!(Extract::all_numbers(s), vec!["123", "456"]);
        assert_eq!(Extract::first_number("no digits"), None);
        assert_eq!(Extract::last_number(""), None);
        assert!(Extract::all_numbers("none").is_empty());
        assert_eq!(Extract::all_numbers("v1.25 build 007"), vec!["1", "25", "007"]);
    }

    #[test]
    fn test_find_ignores_other_scripts() {
        assert_eq!(Extract::first_number("۱۲۳ and 45"), Some("45".to_string()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Extract::parse("1,234.50"), Some(1234.5));
        assert_eq!(Extract::parse("$ 1,000"), Some(1000.0));
        assert_eq!(Extract::parse("(42)"), Some(-42.0));
        assert_eq!(Extract::parse("($1,200.00)"), Some(-1200.0));
        assert_eq!(Extract::parse("45%"), Some(45.0));
        assert_eq!(Extract::parse("-3.5"), Some(-3.5));
        assert_eq!(Extract::parse("1e3"), Some(1000.0));
        assert_eq!(Extract::parse("۱۲۳"), Some(123.0));
        assert_eq!(Extract::parse("1 000 000"), Some(1_000_000.0));
        assert_eq!(Extract::parse("abc"), None);
        assert_eq!(Extract::parse(""), None);
        assert_eq!(Extract::parse("()"), None);
        assert_eq!(Extract::parse("1.2.3"), None);
        assert_eq!(Extract::parse("inf"), None);
    }
}
