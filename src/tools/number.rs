use std::str::FromStr;

use crate::tools::numeral::Numeral;

// String Convert
// digits of any supported script are accepted, surrounding whitespace ignored
pub struct StrC;

impl StrC {
    pub fn i(value: &str) -> i64 {
        Self::i_d(value, 0)
    }

    pub fn i_d(value: &str, d: i64) -> i64 {
        i64::from_str_radix(Numeral::to_english(value.trim()).as_str(), 10).unwrap_or(d)
    }

    pub fn f(value: &str) -> f64 {
        Self::f_d(value, 0.0)
    }

    pub fn f_d(value: &str, d: f64) -> f64 {
        f64::from_str(Numeral::to_english(value.trim()).as_str()).unwrap_or(d)
    }
}
