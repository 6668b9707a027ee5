use crate::tools::numeral::Numeral;

/// Number predicates and comparators.
pub struct Is;

impl Is {
    pub fn even(n: i64) -> bool {
        n & 1 == 0
    }

    pub fn odd(n: i64) -> bool {
        n & 1 == 1
    }

    pub fn not_even(n: i64) -> bool {
        !Self::even(n)
    }

    pub fn not_odd(n: i64) -> bool {
        !Self::odd(n)
    }

    pub fn greater_than<T: PartialOrd>(a: T, b: T) -> bool {
        a > b
    }

    pub fn less_than<T: PartialOrd>(a: T, b: T) -> bool {
        a < b
    }

    /// inclusive on both bounds
    pub fn between<T: PartialOrd>(value: T, min: T, max: T) -> bool {
        value >= min && value <= max
    }

    pub fn positive(v: f64) -> bool {
        v > 0.0
    }

    pub fn negative(v: f64) -> bool {
        v < 0.0
    }

    pub fn zero(v: f64) -> bool {
        v == 0.0
    }

    pub fn integer(v: f64) -> bool {
        v.is_finite() && v.fract() == 0.0
    }

    pub fn finite(v: f64) -> bool {
        v.is_finite()
    }

    /// false when `b` is zero
    pub fn divisible_by(a: i64, b: i64) -> bool {
        b != 0 && a.wrapping_rem(b) == 0
    }

    /// Whether `s` parses as a number, digits of any known script accepted.
    pub fn numeric(s: &str) -> bool {
        let s = Numeral::to_english(s.trim());
        !s.is_empty() && s.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
    }

    /// Trial division over `6k ± 1` up to √n.
    pub fn prime(n: i64) -> bool {
        if n <= 1 {
            return false;
        }
        if n <= 3 {
            return true;
        }
        if n % 2 == 0 || n % 3 == 0 {
            return false;
        }
        let mut i: i64 = 5;
        while i <= n / i {
            if n % i == 0 || n % (i + 2) == 0 {
                return false;
            }
            i += 6;
        }
        true
    }
}
