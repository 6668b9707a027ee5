use crate::erx::{Layouted, ResultE};

/// Arithmetic wrappers.
pub struct Arith;

impl Arith {
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    pub fn power(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    /// Fails with an ARGS error when `b` is zero.
    pub fn divide(a: f64, b: f64) -> ResultE<f64> {
        if b == 0.0 {
            tracing::warn!("divide rejected: {} / 0", a);
            return Err(Layouted::argument("ARIT", "DIVZ").erx("division by zero").add_extra("dividend", &a.to_string()));
        }
        Ok(a / b)
    }

    /// Remainder with the sign of the dividend; zero divisor is an ARGS error.
    /// See `Interp::modulo` for the always non-negative variant.
    pub fn modulo(a: i64, b: i64) -> ResultE<i64> {
        if b == 0 {
            tracing::warn!("modulo rejected: {} % 0", a);
            return Err(Layouted::argument("ARIT", "MODZ").erx("modulo by zero").add_extra("dividend", &a.to_string()));
        }
        Ok(a.wrapping_rem(b))
    }

    pub fn increment(n: &mut i64) {
        *n = n.wrapping_add(1);
    }

    pub fn decrement(n: &mut i64) {
        *n = n.wrapping_sub(1);
    }

    /// `percent` percent of `total`
    pub fn percent_of(percent: f64, total: f64) -> f64 {
        total * percent / 100.0
    }

    /// Relative change from `from` to `to`, in percent.
    pub fn percent_change(from: f64, to: f64) -> ResultE<f64> {
        if from == 0.0 {
            return Err(Layouted::argument("ARIT", "PCTZ").erx("percent change from zero").add_extra("to", &to.to_string()));
        }
        Ok((to - from) / from.abs() * 100.0)
    }

    pub fn round_to(v: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (v * factor).round() / factor
    }

    pub fn floor_to(v: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (v * factor).floor() / factor
    }

    pub fn ceil_to(v: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (v * factor).ceil() / factor
    }
}
