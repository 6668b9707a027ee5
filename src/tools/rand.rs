use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::erx::{emp, Layouted, ResultE};

/// Longest digit count whose range `[10^(L-1), 10^L - 1]` still fits in u64.
pub const MAX_DIGITS: u32 = 19;

pub const OTP_MIN: u32 = 100_000;
pub const OTP_MAX: u32 = 999_999;

/// Random number tools, backed by a ChaCha generator seeded from the OS entropy source.
pub struct Random;

impl Random {
    /// A fresh generator seeded from the operating system.
    /// Fails with a RAND error when the OS source is unavailable.
    pub fn secure() -> ResultE<StdRng> {
        StdRng::try_from_os_rng().map_err(|e| {
            tracing::error!("os random source unavailable: {}", e);
            let mut erx = emp(e);
            *erx.code_mut() = Layouted::random("RAND", "OSRN");
            erx
        })
    }

    /// Random integer with a digit length picked uniformly in `[min_digits, max_digits]`.
    /// `max_digits` defaults to `min_digits`.
    ///
    /// # 示例
    /// ```
    /// use numkit::tools::rand::Random;
    /// let v = Random::integer(3, None).unwrap();
    /// assert!((100..=999).contains(&v));
    /// ```
    pub fn integer(min_digits: u32, max_digits: Option<u32>) -> ResultE<u64> {
        let max_digits = max_digits.unwrap_or(min_digits);
        validate_digits(min_digits, max_digits)?;

        let mut rng = Self::secure()?;
        let len = rng.random_range(min_digits..=max_digits);
        let (low, high) = digit_bounds(len);
        Ok(rng.random_range(low..=high))
    }

    /// six digit one time password
    pub fn otp() -> ResultE<u32> {
        let mut rng = Self::secure()?;
        Ok(rng.random_range(OTP_MIN..=OTP_MAX))
    }

    /// Numeric code of exactly `len` characters, leading zeros allowed.
    pub fn otp_digits(len: u32) -> ResultE<String> {
        validate_digits(len, len)?;
        let mut rng = Self::secure()?;
        Ok((0..len).map(|_| char::from(b'0' + rng.random_range(0..10u8))).collect())
    }

    /// inclusive on both ends
    pub fn range(min: i64, max: i64) -> ResultE<i64> {
        if min > max {
            tracing::warn!("random range rejected: min {} > max {}", min, max);
            return Err(Layouted::argument("RAND", "RNGE")
                .erx("min must not exceed max")
                .add_extra("min", &min.to_string())
                .add_extra("max", &max.to_string()));
        }
        let mut rng = Self::secure()?;
        Ok(rng.random_range(min..=max))
    }

    /// half-open `[min, max)`; returns `min` when the range is empty.
    /// A span `max - min` that is not finite is an ARGS error.
    pub fn float(min: f64, max: f64) -> ResultE<f64> {
        if !(min < max) {
            return Ok(min);
        }
        if !(max - min).is_finite() {
            tracing::warn!("random float rejected: span of [{}, {}) is not finite", min, max);
            return Err(Layouted::argument("RAND", "SPAN")
                .erx("float range span must be finite")
                .add_extra("min", &min.to_string())
                .add_extra("max", &max.to_string()));
        }
        let mut rng = Self::secure()?;
        Ok(rng.random_range(min..max))
    }

    pub fn boolean() -> ResultE<bool> {
        let mut rng = Self::secure()?;
        Ok(rng.random())
    }
}

fn validate_digits(min_digits: u32, max_digits: u32) -> ResultE<()> {
    let detail = if min_digits < 1 {
        Some(("MIND", "min digits must be at least 1"))
    } else if max_digits < min_digits {
        Some(("MAXD", "max digits must not be less than min digits"))
    } else if max_digits > MAX_DIGITS {
        Some(("OVER", "max digits exceeds 19"))
    } else {
        None
    };

    match detail {
        None => Ok(()),
        Some((code, message)) => {
            tracing::warn!("random digits rejected: min {} max {}: {}", min_digits, max_digits, message);
            Err(Layouted::argument("RAND", code)
                .erx(message)
                .add_extra("min_digits", &min_digits.to_string())
                .add_extra("max_digits", &max_digits.to_string()))
        },
    }
}

/// `(10^(len-1), 10^len - 1)`, len must be in 1..=19
fn digit_bounds(len: u32) -> (u64, u64) {
    (10u64.pow(len - 1), 10u64.pow(len) - 1)
}
