/// Trigonometry, angles in radians unless the name says otherwise.
pub struct Trig;

/// Logarithms, roots and powers.
pub struct Log;

impl Trig {
    pub fn sin(x: f64) -> f64 {
        x.sin()
    }

    pub fn cos(x: f64) -> f64 {
        x.cos()
    }

    pub fn tan(x: f64) -> f64 {
        x.tan()
    }

    pub fn asin(x: f64) -> f64 {
        x.asin()
    }

    pub fn acos(x: f64) -> f64 {
        x.acos()
    }

    pub fn atan(x: f64) -> f64 {
        x.atan()
    }

    pub fn atan2(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }

    pub fn sinh(x: f64) -> f64 {
        x.sinh()
    }

    pub fn cosh(x: f64) -> f64 {
        x.cosh()
    }

    pub fn tanh(x: f64) -> f64 {
        x.tanh()
    }

    pub fn hypot(x: f64, y: f64) -> f64 {
        x.hypot(y)
    }

    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees.to_radians()
    }

    pub fn rad_to_deg(radians: f64) -> f64 {
        radians.to_degrees()
    }

    pub fn sin_deg(degrees: f64) -> f64 {
        degrees.to_radians().sin()
    }

    pub fn cos_deg(degrees: f64) -> f64 {
        degrees.to_radians().cos()
    }
}

impl Log {
    pub fn ln(x: f64) -> f64 {
        x.ln()
    }

    pub fn log10(x: f64) -> f64 {
        x.log10()
    }

    pub fn log2(x: f64) -> f64 {
        x.log2()
    }

    /// logarithm of `x` in an arbitrary base
    pub fn log(x: f64, base: f64) -> f64 {
        x.log(base)
    }

    pub fn exp(x: f64) -> f64 {
        x.exp()
    }

    pub fn sqrt(x: f64) -> f64 {
        x.sqrt()
    }

    pub fn cbrt(x: f64) -> f64 {
        x.cbrt()
    }

    pub fn pow(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    /// n-th root, negative radicand allowed for odd integer n
    pub fn root(x: f64, n: f64) -> f64 {
        if x < 0.0 && n.fract() == 0.0 && (n as i64) % 2 != 0 {
            return -(-x).powf(1.0 / n);
        }
        x.powf(1.0 / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_trig() {
        assert!(close(Trig::sin(PI / 2.0), 1.0));
        assert!(close(Trig::cos(0.0), 1.0));
        assert!(close(Trig::tan(PI / 4.0), 1.0));
        assert!(close(Trig::asin(1.0), PI / 2.0));
        assert!(close(Trig::acos(1.0), 0.0));
        assert!(close(Trig::atan2(1.0, 1.0), PI / 4.0));
        assert!(close(Trig::hypot(3.0, 4.0), 5.0));
        assert!(close(Trig::deg_to_rad(180.0), PI));
        assert!(close(Trig::rad_to_deg(PI), 180.0));
        assert!(close(Trig::sin_deg(30.0), 0.5));
        assert!(Trig::asin(2.0).is_nan());
    }

    #[test]
    fn test_logs() {
        assert!(close(Log::ln(std::f64::consts::E), 1.0));
        assert!(close(Log::log10(1000.0), 3.0));
        assert!(close(Log::log2(8.0), 3.0));
        assert!(close(Log::log(81.0, 3.0), 4.0));
        assert!(close(Log::sqrt(16.0), 4.0));
        assert!(close(Log::cbrt(-27.0), -3.0));
        assert!(close(Log::root(-32.0, 5.0), -2.0));
        assert!(Log::root(-16.0, 4.0).is_nan());
        assert_eq!(Log::ln(0.0), f64::NEG_INFINITY);
    }
}
