use crate::conf;

/// Interpolation, range mapping, clamping and wrapping.
pub struct Interp;

impl Interp {
    /// Linear remap of `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
    /// A zero-width source range is not guarded and yields inf or NaN.
    pub fn map(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
        (value - from_min) * (to_max - to_min) / (from_max - from_min) + to_min
    }

    /// map into [0, 1]
    pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
        Self::map(value, min, max, 0.0, 1.0)
    }

    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }

    /// t such that lerp(a, b, t) == value; unguarded when a == b
    pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
        (value - a) / (b - a)
    }

    /// bounds are swapped when given in reverse
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        value.max(low).min(high)
    }

    /// remainder that is never negative for a positive `n`
    pub fn modulo(a: f64, n: f64) -> f64 {
        a.rem_euclid(n)
    }

    /// integer variant of `modulo`; None when n is 0
    pub fn modulo_int(a: i64, n: i64) -> Option<i64> {
        a.checked_rem_euclid(n)
    }

    /// Wrap `value` periodically into `[min, max)`. An empty range returns `min`.
    pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
        let width = max - min;
        if width <= 0.0 {
            return min;
        }
        min + (value - min).rem_euclid(width)
    }

    /// -1, 0 or 1; NaN stays NaN
    pub fn sign(value: f64) -> f64 {
        if value > 0.0 {
            1.0
        } else if value < 0.0 {
            -1.0
        } else {
            value
        }
    }

    pub fn approximately(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() <= epsilon.abs()
    }

    /// approximately with the configured epsilon
    pub fn approximately_d(a: f64, b: f64) -> bool {
        Self::approximately(a, b, conf::defaults().epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map() {
        assert_eq!(Interp::map(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(Interp::map(0.0, -1.0, 1.0, 0.0, 255.0), 127.5);
        assert_eq!(Interp::map(5.0, 10.0, 0.0, 0.0, 1.0), 0.5);
        assert!(Interp::map(1.0, 5.0, 5.0, 0.0, 1.0).is_infinite());
        assert!(Interp::map(5.0, 5.0, 5.0, 0.0, 1.0).is_nan());
        assert_eq!(Interp::normalize(25.0, 0.0, 100.0), 0.25);
    }

    #[test]
    fn test_lerp_clamp() {
        assert_eq!(Interp::lerp(0.0, 10.0, 0.3), 3.0);
        assert_eq!(Interp::lerp(10.0, 20.0, 1.5), 25.0);
        assert_eq!(Interp::inverse_lerp(10.0, 20.0, 15.0), 0.5);
        assert_eq!(Interp::clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(Interp::clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(Interp::clamp(5.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn test_modulo_wrap() {
        assert_eq!(Interp::modulo(-1.0, 5.0), 4.0);
        assert_eq!(Interp::modulo(7.0, 5.0), 2.0);
        assert_eq!(Interp::modulo_int(-7, 3), Some(2));
        assert_eq!(Interp::modulo_int(-7, 0), None);
        assert_eq!(Interp::wrap(370.0, 0.0, 360.0), 10.0);
        assert_eq!(Interp::wrap(-10.0, 0.0, 360.0), 350.0);
        assert_eq!(Interp::wrap(360.0, 0.0, 360.0), 0.0);
        assert_eq!(Interp::wrap(5.0, 1.0, 4.0), 2.0);
        assert_eq!(Interp::wrap(5.0, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_sign_approx() {
        assert_eq!(Interp::sign(-3.5), -1.0);
        assert_eq!(Interp::sign(0.0), 0.0);
        assert_eq!(Interp::sign(2.0), 1.0);
        assert!(Interp::sign(f64::NAN).is_nan());
        assert!(Interp::approximately(0.1 + 0.2, 0.3, 1e-9));
        assert!(!Interp::approximately(1.0, 1.1, 0.01));
        assert!(Interp::approximately_d(0.1 + 0.2, 0.3));
    }
}
