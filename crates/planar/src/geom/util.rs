//! Epsilon-fenced comparisons for the floating-point edges of the kernel.
//!
//! Integer predicates never come through here. These helpers exist for the
//! few places where lengths, ratios, and projections are computed in `f64`,
//! so that every tolerance in the crate is the same one.

/// Tolerance for floating-point comparisons, in grid units.
pub const EPS: f64 = 1e-6;

/// `a > b` beyond tolerance.
#[inline]
pub fn greater(a: f64, b: f64) -> bool {
    a - b > EPS
}

/// `a < b` beyond tolerance.
#[inline]
pub fn smaller(a: f64, b: f64) -> bool {
    b - a > EPS
}

/// `a == b` within tolerance.
#[inline]
pub fn equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

/// `a >= b` up to tolerance.
#[inline]
pub fn greater_or_equal(a: f64, b: f64) -> bool {
    a - b > -EPS
}

/// `a <= b` up to tolerance.
#[inline]
pub fn smaller_or_equal(a: f64, b: f64) -> bool {
    b - a > -EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_respect_tolerance() {
        assert!(!greater(1.0 + EPS / 2.0, 1.0));
        assert!(greater(1.0 + EPS * 2.0, 1.0));
        assert!(smaller(1.0, 1.0 + EPS * 2.0));
        assert!(equal(1.0, 1.0 + EPS / 2.0));
        assert!(greater_or_equal(1.0 - EPS / 2.0, 1.0));
        assert!(smaller_or_equal(1.0 + EPS / 2.0, 1.0));
    }

    #[test]
    fn nan_compares_false() {
        assert!(!greater(f64::NAN, 0.0));
        assert!(!smaller(f64::NAN, 0.0));
        assert!(!greater_or_equal(f64::NAN, 0.0));
        assert!(!smaller_or_equal(f64::NAN, 0.0));
    }
}
