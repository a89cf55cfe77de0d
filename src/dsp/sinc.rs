//! Normalized sinc.

use std::f64::consts::PI;

/// Normalized sinc: `sin(πx) / (πx)`, with `sinc(0) = 1`.
///
/// Zero crossings fall on every non-zero integer, so `sinc(B·t)` has its
/// first nulls at `t = ±1/B` and a flat spectrum of width `B`.
///
/// # Example
/// ```
/// use shannon_demo::dsp::sinc::sinc;
/// assert_eq!(sinc(0.0), 1.0);
/// assert!(sinc(1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let arg = PI * x;
        arg.sin() / arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinc_at_zero_is_exactly_one() {
        assert_eq!(sinc(0.0), 1.0);
        assert_eq!(sinc(-0.0), 1.0);
    }

    #[test]
    fn sinc_nulls_on_integers() {
        for n in 1..20 {
            assert!(sinc(n as f64).abs() < 1e-12, "sinc({}) should vanish", n);
            assert!(sinc(-(n as f64)).abs() < 1e-12);
        }
    }

    #[test]
    fn sinc_is_even() {
        for &x in &[0.1, 0.5, 1.3, 7.25] {
            assert_eq!(sinc(x), sinc(-x));
        }
    }

    #[test]
    fn sinc_half() {
        // sin(π/2) / (π/2) = 2/π
        assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-12);
    }
}
