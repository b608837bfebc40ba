// Standard normal distribution helpers shared by every pricing formula.
// Stateless free functions: the distribution is always N(0, 1), so there is
// no object to construct or share.

use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function Φ(x).
///
/// Computed as 0.5 * [1 + erf(x / sqrt(2))] via `libm::erf`, accurate to
/// better than 1e-10 over the practically relevant domain. Deep tails
/// saturate to exactly 0.0 / 1.0 rather than producing NaN.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}

/// Standard normal probability density function φ(x) = e^(-x²/2) / sqrt(2π).
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use statrs::distribution::{Continuous, ContinuousCDF, Normal};

    #[test]
    fn cdf_matches_reference_on_core_domain() {
        let reference = Normal::new(0.0, 1.0).unwrap();

        // 0.01-wide grid over [-10, 10]
        for i in -1000..=1000 {
            let x = i as f64 / 100.0;
            assert_abs_diff_eq!(norm_cdf(x), reference.cdf(x), epsilon = 1e-10);
        }
    }

    #[test]
    fn cdf_saturates_in_tails() {
        assert_eq!(norm_cdf(-40.0), 0.0);
        assert_eq!(norm_cdf(40.0), 1.0);
        assert!(norm_cdf(f64::NEG_INFINITY) == 0.0);
        assert!(norm_cdf(f64::INFINITY) == 1.0);
    }

    #[test]
    fn cdf_is_symmetric_around_zero() {
        assert_eq!(norm_cdf(0.0), 0.5);
        for &x in &[0.1, 0.5, 1.0, 2.33, 5.0] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn pdf_matches_reference() {
        let reference = Normal::new(0.0, 1.0).unwrap();

        for i in -500..=500 {
            let x = i as f64 / 50.0;
            assert_abs_diff_eq!(norm_pdf(x), reference.pdf(x), epsilon = 1e-14);
        }

        // Peak value is 1/sqrt(2π)
        assert_abs_diff_eq!(norm_pdf(0.0), 0.3989422804014327, epsilon = 1e-15);
    }
}
