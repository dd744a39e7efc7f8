//! Normal distribution CDF, interval probabilities and quantiles.

use crate::error::{Result, ToolkitError};
use crate::params::NormalParams;
use crate::traits::ContinuousCdf;
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;
use tracing::debug;

impl ContinuousCdf for NormalParams {
    fn cdf(&self, x: f64) -> f64 {
        if x == f64::NEG_INFINITY {
            return 0.0;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        // Φ(z) = erfc(-z / √2) / 2
        0.5 * erfc(-self.z_score(x) / SQRT_2)
    }

    fn survival(&self, x: f64) -> f64 {
        if x == f64::NEG_INFINITY {
            return 1.0;
        }
        if x == f64::INFINITY {
            return 0.0;
        }
        0.5 * erfc(self.z_score(x) / SQRT_2)
    }
}

impl NormalParams {
    /// Inverse CDF at `q`.
    ///
    /// # Errors
    /// Returns [`ToolkitError::InvalidQuantile`] unless `0 < q < 1`.
    pub fn quantile(&self, q: f64) -> Result<f64> {
        if !(q > 0.0 && q < 1.0) {
            return Err(ToolkitError::invalid_quantile(q));
        }
        // Φ⁻¹(q) = -√2 · erfc⁻¹(2q)
        Ok(self.mean() - self.std_dev() * SQRT_2 * erfc_inv(2.0 * q))
    }
}

/// `P(X <= x)` for `X ~ N(mean, std_dev)`.
///
/// # Errors
/// Returns an error if `mean` is not finite, `std_dev` is not positive, or
/// `x` is NaN.
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> Result<f64> {
    let params = NormalParams::new(mean, std_dev)?;
    if x.is_nan() {
        return Err(ToolkitError::non_finite("x", x));
    }
    Ok(params.cdf(x))
}

/// `P(low < X <= high)` for `X ~ N(mean, std_dev)`.
///
/// Infinite bounds are allowed, so `(-inf, +inf)` yields 1.
///
/// # Errors
/// Returns an error if `std_dev` is not positive, `mean` is not finite,
/// either bound is NaN, or `low > high`.
///
/// # Example
/// ```rust
/// use prob_toolkit::normal_interval_probability;
///
/// // Golden retrievers weigh 64.43 ± 2.99 lb: share between 62 and 66 lb
/// let p = normal_interval_probability(64.43, 2.99, 62.0, 66.0).unwrap();
/// assert!((p - 0.4920450147062894).abs() < 1e-6);
/// ```
pub fn normal_interval_probability(mean: f64, std_dev: f64, low: f64, high: f64) -> Result<f64> {
    let params = NormalParams::new(mean, std_dev)?;
    if low.is_nan() || high.is_nan() || low > high {
        return Err(ToolkitError::invalid_interval(low, high));
    }
    let probability = params.interval_probability(low, high);
    debug!(mean, std_dev, low, high, probability, "normal interval");
    Ok(probability)
}

/// Value below which a `quantile` share of `N(mean, std_dev)` falls.
///
/// # Errors
/// Returns an error if `std_dev` is not positive, `mean` is not finite, or
/// `quantile` is outside `(0, 1)`.
///
/// # Example
/// ```rust
/// use prob_toolkit::normal_quantile;
///
/// let weight = normal_quantile(64.43, 2.99, 0.95).unwrap();
/// assert!((weight - 69.3481123445849).abs() < 1e-6);
/// ```
pub fn normal_quantile(mean: f64, std_dev: f64, quantile: f64) -> Result<f64> {
    let params = NormalParams::new(mean, std_dev)?;
    let value = params.quantile(quantile)?;
    debug!(mean, std_dev, quantile, value, "normal quantile");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_golden_retriever_interval() {
        let p = normal_interval_probability(64.43, 2.99, 62.0, 66.0).unwrap();
        assert_relative_eq!(p, 0.492_045_014_706_289_4, max_relative = 1e-9);
    }

    #[test]
    fn test_golden_retriever_quantile() {
        let weight = normal_quantile(64.43, 2.99, 0.95).unwrap();
        assert_relative_eq!(weight, 69.348_112_344_584_9, max_relative = 1e-10);
    }

    #[test]
    fn test_standard_normal_landmarks() {
        let standard = NormalParams::standard();
        assert_relative_eq!(standard.cdf(0.0), 0.5, max_relative = 1e-15);
        assert_relative_eq!(standard.cdf(1.96), 0.975_002_104_851_780, max_relative = 1e-12);
        assert_relative_eq!(standard.quantile(0.5).unwrap(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(
            standard.quantile(0.975).unwrap(),
            1.959_963_984_540_054,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_infinite_bounds() {
        let p = normal_interval_probability(3.0, 2.0, f64::NEG_INFINITY, f64::INFINITY).unwrap();
        assert_relative_eq!(p, 1.0);
        let upper = normal_interval_probability(3.0, 2.0, 3.0, f64::INFINITY).unwrap();
        assert_relative_eq!(upper, 0.5, max_relative = 1e-15);
    }

    #[test]
    fn test_symmetric_interval() {
        let left = normal_interval_probability(10.0, 3.0, 7.0, 10.0).unwrap();
        let right = normal_interval_probability(10.0, 3.0, 10.0, 13.0).unwrap();
        assert_relative_eq!(left, right, max_relative = 1e-12);
    }

    #[test]
    fn test_upper_tail_matches_lower_tail() {
        let lower = normal_interval_probability(0.0, 1.0, -9.0, -8.0).unwrap();
        let upper = normal_interval_probability(0.0, 1.0, 8.0, 9.0).unwrap();
        assert_relative_eq!(upper, lower, max_relative = 1e-10);
        // Q(8) - Q(9)
        assert_relative_eq!(upper, 6.219_832e-16, max_relative = 1e-6);

        let standard = NormalParams::standard();
        assert_relative_eq!(
            standard.survival(8.0),
            6.220_960_574_271_784e-16,
            max_relative = 1e-10
        );
        assert_relative_eq!(standard.survival(8.0), standard.cdf(-8.0), max_relative = 1e-14);
        assert_relative_eq!(standard.survival(f64::NEG_INFINITY), 1.0);
        assert_relative_eq!(standard.survival(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_quantile_round_trip() {
        for q in [0.001, 0.05, 0.3, 0.5, 0.77, 0.999] {
            let x = normal_quantile(-4.0, 0.5, q).unwrap();
            let p = normal_interval_probability(-4.0, 0.5, f64::NEG_INFINITY, x).unwrap();
            assert_relative_eq!(p, q, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        for result in [
            normal_interval_probability(0.0, 0.0, -1.0, 1.0),
            normal_interval_probability(0.0, -1.0, -1.0, 1.0),
            normal_interval_probability(0.0, 1.0, 1.0, -1.0),
            normal_interval_probability(0.0, 1.0, f64::NAN, 1.0),
            normal_quantile(0.0, 1.0, 0.0),
            normal_quantile(0.0, 1.0, 1.0),
            normal_quantile(0.0, 1.0, f64::NAN),
            normal_quantile(0.0, 0.0, 0.5),
            normal_cdf(f64::NAN, 0.0, 1.0),
        ] {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }
}
