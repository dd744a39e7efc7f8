//! Beta distribution CDF and the posterior coin-bias check.
//!
//! Whole-number shapes, which is what coin counts produce, go through the
//! binomial identity `I_x(a, b) = P(Binomial(a + b - 1, x) >= a)` and reuse
//! the mode-outward binomial sums. Other shapes use the continued fraction
//! for the regularized incomplete beta function.

#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]

use crate::binomial::ln_pmf_raw;
use crate::error::{Result, ToolkitError};
use crate::params::{BetaParams, BinomialParams};
use crate::traits::ContinuousCdf;
use statrs::function::gamma::ln_gamma;
use tracing::{debug, warn};

/// Conventional threshold for "is this coin biased towards heads".
pub const FAIR_COIN_THRESHOLD: f64 = 0.5;

/// Largest `a + b` for which whole-number shapes map onto exact counts.
const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

/// Convergence tolerance of the continued fraction.
const CF_EPSILON: f64 = 1e-15;
/// Replaces zero denominators in the modified Lentz iteration.
const CF_TINY: f64 = 1e-300;

fn is_whole(value: f64) -> bool {
    value.fract() == 0.0
}

/// `ln(x^a (1 - x)^b / (a B(a, b)))`, the prefactor of the continued
/// fraction.
///
/// For whole shapes this equals `ln(pmf(a; a + b - 1, x) (1 - x))`, which
/// keeps full precision for very large counts.
fn ln_prefactor(a: f64, b: f64, x: f64) -> f64 {
    if is_whole(a) && is_whole(b) && a + b <= MAX_EXACT_COUNT {
        ln_pmf_raw(a as u64, (a + b - 1.0) as u64, x) + (-x).ln_1p()
    } else {
        let ln_beta = ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b);
        a * x.ln() + b * (-x).ln_1p() - ln_beta - a.ln()
    }
}

/// Continued fraction for `I_x(a, b)`, evaluated with the modified Lentz
/// method. Converges quickly for `x < (a + 1) / (a + b + 2)`.
fn continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    let max_iterations = (1000.0 + 100.0 * (a + b).sqrt()) as u64;
    let guard = |value: f64| if value.abs() < CF_TINY { CF_TINY } else { value };

    let mut c = 1.0;
    let mut d = 1.0 / guard(1.0 - (a + b) * x / (a + 1.0));
    let mut h = d;

    for m in 1..=max_iterations {
        let m = m as f64;
        let m2 = 2.0 * m;

        // even step
        let numerator = m * (b - m) * x / ((a - 1.0 + m2) * (a + m2));
        d = 1.0 / guard(1.0 + numerator * d);
        c = guard(1.0 + numerator / c);
        h *= d * c;

        // odd step
        let numerator = -(a + m) * (a + b + m) * x / ((a + m2) * (a + 1.0 + m2));
        d = 1.0 / guard(1.0 + numerator * d);
        c = guard(1.0 + numerator / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < CF_EPSILON {
            return h;
        }
    }

    warn!(a, b, x, max_iterations, "incomplete beta continued fraction did not converge");
    h
}

/// Regularized incomplete beta function `I_x(a, b)` for positive shapes.
///
/// `x` at or below 0 gives 0 and at or above 1 gives 1.
pub(crate) fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    if x < (a + 1.0) / (a + b + 2.0) {
        ln_prefactor(a, b, x).exp() * continued_fraction(a, b, x)
    } else {
        let y = 1.0 - x;
        1.0 - ln_prefactor(b, a, y).exp() * continued_fraction(b, a, y)
    }
}

impl BetaParams {
    /// `Binomial(alpha + beta - 1, x)` and the count `alpha`, when both shapes
    /// are whole numbers.
    fn binomial_identity(&self, x: f64) -> Option<(BinomialParams, u64)> {
        let (alpha, beta) = (self.alpha(), self.beta());
        if !(is_whole(alpha) && is_whole(beta) && alpha + beta <= MAX_EXACT_COUNT) {
            return None;
        }
        let trials = (alpha + beta - 1.0) as u64;
        BinomialParams::new(trials, x)
            .ok()
            .map(|binomial| (binomial, alpha as u64))
    }

    /// Probability mass above `threshold`, i.e. `1 - CDF(threshold)`.
    ///
    /// # Errors
    /// Returns an error unless `0 < threshold < 1`.
    pub fn probability_exceeds(&self, threshold: f64) -> Result<f64> {
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ToolkitError::invalid_parameter(
                "threshold",
                threshold,
                "must be in range (0, 1)",
            ));
        }
        Ok(self.survival(threshold).clamp(0.0, 1.0))
    }
}

impl ContinuousCdf for BetaParams {
    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        match self.binomial_identity(x) {
            Some((binomial, alpha)) => binomial.tail_probability(alpha),
            None => regularized_incomplete_beta(self.alpha(), self.beta(), x),
        }
    }

    fn survival(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        if x >= 1.0 {
            return 0.0;
        }
        match self.binomial_identity(x) {
            Some((binomial, alpha)) => binomial.cdf(alpha - 1),
            None => regularized_incomplete_beta(self.beta(), self.alpha(), 1.0 - x),
        }
    }
}

/// `P(X <= x)` for `X ~ Beta(alpha, beta)`; `x` outside `[0, 1]` is clamped.
///
/// # Errors
/// Returns an error unless both shapes are finite and positive and `x` is
/// not NaN.
///
/// # Example
/// ```rust
/// use prob_toolkit::beta::beta_cdf;
///
/// // Beta(1, 1) is uniform
/// assert!((beta_cdf(0.3, 1.0, 1.0).unwrap() - 0.3).abs() < 1e-12);
/// ```
pub fn beta_cdf(x: f64, alpha: f64, beta: f64) -> Result<f64> {
    let params = BetaParams::new(alpha, beta)?;
    if x.is_nan() {
        return Err(ToolkitError::non_finite("x", x));
    }
    Ok(params.cdf(x))
}

/// Posterior probability that a coin's true heads rate exceeds `threshold`
/// after observing `heads` and `tails`, under a `Beta(heads, tails)`
/// posterior.
///
/// # Errors
/// Returns an error if `heads` or `tails` is zero or `threshold` is outside
/// `(0, 1)`.
///
/// # Example
/// ```rust
/// use prob_toolkit::beta_bias_probability;
/// use prob_toolkit::beta::FAIR_COIN_THRESHOLD;
///
/// let p = beta_bias_probability(8, 2, FAIR_COIN_THRESHOLD).unwrap();
/// assert!((p - 0.98046875).abs() < 1e-12);
/// ```
pub fn beta_bias_probability(heads: u64, tails: u64, threshold: f64) -> Result<f64> {
    let posterior = BetaParams::from_counts(heads, tails)?;
    let probability = posterior.probability_exceeds(threshold)?;
    debug!(heads, tails, threshold, probability, "beta bias probability");
    Ok(probability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_rigged_coin() {
        let p = beta_bias_probability(8, 2, 0.5).unwrap();
        assert_relative_eq!(p, 0.980_468_75, max_relative = 1e-12);
    }

    #[test]
    fn test_balanced_counts_are_even() {
        for n in [1, 2, 5, 40, 1_000] {
            let p = beta_bias_probability(n, n, FAIR_COIN_THRESHOLD).unwrap();
            assert_relative_eq!(p, 0.5, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_balanced_counts_are_even_for_large_samples() {
        for n in [100_000, 1_000_000, 5_000_000] {
            let p = beta_bias_probability(n, n, FAIR_COIN_THRESHOLD).unwrap();
            assert_relative_eq!(p, 0.5, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_small_upper_tails_keep_precision() {
        // Beta(1, 200): P(X > 1/2) = (1/2)^200
        let p = beta_bias_probability(1, 200, 0.5).unwrap();
        assert_relative_eq!(p, 0.5_f64.powi(200), max_relative = 1e-12);

        // Beta(2, 60): P(X > 1/2) = P(Binomial(61, 1/2) <= 1) = 62 / 2^61
        let p = beta_bias_probability(2, 60, 0.5).unwrap();
        assert_relative_eq!(p, 62.0 / 2.0_f64.powi(61), max_relative = 1e-12);
    }

    #[test]
    fn test_uniform_posterior() {
        for threshold in [0.1, 0.25, 0.9] {
            let p = beta_bias_probability(1, 1, threshold).unwrap();
            assert_relative_eq!(p, 1.0 - threshold, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_mirror_counts() {
        let heads_heavy = beta_bias_probability(15, 4, 0.5).unwrap();
        let tails_heavy = beta_bias_probability(4, 15, 0.5).unwrap();
        assert_relative_eq!(heads_heavy + tails_heavy, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_fractional_shapes() {
        // Beta(1/2, 1/2) is the arcsine law
        let arcsine = BetaParams::new(0.5, 0.5).unwrap();
        // Beta(5/2, 1) has CDF x^(5/2)
        let power = BetaParams::new(2.5, 1.0).unwrap();
        for x in [0.05_f64, 0.3, 0.5, 0.8, 0.97] {
            let expected = 2.0 / PI * x.sqrt().asin();
            assert_relative_eq!(arcsine.cdf(x), expected, max_relative = 1e-12);
            assert_relative_eq!(arcsine.survival(x), 1.0 - expected, max_relative = 1e-12);
            assert_relative_eq!(power.cdf(x), x.powf(2.5), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_whole_shapes_match_continued_fraction() {
        for (alpha, beta, x) in [(3.0, 7.0, 0.2), (8.0, 2.0, 0.5), (40.0, 25.0, 0.7)] {
            let params = BetaParams::new(alpha, beta).unwrap();
            assert_relative_eq!(
                params.cdf(x),
                regularized_incomplete_beta(alpha, beta, x),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_cdf_clamps_outside_support() {
        assert_relative_eq!(beta_cdf(-0.5, 2.0, 3.0).unwrap(), 0.0);
        assert_relative_eq!(beta_cdf(1.5, 2.0, 3.0).unwrap(), 1.0);
        assert!(beta_cdf(f64::NAN, 2.0, 3.0).is_err());
    }

    #[test]
    fn test_invalid_inputs() {
        for result in [
            beta_bias_probability(0, 2, 0.5),
            beta_bias_probability(8, 0, 0.5),
            beta_bias_probability(8, 2, 0.0),
            beta_bias_probability(8, 2, 1.0),
            beta_bias_probability(8, 2, f64::NAN),
        ] {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }
}
