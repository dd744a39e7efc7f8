//! Bayes' theorem and the law of total probability.

use crate::error::{Result, ToolkitError, ensure_probability};
use tracing::debug;

/// Relative slack allowed when checking `P(B|A) * P(A) <= P(B)`.
const JOINT_TOLERANCE: f64 = 1e-12;

/// Inverts a conditional probability: `P(A|B) = P(B|A) * P(A) / P(B)`.
///
/// # Arguments
/// * `p_b_given_a` - Likelihood `P(B|A)`
/// * `p_a` - Prior `P(A)`
/// * `p_b` - Evidence `P(B)`
///
/// # Errors
/// Returns [`ToolkitError::DivisionByZero`] if `p_b` is zero, and an invalid
/// argument error if any input is outside `[0, 1]` or if the joint
/// probability `P(B|A) * P(A)` exceeds `P(B)`.
///
/// # Example
/// ```rust
/// use prob_toolkit::bayes_posterior;
///
/// // 85% of cancer patients drink coffee, 0.5% of people have cancer,
/// // 65% of people drink coffee.
/// let p_cancer_given_coffee = bayes_posterior(0.85, 0.005, 0.65).unwrap();
/// assert!((p_cancer_given_coffee - 0.006538461538461539).abs() < 1e-15);
/// ```
pub fn bayes_posterior(p_b_given_a: f64, p_a: f64, p_b: f64) -> Result<f64> {
    let p_b_given_a = ensure_probability("p_b_given_a", p_b_given_a)?;
    let p_a = ensure_probability("p_a", p_a)?;
    let p_b = ensure_probability("p_b", p_b)?;
    if p_b == 0.0 {
        return Err(ToolkitError::division_by_zero("p_b"));
    }

    let joint = p_b_given_a * p_a;
    if joint > p_b * (1.0 + JOINT_TOLERANCE) {
        return Err(ToolkitError::invalid_parameter(
            "p_b",
            p_b,
            "must be at least P(B|A) * P(A)",
        ));
    }

    let posterior = (joint / p_b).min(1.0);
    debug!(p_b_given_a, p_a, p_b, posterior, "bayes posterior");
    Ok(posterior)
}

/// `P(B) = P(B|A) * P(A) + P(B|not A) * (1 - P(A))`.
///
/// # Errors
/// Returns an error if any input is outside `[0, 1]`.
pub fn total_probability(p_b_given_a: f64, p_a: f64, p_b_given_not_a: f64) -> Result<f64> {
    let p_b_given_a = ensure_probability("p_b_given_a", p_b_given_a)?;
    let p_a = ensure_probability("p_a", p_a)?;
    let p_b_given_not_a = ensure_probability("p_b_given_not_a", p_b_given_not_a)?;
    Ok((p_b_given_a * p_a + p_b_given_not_a * (1.0 - p_a)).clamp(0.0, 1.0))
}

/// Posterior `P(A|B)` when the evidence is given as the two likelihoods
/// `P(B|A)` and `P(B|not A)` rather than as `P(B)` directly.
///
/// # Errors
/// Returns [`ToolkitError::DivisionByZero`] when the implied `P(B)` is zero.
///
/// # Example
/// ```rust
/// use prob_toolkit::bayes::bayes_posterior_from_likelihoods;
///
/// // 99% sensitive test, 5% false positive rate, 1% prevalence
/// let p = bayes_posterior_from_likelihoods(0.99, 0.01, 0.05).unwrap();
/// assert!((p - 0.1666666666666667).abs() < 1e-12);
/// ```
pub fn bayes_posterior_from_likelihoods(
    p_b_given_a: f64,
    p_a: f64,
    p_b_given_not_a: f64,
) -> Result<f64> {
    let p_b = total_probability(p_b_given_a, p_a, p_b_given_not_a)?;
    bayes_posterior(p_b_given_a, p_a, p_b)
}
