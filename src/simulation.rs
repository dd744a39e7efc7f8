//! Monte Carlo estimators for the closed-form probabilities.
//!
//! Each estimator draws from the distribution with a caller-supplied RNG
//! and reports the hit fraction together with its binomial standard error,
//! which makes them convenient for sanity-checking the exact results.

#![allow(clippy::cast_precision_loss)]

use crate::error::{Result, ToolkitError};
use crate::params::{BetaParams, BinomialParams, NormalParams};
use rand::Rng;
use std::f64::consts::PI;
use tracing::debug;

/// Result of a Monte Carlo probability estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarloEstimate {
    /// Fraction of draws that satisfied the event
    pub estimate: f64,
    /// Binomial standard error of `estimate`
    pub standard_error: f64,
    /// Number of draws used
    pub draws: usize,
}

impl MonteCarloEstimate {
    fn from_hits(hits: usize, draws: usize) -> Self {
        let estimate = hits as f64 / draws as f64;
        let standard_error = (estimate * (1.0 - estimate) / draws as f64).sqrt();
        Self {
            estimate,
            standard_error,
            draws,
        }
    }

    /// Whether `expected` lies within `k` standard errors of the estimate.
    ///
    /// A floor of one draw's worth of probability keeps degenerate
    /// estimates (all hits or no hits) from demanding exact equality.
    #[must_use]
    pub fn is_consistent_with(&self, expected: f64, k: f64) -> bool {
        let tolerance = k * self.standard_error.max(1.0 / self.draws as f64);
        (self.estimate - expected).abs() <= tolerance
    }
}

fn ensure_draws(draws: usize) -> Result<usize> {
    if draws == 0 {
        return Err(ToolkitError::invalid_count(
            "draws",
            0,
            "must be greater than zero",
        ));
    }
    Ok(draws)
}

/// Draws from `N(mean, std_dev)` with the Box-Muller transform.
pub fn sample_normal<R: Rng + ?Sized>(params: &NormalParams, rng: &mut R) -> f64 {
    // 1 - U keeps u1 in (0, 1] so the log stays finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    params.mean() + params.std_dev() * z0
}

/// Draws from `Gamma(shape, 1)`.
///
/// Marsaglia and Tsang for `shape >= 1`; smaller shapes are boosted by one
/// and corrected with a uniform power.
pub fn sample_gamma<R: Rng + ?Sized>(shape: f64, rng: &mut R) -> f64 {
    if shape < 1.0 {
        let boosted = sample_gamma(shape + 1.0, rng);
        let u: f64 = 1.0 - rng.random::<f64>();
        return boosted * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    let standard = NormalParams::standard();

    loop {
        let z = sample_normal(&standard, rng);
        let v = (1.0 + c * z).powi(3);
        if v <= 0.0 {
            continue;
        }
        let u: f64 = rng.random();
        if u < 1.0 - 0.0331 * z.powi(4) {
            return d * v;
        }
        if u.ln() < 0.5 * z.powi(2) + d * (1.0 - v + v.ln()) {
            return d * v;
        }
    }
}

/// Draws from `Beta(alpha, beta)` as the ratio `X / (X + Y)` of two gamma
/// draws.
pub fn sample_beta<R: Rng + ?Sized>(params: &BetaParams, rng: &mut R) -> f64 {
    let x = sample_gamma(params.alpha(), rng);
    let y = sample_gamma(params.beta(), rng);
    x / (x + y)
}

/// Draws a success count from `Binomial(n, p)` by running the trials.
pub fn sample_binomial<R: Rng + ?Sized>(params: &BinomialParams, rng: &mut R) -> u64 {
    let p = params.probability();
    let mut count = 0;
    for _ in 0..params.trials() {
        if rng.random::<f64>() < p {
            count += 1;
        }
    }
    count
}

/// Estimates `P(X >= k_min)` for `X ~ Binomial(n, p)`.
///
/// # Errors
/// Returns an error for invalid binomial parameters or zero draws.
///
/// # Example
/// ```rust
/// use prob_toolkit::simulation::simulate_binomial_tail;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mc = simulate_binomial_tail(137, 0.40, 50, 20_000, &mut rng).unwrap();
/// assert!(mc.is_consistent_with(0.822095588147425, 5.0));
/// ```
pub fn simulate_binomial_tail<R: Rng + ?Sized>(
    n: u64,
    p: f64,
    k_min: u64,
    draws: usize,
    rng: &mut R,
) -> Result<MonteCarloEstimate> {
    let params = BinomialParams::new(n, p)?;
    let draws = ensure_draws(draws)?;
    let hits = (0..draws)
        .filter(|_| sample_binomial(&params, rng) >= k_min)
        .count();
    let estimate = MonteCarloEstimate::from_hits(hits, draws);
    debug!(
        n,
        p,
        k_min,
        draws,
        estimate = estimate.estimate,
        "simulated binomial tail"
    );
    Ok(estimate)
}

/// Estimates `P(low < X <= high)` for `X ~ N(mean, std_dev)`.
///
/// # Errors
/// Returns an error for invalid normal parameters, a reversed or NaN
/// interval, or zero draws.
pub fn simulate_normal_interval<R: Rng + ?Sized>(
    mean: f64,
    std_dev: f64,
    low: f64,
    high: f64,
    draws: usize,
    rng: &mut R,
) -> Result<MonteCarloEstimate> {
    let params = NormalParams::new(mean, std_dev)?;
    if low.is_nan() || high.is_nan() || low > high {
        return Err(ToolkitError::invalid_interval(low, high));
    }
    let draws = ensure_draws(draws)?;
    let hits = (0..draws)
        .filter(|_| {
            let x = sample_normal(&params, rng);
            low < x && x <= high
        })
        .count();
    let estimate = MonteCarloEstimate::from_hits(hits, draws);
    debug!(
        mean,
        std_dev,
        low,
        high,
        draws,
        estimate = estimate.estimate,
        "simulated normal interval"
    );
    Ok(estimate)
}

/// Estimates the probability that a `Beta(heads, tails)` draw exceeds
/// `threshold`.
///
/// # Errors
/// Returns an error if either count is zero, `threshold` is outside
/// `(0, 1)`, or `draws` is zero.
pub fn simulate_beta_bias<R: Rng + ?Sized>(
    heads: u64,
    tails: u64,
    threshold: f64,
    draws: usize,
    rng: &mut R,
) -> Result<MonteCarloEstimate> {
    let params = BetaParams::from_counts(heads, tails)?;
    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(ToolkitError::invalid_parameter(
            "threshold",
            threshold,
            "must be in range (0, 1)",
        ));
    }
    let draws = ensure_draws(draws)?;
    let hits = (0..draws)
        .filter(|_| sample_beta(&params, rng) > threshold)
        .count();
    let estimate = MonteCarloEstimate::from_hits(hits, draws);
    debug!(
        heads,
        tails,
        threshold,
        draws,
        estimate = estimate.estimate,
        "simulated beta bias"
    );
    Ok(estimate)
}
