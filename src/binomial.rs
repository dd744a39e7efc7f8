//! Binomial distribution: pmf, cumulative and upper-tail probabilities.
//!
//! The pmf is evaluated with the saddle-point form
//! `ln f(k) = δ(n) - δ(k) - δ(n-k) - D(k, np) - D(n-k, nq) - ½ ln(2πk(n-k)/n)`,
//! where `δ` is the Stirling-series remainder and `D` the deviance term.
//! Unlike a difference of three `ln Γ` values it keeps full relative
//! precision for millions of trials. Tails are summed outwards from the mode
//! with the pmf ratio recurrence, so their cost grows with the standard
//! deviation rather than with `n`.

#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]

use crate::beta::regularized_incomplete_beta;
use crate::error::{Result, ToolkitError};
use crate::params::BinomialParams;
use statrs::function::gamma::ln_gamma;
use tracing::{debug, trace};

/// `ln(sqrt(2π))`
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;
/// `ln(2π)`
const LN_2PI: f64 = 1.837_877_066_409_345_5;

/// Summation stops once a term falls below this share of the running sum.
const TAIL_CUTOFF: f64 = 1e-20;

/// `ln(k!) - ln(sqrt(2πk) (k/e)^k)` for integer `k >= 0`.
fn stirlerr(k: f64) -> f64 {
    const S0: f64 = 1.0 / 12.0;
    const S1: f64 = 1.0 / 360.0;
    const S2: f64 = 1.0 / 1260.0;
    const S3: f64 = 1.0 / 1680.0;
    const S4: f64 = 1.0 / 1188.0;

    if k == 0.0 {
        return 0.0;
    }
    if k <= 15.0 {
        return ln_gamma(k + 1.0) - (k + 0.5) * k.ln() + k - LN_SQRT_2PI;
    }
    let kk = k * k;
    if k > 500.0 {
        (S0 - S1 / kk) / k
    } else if k > 80.0 {
        (S0 - (S1 - S2 / kk) / kk) / k
    } else if k > 35.0 {
        (S0 - (S1 - (S2 - S3 / kk) / kk) / kk) / k
    } else {
        (S0 - (S1 - (S2 - (S3 - S4 / kk) / kk) / kk) / kk) / k
    }
}

/// Deviance term `x ln(x / np) + np - x`, summed as a series when `x` is
/// close to `np` to avoid cancellation.
fn bd0(x: f64, np: f64) -> f64 {
    if (x - np).abs() < 0.1 * (x + np) {
        let mut v = (x - np) / (x + np);
        let mut s = (x - np) * v;
        let mut ej = 2.0 * x * v;
        v *= v;
        for j in 1..1000_u32 {
            ej *= v;
            let next = s + ej / f64::from(2 * j + 1);
            if next == s {
                return next;
            }
            s = next;
        }
        s
    } else {
        x * (x / np).ln() + np - x
    }
}

/// Log-PMF of `Binomial(n, p)` at `k <= n`; inputs are assumed valid.
pub(crate) fn ln_pmf_raw(k: u64, n: u64, p: f64) -> f64 {
    if p == 0.0 {
        return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
    }
    if p == 1.0 {
        return if k == n { 0.0 } else { f64::NEG_INFINITY };
    }
    let q = 1.0 - p;
    let nf = n as f64;
    if k == 0 {
        return if p < 0.1 {
            -bd0(nf, nf * q) - nf * p
        } else {
            nf * (-p).ln_1p()
        };
    }
    if k == n {
        return if q < 0.1 {
            -bd0(nf, nf * p) - nf * q
        } else {
            nf * p.ln()
        };
    }

    let kf = k as f64;
    let lc = stirlerr(nf) - stirlerr(kf) - stirlerr(nf - kf) - bd0(kf, nf * p) - bd0(nf - kf, nf * q);
    let lf = LN_2PI + kf.ln() + (-kf / nf).ln_1p();
    lc - 0.5 * lf
}

/// Log-PMF of `Binomial(n, p)` at count `k`.
///
/// # Errors
/// Returns an error if `p` is outside `[0, 1]`, `n` is zero, or `k > n`.
pub fn binomial_ln_pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    let params = BinomialParams::new(n, p)?;
    if k > n {
        return Err(ToolkitError::invalid_count("k", k, "must not exceed n"));
    }
    Ok(ln_pmf_raw(k, params.trials(), params.probability()))
}

/// PMF of `Binomial(n, p)` at count `k`.
///
/// # Errors
/// Same conditions as [`binomial_ln_pmf`].
///
/// # Example
/// ```rust
/// use prob_toolkit::binomial::binomial_pmf;
///
/// // Exactly 2 heads in 4 fair flips: 6/16
/// let p = binomial_pmf(2, 4, 0.5).unwrap();
/// assert!((p - 0.375).abs() < 1e-12);
/// ```
pub fn binomial_pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    binomial_ln_pmf(k, n, p).map(f64::exp)
}

/// `P(X >= k_min)` for `X ~ Binomial(n, p)`, the pmf summed over
/// `k_min..=n`.
///
/// `k_min = 0` gives exactly 1 and `k_min > n` gives exactly 0.
///
/// # Errors
/// Returns an error if `n` is zero or `p` is outside `[0, 1]`.
///
/// # Example
/// ```rust
/// use prob_toolkit::binomial_tail_probability;
///
/// // 137 passengers, each 40% likely to be a no-show: at least 50 no-shows
/// let p = binomial_tail_probability(137, 0.40, 50).unwrap();
/// assert!((p - 0.822095588147425).abs() < 1e-6);
/// ```
pub fn binomial_tail_probability(n: u64, p: f64, k_min: u64) -> Result<f64> {
    let params = BinomialParams::new(n, p)?;
    Ok(params.tail_probability(k_min))
}

/// Same quantity as [`binomial_tail_probability`], evaluated as the
/// regularized incomplete beta function `I_p(k_min, n - k_min + 1)`.
///
/// # Errors
/// Returns an error if `n` is zero or `p` is outside `[0, 1]`.
pub fn binomial_tail_closed_form(n: u64, p: f64, k_min: u64) -> Result<f64> {
    BinomialParams::new(n, p)?;
    let tail = if k_min == 0 {
        1.0
    } else if k_min > n {
        0.0
    } else {
        regularized_incomplete_beta(k_min as f64, (n - k_min + 1) as f64, p)
    };
    debug!(n, p, k_min, tail, "binomial tail (closed form)");
    Ok(tail)
}

impl BinomialParams {
    /// `P(X = k)`; zero for `k` beyond the number of trials.
    #[must_use]
    pub fn pmf(&self, k: u64) -> f64 {
        if k > self.trials() {
            0.0
        } else {
            ln_pmf_raw(k, self.trials(), self.probability()).exp()
        }
    }

    /// Most likely count, `floor((n + 1) p)` capped at `n`.
    #[must_use]
    pub fn mode(&self) -> u64 {
        let mode = ((self.trials() as f64 + 1.0) * self.probability()).floor() as u64;
        mode.min(self.trials())
    }

    /// `P(X >= k_min)`.
    ///
    /// Counts above the mode are summed directly; otherwise the lower tail
    /// below `k_min` is summed and complemented, which is then at least
    /// roughly one half and loses no relative precision.
    #[must_use]
    pub fn tail_probability(&self, k_min: u64) -> f64 {
        let n = self.trials();
        let p = self.probability();
        let tail = if k_min == 0 {
            1.0
        } else if k_min > n || p == 0.0 {
            0.0
        } else if p == 1.0 {
            1.0
        } else if k_min > self.mode() {
            self.upper_sum(k_min)
        } else {
            1.0 - self.lower_sum(k_min - 1)
        };
        let tail = tail.clamp(0.0, 1.0);
        debug!(n, p, k_min, tail, "binomial tail (summation)");
        tail
    }

    /// `P(X <= k)`, the mirror of [`BinomialParams::tail_probability`].
    #[must_use]
    pub fn cdf(&self, k: u64) -> f64 {
        let n = self.trials();
        let p = self.probability();
        let cdf = if k >= n || p == 0.0 {
            1.0
        } else if p == 1.0 {
            0.0
        } else if k < self.mode() {
            self.lower_sum(k)
        } else {
            1.0 - self.upper_sum(k + 1)
        };
        cdf.clamp(0.0, 1.0)
    }

    /// `sum_{j >= start} P(X = j)` for `start` above the mode, where the
    /// terms shrink monotonically.
    fn upper_sum(&self, start: u64) -> f64 {
        let n = self.trials();
        let p = self.probability();
        let odds = p / (1.0 - p);

        let mut term = ln_pmf_raw(start, n, p).exp();
        let mut sum = term;
        for k in start..n {
            term *= (n - k) as f64 / (k + 1) as f64 * odds;
            sum += term;
            if term <= sum * TAIL_CUTOFF {
                trace!(start, stop = k + 1, "upper binomial sum converged");
                break;
            }
        }
        sum
    }

    /// `sum_{j <= end} P(X = j)` for `end` below the mode, where the terms
    /// shrink monotonically going down.
    fn lower_sum(&self, end: u64) -> f64 {
        let n = self.trials();
        let p = self.probability();
        let inverse_odds = (1.0 - p) / p;

        let mut term = ln_pmf_raw(end, n, p).exp();
        let mut sum = term;
        for k in (1..=end).rev() {
            term *= k as f64 / (n - k + 1) as f64 * inverse_odds;
            sum += term;
            if term <= sum * TAIL_CUTOFF {
                trace!(end, stop = k - 1, "lower binomial sum converged");
                break;
            }
        }
        sum
    }
}
