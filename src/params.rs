//! Validated parameter records for each distribution family.
//!
//! Constructors check every invariant, so a record that exists is always
//! usable. Deserialization goes through the same constructors.

use crate::error::{
    Result, ToolkitError, ensure_finite, ensure_positive, ensure_probability,
};
use serde::{Deserialize, Serialize};

/// Parameters of a normal distribution `N(mean, std_dev)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NormalRepr")]
pub struct NormalParams {
    mean: f64,
    std_dev: f64,
}

#[derive(Deserialize)]
struct NormalRepr {
    mean: f64,
    std_dev: f64,
}

impl NormalParams {
    /// Creates normal parameters.
    ///
    /// # Errors
    /// Returns an error if `mean` is not finite or `std_dev` is not a
    /// finite positive number.
    ///
    /// # Example
    /// ```rust
    /// use prob_toolkit::params::NormalParams;
    ///
    /// let weights = NormalParams::new(64.43, 2.99).unwrap();
    /// assert_eq!(weights.mean(), 64.43);
    /// assert!(NormalParams::new(0.0, 0.0).is_err());
    /// ```
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        Ok(Self {
            mean: ensure_finite("mean", mean)?,
            std_dev: ensure_positive("std_dev", std_dev)?,
        })
    }

    /// The standard normal `N(0, 1)`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Standardizes `x` to a z-score.
    #[must_use]
    pub fn z_score(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }
}

impl TryFrom<NormalRepr> for NormalParams {
    type Error = ToolkitError;

    fn try_from(repr: NormalRepr) -> Result<Self> {
        Self::new(repr.mean, repr.std_dev)
    }
}

/// Parameters of a binomial distribution `Binomial(trials, probability)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BinomialRepr")]
pub struct BinomialParams {
    trials: u64,
    probability: f64,
}

#[derive(Deserialize)]
struct BinomialRepr {
    trials: u64,
    probability: f64,
}

impl BinomialParams {
    /// Creates binomial parameters.
    ///
    /// # Errors
    /// Returns an error if `trials` is zero or `probability` is outside `[0, 1]`.
    pub fn new(trials: u64, probability: f64) -> Result<Self> {
        if trials == 0 {
            return Err(ToolkitError::invalid_count(
                "trials",
                trials,
                "must be at least 1",
            ));
        }
        Ok(Self {
            trials,
            probability: ensure_probability("probability", probability)?,
        })
    }

    #[must_use]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Expected number of successes, `n * p`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.trials as f64 * self.probability
    }
}

impl TryFrom<BinomialRepr> for BinomialParams {
    type Error = ToolkitError;

    fn try_from(repr: BinomialRepr) -> Result<Self> {
        Self::new(repr.trials, repr.probability)
    }
}

/// Shape parameters of a beta distribution `Beta(alpha, beta)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BetaRepr")]
pub struct BetaParams {
    alpha: f64,
    beta: f64,
}

#[derive(Deserialize)]
struct BetaRepr {
    alpha: f64,
    beta: f64,
}

impl BetaParams {
    /// Creates beta parameters from real shape values.
    ///
    /// # Errors
    /// Returns an error unless both shapes are finite and positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        Ok(Self {
            alpha: ensure_positive("alpha", alpha)?,
            beta: ensure_positive("beta", beta)?,
        })
    }

    /// Posterior shapes from observed coin flips: `alpha = heads`, `beta = tails`.
    ///
    /// # Errors
    /// Returns an error if either count is zero.
    ///
    /// # Example
    /// ```rust
    /// use prob_toolkit::params::BetaParams;
    ///
    /// let coin = BetaParams::from_counts(8, 2).unwrap();
    /// assert_eq!(coin.alpha(), 8.0);
    /// assert!(BetaParams::from_counts(0, 2).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counts(heads: u64, tails: u64) -> Result<Self> {
        if heads == 0 {
            return Err(ToolkitError::invalid_count(
                "heads",
                heads,
                "must be at least 1",
            ));
        }
        if tails == 0 {
            return Err(ToolkitError::invalid_count(
                "tails",
                tails,
                "must be at least 1",
            ));
        }
        Ok(Self {
            alpha: heads as f64,
            beta: tails as f64,
        })
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Mean of the distribution, `alpha / (alpha + beta)`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }
}

impl TryFrom<BetaRepr> for BetaParams {
    type Error = ToolkitError;

    fn try_from(repr: BetaRepr) -> Result<Self> {
        Self::new(repr.alpha, repr.beta)
    }
}
