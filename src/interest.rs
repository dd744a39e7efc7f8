//! Compound interest under periodic and continuous compounding.

use crate::error::{Result, ToolkitError, ensure_non_negative};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How often interest is folded back into the principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compounding {
    /// `n` compounding periods per year (12 for monthly, 365 for daily).
    Periodic(u32),
    /// The limit of periodic compounding as `n` grows without bound.
    Continuous,
}

/// Future value of a principal under both compounding modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterest {
    /// `principal * (1 + rate / n)^(n * years)`
    pub periodic: f64,
    /// `principal * e^(rate * years)`
    pub continuous: f64,
}

impl CompoundInterest {
    /// Extra amount earned by compounding continuously instead of periodically.
    #[must_use]
    pub fn continuous_premium(&self) -> f64 {
        self.continuous - self.periodic
    }
}

/// Future value of `principal` after `years` at annual `rate`.
///
/// # Errors
/// Returns an error if `principal`, `rate` or `years` is negative or not
/// finite, or if a periodic schedule has zero periods per year.
///
/// # Example
/// ```rust
/// use prob_toolkit::interest::{Compounding, future_value};
///
/// let monthly = future_value(1000.0, 0.05, 3.0, Compounding::Periodic(12)).unwrap();
/// let continuous = future_value(1000.0, 0.05, 3.0, Compounding::Continuous).unwrap();
/// assert!(continuous > monthly);
/// ```
pub fn future_value(
    principal: f64,
    rate: f64,
    years: f64,
    compounding: Compounding,
) -> Result<f64> {
    let principal = ensure_non_negative("principal", principal)?;
    let rate = ensure_non_negative("rate", rate)?;
    let years = ensure_non_negative("years", years)?;

    let growth = match compounding {
        Compounding::Periodic(0) => {
            return Err(ToolkitError::invalid_count(
                "compounds_per_year",
                0,
                "must be at least 1",
            ));
        }
        Compounding::Periodic(periods) => {
            let n = f64::from(periods);
            // (1 + r/n)^(nt) computed through ln_1p so large n keeps precision
            (n * years * (rate / n).ln_1p()).exp()
        }
        Compounding::Continuous => (rate * years).exp(),
    };

    let amount = principal * growth;
    debug!(principal, rate, years, ?compounding, amount, "future value");
    Ok(amount)
}

/// Future value under `compounds_per_year` periodic compounding and under
/// continuous compounding.
///
/// # Errors
/// Returns an error if any input is negative or not finite, or if
/// `compounds_per_year` is zero.
///
/// # Example
/// ```rust
/// use prob_toolkit::compound_interest;
///
/// let result = compound_interest(1000.0, 0.05, 3.0, 12).unwrap();
/// assert!((result.periodic - 1161.47).abs() < 0.01);
/// assert!((result.continuous - 1161.83).abs() < 0.01);
/// ```
pub fn compound_interest(
    principal: f64,
    rate: f64,
    years: f64,
    compounds_per_year: u32,
) -> Result<CompoundInterest> {
    Ok(CompoundInterest {
        periodic: future_value(
            principal,
            rate,
            years,
            Compounding::Periodic(compounds_per_year),
        )?,
        continuous: future_value(principal, rate, years, Compounding::Continuous)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_and_continuous() {
        let result = compound_interest(1000.0, 0.05, 3.0, 12).unwrap();
        assert_relative_eq!(result.periodic, 1161.472_231_333_467_8, max_relative = 1e-12);
        assert_relative_eq!(result.continuous, 1161.834_242_728_283, max_relative = 1e-12);
        assert!(result.continuous_premium() > 0.0);
    }

    #[test]
    fn test_annual_compounding_matches_powi() {
        let amount = future_value(500.0, 0.1, 2.0, Compounding::Periodic(1)).unwrap();
        assert_relative_eq!(amount, 500.0 * 1.1_f64.powi(2), max_relative = 1e-14);
    }

    #[test]
    fn test_zero_rate_or_time_keeps_principal() {
        let result = compound_interest(250.0, 0.0, 10.0, 365).unwrap();
        assert_relative_eq!(result.periodic, 250.0);
        assert_relative_eq!(result.continuous, 250.0);

        let result = compound_interest(250.0, 0.07, 0.0, 4).unwrap();
        assert_relative_eq!(result.periodic, 250.0);
        assert_relative_eq!(result.continuous, 250.0);
    }

    #[test]
    fn test_frequent_compounding_approaches_continuous() {
        let daily = future_value(1000.0, 0.05, 3.0, Compounding::Periodic(365)).unwrap();
        let continuous = future_value(1000.0, 0.05, 3.0, Compounding::Continuous).unwrap();
        assert!(daily < continuous);
        assert!(continuous - daily < 0.1);
    }

    #[test]
    fn test_invalid_inputs() {
        for result in [
            compound_interest(-1.0, 0.05, 3.0, 12),
            compound_interest(1000.0, -0.05, 3.0, 12),
            compound_interest(1000.0, 0.05, -3.0, 12),
            compound_interest(1000.0, 0.05, 3.0, 0),
            compound_interest(f64::NAN, 0.05, 3.0, 12),
        ] {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }
}
