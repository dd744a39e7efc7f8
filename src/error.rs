//! Error types for the prob-toolkit library.
//!
//! Every operation validates its arguments at the call boundary and reports
//! failures through [`ToolkitError`].

use thiserror::Error;

/// Coarse classification of a [`ToolkitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A parameter lies outside the domain of the operation.
    InvalidArgument,
    /// A denominator that must be positive was zero.
    DivisionByZero,
}

/// The main error type for the prob-toolkit library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolkitError {
    /// Error when a real-valued parameter violates its constraint.
    #[error("Invalid parameter '{parameter}': value {value} {constraint}")]
    InvalidParameter {
        /// The name of the parameter
        parameter: &'static str,
        /// The invalid value
        value: f64,
        /// A description of the constraint that was violated
        constraint: &'static str,
    },

    /// Error when a parameter is not finite (NaN or infinite).
    #[error("Non-finite parameter '{parameter}': {value}")]
    NonFiniteParameter {
        /// The name of the parameter
        parameter: &'static str,
        /// The non-finite value
        value: f64,
    },

    /// Error when a quantile lies outside the open interval (0, 1).
    #[error("Invalid quantile: {value} (must be in range (0, 1))")]
    InvalidQuantile {
        /// The invalid quantile value
        value: f64,
    },

    /// Error when an integer count violates its constraint.
    #[error("Invalid count '{parameter}': {count} {constraint}")]
    InvalidCount {
        /// The name of the parameter
        parameter: &'static str,
        /// The invalid count
        count: u64,
        /// A description of the constraint that was violated
        constraint: &'static str,
    },

    /// Error when an interval has its bounds reversed or undefined.
    #[error("Invalid interval: [{low}, {high}] (low must not exceed high)")]
    InvalidInterval {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },

    /// Error when a probability used as a divisor is zero.
    #[error("Division by zero: '{parameter}' must be greater than zero")]
    DivisionByZero {
        /// The name of the zero-valued parameter
        parameter: &'static str,
    },
}

/// A specialized `Result` type for toolkit operations.
pub type Result<T> = std::result::Result<T, ToolkitError>;

impl ToolkitError {
    /// Create an error for invalid parameter with constraint.
    ///
    /// # Example
    /// ```
    /// use prob_toolkit::error::ToolkitError;
    ///
    /// let error = ToolkitError::invalid_parameter("std_dev", -1.0, "must be positive");
    /// assert!(error.to_string().contains("std_dev"));
    /// ```
    pub fn invalid_parameter(
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            constraint,
        }
    }

    /// Create an error for non-finite parameter.
    pub fn non_finite(parameter: &'static str, value: f64) -> Self {
        Self::NonFiniteParameter { parameter, value }
    }

    /// Create an error for invalid quantile.
    pub fn invalid_quantile(value: f64) -> Self {
        Self::InvalidQuantile { value }
    }

    /// Create an error for an invalid integer count.
    ///
    /// # Example
    /// ```
    /// use prob_toolkit::error::ToolkitError;
    ///
    /// let error = ToolkitError::invalid_count("heads", 0, "must be at least 1");
    /// assert!(error.to_string().contains("heads"));
    /// ```
    pub fn invalid_count(parameter: &'static str, count: u64, constraint: &'static str) -> Self {
        Self::InvalidCount {
            parameter,
            count,
            constraint,
        }
    }

    /// Create an error for a reversed or NaN interval.
    pub fn invalid_interval(low: f64, high: f64) -> Self {
        Self::InvalidInterval { low, high }
    }

    /// Create an error for a zero divisor.
    pub fn division_by_zero(parameter: &'static str) -> Self {
        Self::DivisionByZero { parameter }
    }

    /// Classifies this error.
    ///
    /// # Example
    /// ```
    /// use prob_toolkit::error::{ErrorKind, ToolkitError};
    ///
    /// assert_eq!(ToolkitError::division_by_zero("p_b").kind(), ErrorKind::DivisionByZero);
    /// assert_eq!(ToolkitError::invalid_quantile(1.5).kind(), ErrorKind::InvalidArgument);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InvalidParameter { .. }
            | Self::NonFiniteParameter { .. }
            | Self::InvalidQuantile { .. }
            | Self::InvalidCount { .. }
            | Self::InvalidInterval { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ToolkitError::non_finite(parameter, value))
    }
}

/// Accepts finite values in `[0, 1]`.
pub(crate) fn ensure_probability(parameter: &'static str, value: f64) -> Result<f64> {
    ensure_finite(parameter, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ToolkitError::invalid_parameter(
            parameter,
            value,
            "must be in range [0, 1]",
        ))
    }
}

/// Accepts finite values `>= 0`.
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    ensure_finite(parameter, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ToolkitError::invalid_parameter(
            parameter,
            value,
            "must be non-negative",
        ))
    }
}

/// Accepts finite values `> 0`.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    ensure_finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ToolkitError::invalid_parameter(
            parameter,
            value,
            "must be positive",
        ))
    }
}
