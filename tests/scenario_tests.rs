//! Integration tests for the worked textbook scenarios
//!
//! Each test reproduces one of the classic examples through the public API.

use approx::assert_relative_eq;
use prob_toolkit::binomial::binomial_tail_closed_form;
use prob_toolkit::interest::{Compounding, future_value};
use prob_toolkit::{
    BetaParams, ContinuousCdf, ErrorKind, NormalParams, bayes_posterior, beta_bias_probability,
    binomial_tail_probability, compound_interest, normal_interval_probability, normal_quantile,
};

const TOLERANCE: f64 = 1e-6;

#[test]
fn test_compound_interest_scenario() {
    let result = compound_interest(1000.0, 0.05, 3.0, 12).unwrap();
    assert!((result.periodic - 1161.47).abs() < 0.005);
    assert!((result.continuous - 1161.83).abs() < 0.005);
    assert!(result.continuous >= result.periodic);
}

#[test]
fn test_bayes_scenario() {
    let posterior = bayes_posterior(0.85, 0.005, 0.65).unwrap();
    assert!((posterior - 0.006_538_461_538_461_539).abs() < TOLERANCE);
}

#[test]
fn test_binomial_scenario() {
    let tail = binomial_tail_probability(137, 0.40, 50).unwrap();
    assert!((tail - 0.822_095_588_147_425).abs() < TOLERANCE);

    let closed = binomial_tail_closed_form(137, 0.40, 50).unwrap();
    assert_relative_eq!(tail, closed, max_relative = 1e-9);
}

#[test]
fn test_normal_scenario() {
    let between = normal_interval_probability(64.43, 2.99, 62.0, 66.0).unwrap();
    assert!((between - 0.492_045_014_706_289_4).abs() < TOLERANCE);

    let p95 = normal_quantile(64.43, 2.99, 0.95).unwrap();
    assert!((p95 - 69.348_112_344_584_9).abs() < TOLERANCE);
}

#[test]
fn test_beta_scenario() {
    let p = beta_bias_probability(8, 2, 0.5).unwrap();
    assert!((p - 0.980_468_75).abs() < TOLERANCE);
}

#[test]
fn test_record_level_api_matches_functions() {
    let weights = NormalParams::new(64.43, 2.99).unwrap();
    assert_relative_eq!(
        weights.interval_probability(62.0, 66.0),
        normal_interval_probability(64.43, 2.99, 62.0, 66.0).unwrap(),
        max_relative = 1e-15
    );

    let coin = BetaParams::from_counts(8, 2).unwrap();
    assert_relative_eq!(
        coin.probability_exceeds(0.5).unwrap(),
        beta_bias_probability(8, 2, 0.5).unwrap(),
        max_relative = 1e-15
    );
}

#[test]
fn test_error_taxonomy() {
    assert_eq!(
        bayes_posterior(0.5, 0.5, 0.0).unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
    assert_eq!(
        normal_quantile(0.0, -1.0, 0.5).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        future_value(-5.0, 0.05, 1.0, Compounding::Continuous)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        beta_bias_probability(0, 3, 0.5).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}
