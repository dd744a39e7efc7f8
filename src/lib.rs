//! # prob-toolkit
//!
//! Closed-form probability and statistics primitives for the classic
//! textbook questions: how much does money grow under compounding, how do
//! you invert a conditional probability, how likely is a binomial count to
//! reach a threshold, what share of a normal population falls in a range,
//! and how sure can you be that a coin is biased.
//!
//! ```rust
//! use prob_toolkit::{
//!     bayes_posterior, beta_bias_probability, binomial_tail_probability,
//!     compound_interest, normal_interval_probability, normal_quantile,
//! };
//!
//! let growth = compound_interest(1000.0, 0.05, 3.0, 12).unwrap();
//! assert!(growth.continuous > growth.periodic);
//!
//! let p_cancer_given_coffee = bayes_posterior(0.85, 0.005, 0.65).unwrap();
//! let p_50_no_shows = binomial_tail_probability(137, 0.40, 50).unwrap();
//! let p_62_to_66 = normal_interval_probability(64.43, 2.99, 62.0, 66.0).unwrap();
//! let p95_weight = normal_quantile(64.43, 2.99, 0.95).unwrap();
//! let p_biased = beta_bias_probability(8, 2, 0.5).unwrap();
//!
//! assert!(p_cancer_given_coffee < 0.01);
//! assert!(p_50_no_shows > 0.8);
//! assert!(p_62_to_66 < 0.5 && p95_weight > 69.0);
//! assert!(p_biased > 0.98);
//! ```
//!
//! ## Features
//!
//! - **Validated inputs**: every operation returns [`Result`] and rejects
//!   out-of-domain parameters with a typed [`ToolkitError`]
//! - **Accurate tails**: binomial and beta tails keep their relative
//!   precision for millions of trials and far into either tail
//! - **Monte Carlo cross-checks**: [`simulation`] estimates the same
//!   probabilities by sampling
//! - **Tracing**: operations emit `tracing` debug events with inputs and results

pub mod bayes;
pub mod beta;
pub mod binomial;
pub mod error;
pub mod interest;
pub mod normal;
pub mod params;
pub mod simulation;
pub mod traits;

pub use bayes::bayes_posterior;
pub use beta::beta_bias_probability;
pub use binomial::binomial_tail_probability;
pub use error::{ErrorKind, Result, ToolkitError};
pub use interest::{CompoundInterest, Compounding, compound_interest};
pub use normal::{normal_interval_probability, normal_quantile};
pub use params::{BetaParams, BinomialParams, NormalParams};
pub use traits::ContinuousCdf;
