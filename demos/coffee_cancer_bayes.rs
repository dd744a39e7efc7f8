//! # Conditional Probability Example
//!
//! 85% of cancer patients drink coffee. Only 0.5% of people have cancer
//! while 65% drink coffee, so the chance that a coffee drinker has cancer
//! is tiny: the direction of the condition matters.
//!
//! Run with:
//! ```bash
//! cargo run --example coffee_cancer_bayes
//! ```

use prob_toolkit::{Result, bayes_posterior};
use tracing_subscriber::EnvFilter;

const P_COFFEE_DRINKER: f64 = 0.65;
const P_CANCER: f64 = 0.005;
const P_COFFEE_DRINKER_GIVEN_CANCER: f64 = 0.85;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("☕ Coffee and Cancer: Bayes' Theorem");
    println!("===================================\n");

    let p_cancer_given_coffee_drinker =
        bayes_posterior(P_COFFEE_DRINKER_GIVEN_CANCER, P_CANCER, P_COFFEE_DRINKER)?;

    println!("   P(coffee | cancer) = {P_COFFEE_DRINKER_GIVEN_CANCER}");
    println!("   P(cancer)          = {P_CANCER}");
    println!("   P(coffee)          = {P_COFFEE_DRINKER}");
    println!("   P(cancer | coffee) = {p_cancer_given_coffee_drinker}");
    Ok(())
}
