//! # Normal Distribution Example
//!
//! Golden retriever weights are modeled as normal with mean 64.43 lb and
//! standard deviation 2.99 lb.
//!
//! Run with:
//! ```bash
//! cargo run --example golden_retriever_weights
//! ```

use prob_toolkit::{Result, normal_interval_probability, normal_quantile};
use tracing_subscriber::EnvFilter;

const MEAN: f64 = 64.43;
const STD_DEV: f64 = 2.99;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🐕 Golden Retriever Weights");
    println!("==========================\n");

    let between = normal_interval_probability(MEAN, STD_DEV, 62.0, 66.0)?;
    println!("   P(62 lb < weight <= 66 lb) = {between}");

    let p95 = normal_quantile(MEAN, STD_DEV, 0.95)?;
    println!("   95% of dogs weigh at most  = {p95} lb");

    println!("\n📏 Weight percentiles:");
    for q in [0.05, 0.25, 0.5, 0.75, 0.95] {
        let weight = normal_quantile(MEAN, STD_DEV, q)?;
        println!("   {:>3.0}%: {weight:.2} lb", q * 100.0);
    }
    Ok(())
}
