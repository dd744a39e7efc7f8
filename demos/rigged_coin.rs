//! # Beta Distribution Example
//!
//! A coin lands heads 8 times and tails 2 times. Under a `Beta(8, 2)`
//! posterior, how likely is it that the coin favours heads?
//!
//! Run with:
//! ```bash
//! cargo run --example rigged_coin
//! ```

use prob_toolkit::beta::FAIR_COIN_THRESHOLD;
use prob_toolkit::simulation::simulate_beta_bias;
use prob_toolkit::{Result, beta_bias_probability};
use tracing_subscriber::EnvFilter;

const HEADS: u64 = 8;
const TAILS: u64 = 2;
const DRAWS: usize = 100_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🪙 Is This Coin Rigged?");
    println!("======================\n");

    let p = beta_bias_probability(HEADS, TAILS, FAIR_COIN_THRESHOLD)?;
    println!("   {HEADS} heads, {TAILS} tails");
    println!("   P(heads rate > {FAIR_COIN_THRESHOLD}) = {p}");

    let simulated = simulate_beta_bias(HEADS, TAILS, FAIR_COIN_THRESHOLD, DRAWS, &mut rand::rng())?;
    println!(
        "   simulated: {:.4} ± {:.4}",
        simulated.estimate, simulated.standard_error
    );

    if p > 0.95 {
        println!("\n   ⚠️  Strong evidence the coin is biased towards heads");
    } else {
        println!("\n   ✅ Not enough evidence to call the coin rigged");
    }
    Ok(())
}
