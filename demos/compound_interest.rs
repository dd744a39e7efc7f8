//! # Compound Interest Example
//!
//! $1000 at 5% a year for 3 years, compounded monthly and continuously.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example compound_interest
//! ```

use prob_toolkit::interest::{Compounding, future_value};
use prob_toolkit::{Result, compound_interest};
use tracing_subscriber::EnvFilter;

const PRINCIPAL: f64 = 1000.0;
const RATE: f64 = 0.05;
const YEARS: f64 = 3.0;
const MONTHLY: u32 = 12;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("💰 Compound Interest");
    println!("====================\n");

    let result = compound_interest(PRINCIPAL, RATE, YEARS, MONTHLY)?;
    println!("{} {}", result.periodic, result.continuous);

    println!("\n📈 Growth by compounding frequency:");
    for (label, compounding) in [
        ("yearly", Compounding::Periodic(1)),
        ("monthly", Compounding::Periodic(12)),
        ("daily", Compounding::Periodic(365)),
        ("continuous", Compounding::Continuous),
    ] {
        let amount = future_value(PRINCIPAL, RATE, YEARS, compounding)?;
        println!("   {label:>10}: {amount:.2}");
    }

    println!(
        "\n   Continuous compounding earns {:.2} more than monthly",
        result.continuous_premium()
    );
    Ok(())
}
