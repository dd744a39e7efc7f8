//! # Binomial Distribution Example
//!
//! 137 passengers are booked on a Sunday morning flight out of Las Vegas
//! and each is 40% likely to miss it. How likely is it that at least 50
//! of them do not show up?
//!
//! Run with:
//! ```bash
//! cargo run --example flight_overbooking
//! ```

use prob_toolkit::binomial::binomial_tail_closed_form;
use prob_toolkit::simulation::simulate_binomial_tail;
use prob_toolkit::{Result, binomial_tail_probability};
use tracing_subscriber::EnvFilter;

const PASSENGERS: u64 = 137;
const P_NO_SHOW: f64 = 0.40;
const MIN_NO_SHOWS: u64 = 50;
const DRAWS: usize = 10_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("✈️  Flight Overbooking");
    println!("=====================\n");

    let p_50_or_more_no_shows = binomial_tail_probability(PASSENGERS, P_NO_SHOW, MIN_NO_SHOWS)?;
    println!("   P(at least {MIN_NO_SHOWS} no-shows) = {p_50_or_more_no_shows}");

    let closed = binomial_tail_closed_form(PASSENGERS, P_NO_SHOW, MIN_NO_SHOWS)?;
    println!("   via incomplete beta         = {closed}");

    let simulated =
        simulate_binomial_tail(PASSENGERS, P_NO_SHOW, MIN_NO_SHOWS, DRAWS, &mut rand::rng())?;
    println!(
        "   simulated ({} flights)     = {:.4} ± {:.4}",
        simulated.draws, simulated.estimate, simulated.standard_error
    );
    Ok(())
}
