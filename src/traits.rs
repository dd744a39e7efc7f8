/// Cumulative distribution shared by the continuous families.
///
/// Implementors provide [`ContinuousCdf::cdf`] and, where `1 - cdf` would
/// cancel in the upper tail, a direct [`ContinuousCdf::survival`]. Interval
/// probabilities follow from the two.
pub trait ContinuousCdf {
    /// `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// `P(low < X <= high)`, with `high >= low` assumed.
    ///
    /// Intervals starting in the upper half are differenced on the survival
    /// side so both tails keep the same relative precision.
    fn interval_probability(&self, low: f64, high: f64) -> f64 {
        let lower = self.cdf(low);
        let probability = if lower >= 0.5 {
            self.survival(low) - self.survival(high)
        } else {
            self.cdf(high) - lower
        };
        probability.max(0.0)
    }

    /// `P(X > x)`.
    fn survival(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }
}
