//! Monte Carlo pricing engine for European options.
//!
//! The estimator samples terminal prices with the exact single-step GBM
//! transition, averages discounted payoffs, and wraps the mean in a
//! normal-approximation confidence interval (Bessel-corrected sample
//! deviation, standard error = sd/sqrt(n), critical value from the inverse
//! standard-normal CDF).
//!
//! References: Glasserman (2004); Hull (11th ed.), Monte Carlo estimators
//! around Eq. (21.2).

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{PriceEstimate, PricingError, SimulationParameters};
use crate::math::{ShockSource, DEFAULT_SEED};
use crate::mc::simulation::terminal_prices;
use crate::models::Gbm;

/// Monte Carlo pricer with a fixed per-invocation seed.
///
/// Every call to [`MonteCarloPricer::price`] constructs a private
/// [`ShockSource`] from the pricer's seed, so invocations are stateless,
/// bit-reproducible, and safe to run concurrently. Two invocations with the
/// same simulation count consume identical shock sequences; a call and a
/// put priced from the same parameters are therefore driven by the same
/// shocks and their estimates are not statistically independent.
#[derive(Debug, Clone)]
pub struct MonteCarloPricer {
    seed: u64,
}

impl Default for MonteCarloPricer {
    fn default() -> Self {
        Self::new()
    }
}

impl MonteCarloPricer {
    /// Creates a pricer using [`DEFAULT_SEED`].
    #[inline]
    pub fn new() -> Self {
        Self { seed: DEFAULT_SEED }
    }

    /// Creates a pricer with an explicit seed.
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed applied at the start of every invocation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Prices a European option described by `params`.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when `params` fails
    /// validation. No computation happens on invalid input.
    pub fn price(&self, params: &SimulationParameters) -> Result<PriceEstimate, PricingError> {
        self.price_with_sample(params).map(|(estimate, _)| estimate)
    }

    /// Prices a European option and returns the terminal-price sample that
    /// produced the estimate, for histogram rendering at the presentation
    /// boundary.
    ///
    /// The sample length equals `params.num_simulations` and every entry is
    /// strictly positive.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] on validation failure.
    pub fn price_with_sample(
        &self,
        params: &SimulationParameters,
    ) -> Result<(PriceEstimate, Vec<f64>), PricingError> {
        params.validate()?;

        let z_crit = critical_value(params.confidence_level)?;
        let model = Gbm {
            mu: params.rate,
            sigma: params.vol,
        };

        // Fresh stream per invocation: identical parameters reproduce
        // identical draws.
        let mut shocks = ShockSource::from_seed(self.seed);
        let terminals = terminal_prices(
            &model,
            params.spot,
            params.maturity,
            params.num_simulations,
            &mut shocks,
        );

        let mut sum = 0.0_f64;
        let mut sum_sq = 0.0_f64;
        for &st in &terminals {
            let payoff = params.option_type.payoff(st, params.strike);
            sum += payoff;
            sum_sq += payoff * payoff;
        }

        let n = terminals.len() as f64;
        let mean = sum / n;
        let variance = if terminals.len() > 1 {
            ((sum_sq - sum * sum / n) / (n - 1.0)).max(0.0)
        } else {
            0.0
        };

        let discount = (-params.rate * params.maturity).exp();
        let price = discount * mean;
        let stderr = discount * (variance / n).sqrt();
        let half = z_crit * stderr;

        let estimate = PriceEstimate {
            price,
            stderr,
            ci_lower: price - half,
            ci_upper: price + half,
        };
        Ok((estimate, terminals))
    }
}

/// Two-sided standard-normal critical value for `confidence_level`.
///
/// `z = Phi^{-1}(0.5 + c/2)`, e.g. ~1.96 at 95%.
fn critical_value(confidence_level: f64) -> Result<f64, PricingError> {
    let standard_normal = Normal::new(0.0, 1.0)
        .map_err(|e| PricingError::NumericalError(format!("standard normal: {e}")))?;
    Ok(standard_normal.inverse_cdf(0.5 + 0.5 * confidence_level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionType;

    fn scenario(option_type: OptionType) -> SimulationParameters {
        SimulationParameters::builder()
            .spot(100.0)
            .strike(100.0)
            .maturity(1.0)
            .rate(0.05)
            .vol(0.2)
            .option_type(option_type)
            .build()
            .expect("valid parameters")
    }

    #[test]
    fn critical_value_matches_the_textbook_95_percent_quantile() {
        let z = critical_value(0.95).expect("valid confidence level");
        assert!((z - 1.959_963_985).abs() < 1e-6, "z={z}");
    }

    #[test]
    fn estimate_interval_brackets_the_price() {
        let pricer = MonteCarloPricer::new();
        for option_type in [OptionType::Call, OptionType::Put] {
            let estimate = pricer.price(&scenario(option_type)).expect("pricing succeeds");
            assert!(estimate.price >= 0.0);
            assert!(estimate.ci_lower <= estimate.price);
            assert!(estimate.price <= estimate.ci_upper);
            assert!(estimate.stderr > 0.0);
        }
    }

    #[test]
    fn sample_length_matches_simulation_count_and_is_positive() {
        let pricer = MonteCarloPricer::new();
        let (_, sample) = pricer
            .price_with_sample(&scenario(OptionType::Call))
            .expect("pricing succeeds");
        assert_eq!(sample.len(), 10_000);
        assert!(sample.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn repeated_invocations_are_bit_identical() {
        let pricer = MonteCarloPricer::new();
        let params = scenario(OptionType::Call);
        let (first, sample_a) = pricer.price_with_sample(&params).expect("pricing succeeds");
        let (second, sample_b) = pricer.price_with_sample(&params).expect("pricing succeeds");
        assert_eq!(first, second);
        assert_eq!(sample_a, sample_b);
    }

    #[test]
    fn call_and_put_consume_the_same_shock_sequence() {
        let pricer = MonteCarloPricer::new();
        let (_, call_sample) = pricer
            .price_with_sample(&scenario(OptionType::Call))
            .expect("pricing succeeds");
        let (_, put_sample) = pricer
            .price_with_sample(&scenario(OptionType::Put))
            .expect("pricing succeeds");
        assert_eq!(call_sample, put_sample);
    }

    #[test]
    fn single_path_estimate_has_zero_width_interval() {
        let params = SimulationParameters::builder()
            .spot(100.0)
            .strike(100.0)
            .maturity(1.0)
            .rate(0.05)
            .vol(0.2)
            .num_simulations(1)
            .option_type(OptionType::Call)
            .build()
            .expect("valid parameters");
        let estimate = MonteCarloPricer::new().price(&params).expect("pricing succeeds");
        assert_eq!(estimate.stderr, 0.0);
        assert_eq!(estimate.ci_lower, estimate.price);
        assert_eq!(estimate.ci_upper, estimate.price);
    }

    #[test]
    fn seed_accessor_reports_the_configured_seed() {
        assert_eq!(MonteCarloPricer::new().seed(), crate::math::DEFAULT_SEED);
        assert_eq!(MonteCarloPricer::with_seed(7).seed(), 7);
    }

    #[test]
    fn invalid_parameters_fail_before_any_computation() {
        let mut params = scenario(OptionType::Call);
        params.maturity = -1.0;
        let err = MonteCarloPricer::new().price(&params).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }
}
