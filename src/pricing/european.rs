//! Black-Scholes-Merton closed form for European options.
//!
//! The simulation engines never call this; it exists as the analytic
//! reference that the Monte Carlo test suites converge against, the same
//! role it plays in standard treatments (Hull, 11th ed., Ch. 15).

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::OptionType;

/// Black-Scholes-Merton price with zero dividend yield.
///
/// Falls back to the discounted forward intrinsic value when `t <= 0` or
/// `sigma <= 0`, which is also the `sigma -> 0` limit of the Monte Carlo
/// estimator.
///
/// # Examples
/// ```
/// use ferromonte::core::OptionType;
/// use ferromonte::pricing::black_scholes_price;
///
/// let call = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 1.0);
/// let put = black_scholes_price(OptionType::Put, 100.0, 100.0, 0.05, 0.2, 1.0);
/// assert!(call > put);
/// ```
pub fn black_scholes_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> f64 {
    if t <= 0.0 || sigma <= 0.0 {
        let forward = s * (r * t).exp();
        return (-r * t).exp() * option_type.payoff(forward, k);
    }

    let normal = standard_normal();
    let vt = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vt;
    let d2 = d1 - vt;
    let df = (-r * t).exp();

    match option_type {
        OptionType::Call => s * normal.cdf(d1) - k * df * normal.cdf(d2),
        OptionType::Put => k * df * normal.cdf(-d2) - s * normal.cdf(-d1),
    }
}

fn standard_normal() -> Normal {
    // Parameters (0, 1) are always accepted.
    Normal::new(0.0, 1.0).expect("unit normal is a valid distribution")
}
