//! Core domain types, request parameters, and library-wide result/error
//! structures.

pub mod params;
pub mod types;

pub use params::*;
pub use types::*;

/// Monte Carlo price estimate with a normal-approximation confidence
/// interval.
///
/// The interval is `price ± z · stderr` where `z` is the standard-normal
/// critical value for the requested confidence level, so
/// `ci_lower <= price <= ci_upper` always holds. Payoffs are non-negative
/// and discounting preserves sign, so `price >= 0` for both calls and puts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceEstimate {
    /// Discounted sample mean of the simulated payoffs.
    pub price: f64,
    /// Standard error of the mean (Bessel-corrected sample stddev / sqrt(n)).
    pub stderr: f64,
    /// Lower confidence bound.
    pub ci_lower: f64,
    /// Upper confidence bound.
    pub ci_upper: f64,
}

impl PriceEstimate {
    /// Half-width of the confidence interval.
    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.ci_upper - self.ci_lower)
    }
}

/// Engine errors surfaced by the API.
///
/// Every estimation or sweep call is independently failable; no error is
/// fatal to the host process and none is retried (the engine is
/// deterministic, so retrying an identical call is meaningless).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input validation error.
    InvalidInput(String),
    /// Numerical issue (overflow, invalid state, etc.).
    NumericalError(String),
    /// A sweep was cancelled before all cells completed.
    Cancelled,
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
            Self::Cancelled => write!(f, "sweep cancelled"),
        }
    }
}

impl std::error::Error for PricingError {}
