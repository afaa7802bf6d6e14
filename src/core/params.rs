//! Request parameters for one estimation.
//!
//! [`SimulationParameters`] bundles the market state and contract terms a
//! single Monte Carlo estimation needs. It is a request-scoped value object:
//! built once (directly or through [`SimulationParameters::builder`]),
//! validated before any computation, and never mutated afterwards.

use crate::core::{OptionType, PricingError};

/// Inputs for one Monte Carlo estimation.
///
/// # Examples
/// ```
/// use ferromonte::core::{OptionType, SimulationParameters};
///
/// let params = SimulationParameters::builder()
///     .spot(100.0)
///     .strike(105.0)
///     .maturity(0.5)
///     .rate(0.03)
///     .vol(0.25)
///     .option_type(OptionType::Put)
///     .build()
///     .unwrap();
/// assert_eq!(params.num_simulations, 10_000);
/// assert_eq!(params.confidence_level, 0.95);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    /// Initial asset price.
    pub spot: f64,
    /// Strike level.
    pub strike: f64,
    /// Time to maturity in years.
    pub maturity: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Annualized volatility.
    pub vol: f64,
    /// Number of simulated terminal prices.
    pub num_simulations: usize,
    /// Call or put.
    pub option_type: OptionType,
    /// Confidence level for the estimate interval, strictly inside (0, 1).
    pub confidence_level: f64,
}

impl SimulationParameters {
    /// Starts a parameter builder with the stock defaults.
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Validates parameter ranges.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when:
    /// - `spot <= 0` or `strike <= 0`
    /// - `maturity <= 0` (the lognormal transition is undefined at `T = 0`;
    ///   the deterministic limit is reachable through `vol = 0` instead)
    /// - `vol < 0`
    /// - any float field is non-finite
    /// - `num_simulations == 0`
    /// - `confidence_level` outside the open interval (0, 1)
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricingError::InvalidInput(
                "spot must be finite and > 0".to_string(),
            ));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(
                "strike must be finite and > 0".to_string(),
            ));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(PricingError::InvalidInput(
                "maturity must be finite and > 0".to_string(),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidInput(
                "rate must be finite".to_string(),
            ));
        }
        if !self.vol.is_finite() || self.vol < 0.0 {
            return Err(PricingError::InvalidInput(
                "vol must be finite and >= 0".to_string(),
            ));
        }
        if self.num_simulations == 0 {
            return Err(PricingError::InvalidInput(
                "num_simulations must be > 0".to_string(),
            ));
        }
        if !self.confidence_level.is_finite()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(PricingError::InvalidInput(
                "confidence_level must lie strictly inside (0, 1)".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy of these parameters with only volatility and maturity replaced.
    ///
    /// Used by surface sweeps, which vary exactly those two axes while
    /// keeping everything else fixed to the base values.
    pub fn with_vol_and_maturity(&self, vol: f64, maturity: f64) -> Self {
        Self {
            vol,
            maturity,
            ..self.clone()
        }
    }
}

/// Builder for [`SimulationParameters`].
#[derive(Debug, Clone, Default)]
pub struct SimulationParametersBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    maturity: Option<f64>,
    rate: Option<f64>,
    vol: Option<f64>,
    num_simulations: Option<usize>,
    option_type: Option<OptionType>,
    confidence_level: Option<f64>,
}

impl SimulationParametersBuilder {
    /// Sets the initial asset price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike level.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the time to maturity in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the risk-free rate. Defaults to 0.0.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the annualized volatility.
    #[inline]
    pub fn vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }

    /// Sets the simulation count. Defaults to 10_000.
    #[inline]
    pub fn num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Sets the option side.
    #[inline]
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Sets the confidence level. Defaults to 0.95.
    #[inline]
    pub fn confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = Some(confidence_level);
        self
    }

    /// Validates and builds [`SimulationParameters`].
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when a required field (spot,
    /// strike, maturity, vol, option side) is missing or any supplied value
    /// fails [`SimulationParameters::validate`].
    pub fn build(self) -> Result<SimulationParameters, PricingError> {
        let spot = self
            .spot
            .ok_or_else(|| PricingError::InvalidInput("spot is required".to_string()))?;
        let strike = self
            .strike
            .ok_or_else(|| PricingError::InvalidInput("strike is required".to_string()))?;
        let maturity = self
            .maturity
            .ok_or_else(|| PricingError::InvalidInput("maturity is required".to_string()))?;
        let vol = self
            .vol
            .ok_or_else(|| PricingError::InvalidInput("vol is required".to_string()))?;
        let option_type = self
            .option_type
            .ok_or_else(|| PricingError::InvalidInput("option_type is required".to_string()))?;

        let params = SimulationParameters {
            spot,
            strike,
            maturity,
            rate: self.rate.unwrap_or(0.0),
            vol,
            num_simulations: self.num_simulations.unwrap_or(10_000),
            option_type,
            confidence_level: self.confidence_level.unwrap_or(0.95),
        };
        params.validate()?;
        Ok(params)
    }
}
