//! Volatility/maturity price-surface sweep.
//!
//! The generator re-runs the Monte Carlo pricer once per grid cell with all
//! parameters except (vol, maturity) fixed to the base values. Cells are
//! statistically and computationally independent, so with the `parallel`
//! feature they are distributed across the Rayon worker pool; each cell's
//! pricer invocation owns its shock stream, so the fixed-seed reproducibility
//! contract holds in parallel without coordination. This sweep is the
//! dominant cost center of the crate: cost scales as
//! `vol_points * maturity_points * num_simulations`, and nothing is cached
//! across overlapping sweeps.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::{PricingError, SimulationParameters};
use crate::engines::monte_carlo::MonteCarloPricer;
use crate::math::linspace;

/// Volatility axis never starts below this level.
const MIN_VOL: f64 = 0.01;
/// Maturity axis never starts below this horizon (in years).
const MIN_MATURITY: f64 = 0.05;

/// Grid resolution of a sweep.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceConfig {
    /// Points along the volatility axis.
    pub vol_points: usize,
    /// Points along the maturity axis.
    pub maturity_points: usize,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            vol_points: 20,
            maturity_points: 20,
        }
    }
}

/// Price surface over a (maturity, volatility) grid.
///
/// Each cell holds an independent point estimate; per-cell confidence
/// bounds are deliberately discarded to keep the payload a plain heatmap
/// input.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSurface {
    /// Volatility axis, ascending.
    pub vols: Vec<f64>,
    /// Maturity axis in years, ascending.
    pub maturities: Vec<f64>,
    /// Row-major grid: `prices[i][j]` belongs to `(maturities[i], vols[j])`.
    pub prices: Vec<Vec<f64>>,
}

/// Sweeps a [`MonteCarloPricer`] over a volatility/maturity grid.
#[derive(Debug, Clone)]
pub struct PriceSurfaceGenerator {
    pricer: MonteCarloPricer,
    config: SurfaceConfig,
}

impl PriceSurfaceGenerator {
    /// Creates a generator with the default 20 x 20 grid.
    pub fn new(pricer: MonteCarloPricer) -> Self {
        Self {
            pricer,
            config: SurfaceConfig::default(),
        }
    }

    /// Overrides the grid resolution.
    pub fn with_config(mut self, config: SurfaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the full surface for `base`.
    ///
    /// The volatility axis spans `[max(0.01, 0.5 vol), 1.5 vol]` and the
    /// maturity axis `[max(0.05, 0.5 T), 2.0 T]`, both evenly spaced. When a
    /// floored lower bound exceeds the scaled upper bound the axis clamps to
    /// a single repeated level rather than running backwards.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when `base` fails validation,
    /// when `base.vol == 0` (the sweep needs a positive volatility to scale
    /// its axis), or when either grid dimension is zero.
    pub fn generate(&self, base: &SimulationParameters) -> Result<PriceSurface, PricingError> {
        let cancel = AtomicBool::new(false);
        self.generate_with_cancel(base, &cancel)
    }

    /// Builds the surface, aborting as soon as `cancel` becomes `true`.
    ///
    /// The flag is checked once per cell; a cancelled sweep returns
    /// [`PricingError::Cancelled`] and discards all completed cells (there
    /// is no partial-result payload).
    pub fn generate_with_cancel(
        &self,
        base: &SimulationParameters,
        cancel: &AtomicBool,
    ) -> Result<PriceSurface, PricingError> {
        base.validate()?;
        if base.vol <= 0.0 {
            return Err(PricingError::InvalidInput(
                "surface sweep requires base vol > 0".to_string(),
            ));
        }
        if self.config.vol_points == 0 || self.config.maturity_points == 0 {
            return Err(PricingError::InvalidInput(
                "surface grid dimensions must be > 0".to_string(),
            ));
        }

        let vol_lo = (0.5 * base.vol).max(MIN_VOL);
        let vol_hi = (1.5 * base.vol).max(vol_lo);
        let vols = linspace(vol_lo, vol_hi, self.config.vol_points);

        let mat_lo = (0.5 * base.maturity).max(MIN_MATURITY);
        let mat_hi = (2.0 * base.maturity).max(mat_lo);
        let maturities = linspace(mat_lo, mat_hi, self.config.maturity_points);

        let cols = vols.len();
        let total = maturities.len() * cols;

        let price_cell = |index: usize| -> Result<f64, PricingError> {
            if cancel.load(Ordering::Relaxed) {
                return Err(PricingError::Cancelled);
            }
            let cell = base.with_vol_and_maturity(vols[index % cols], maturities[index / cols]);
            Ok(self.pricer.price(&cell)?.price)
        };

        #[cfg(feature = "parallel")]
        let flat: Result<Vec<f64>, PricingError> =
            (0..total).into_par_iter().map(price_cell).collect();

        #[cfg(not(feature = "parallel"))]
        let flat: Result<Vec<f64>, PricingError> = (0..total).map(price_cell).collect();

        let flat = flat?;
        let prices = flat.chunks(cols).map(<[f64]>::to_vec).collect();

        Ok(PriceSurface {
            vols,
            maturities,
            prices,
        })
    }
}
