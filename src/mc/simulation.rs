//! Terminal-price sampling and path-matrix simulation under GBM.
//!
//! Both forms use the exact lognormal transition ([`Gbm::step_exact`]), so
//! step count affects path-shape fidelity only, never terminal-distribution
//! accuracy. All simulated prices are strictly positive by construction; no
//! runtime check is needed.
//!
//! References: Glasserman (2004), Ch. 3; Hull (11th ed.), Ch. 21.

use crate::core::PricingError;
use crate::math::ShockSource;
use crate::models::Gbm;

/// Samples `num_paths` terminal prices over horizon `maturity` in one step.
///
/// `ST = s0 * exp((mu - sigma^2/2) T + sigma sqrt(T) Z)` elementwise over a
/// fresh shock vector: one exp per path, no intermediate steps. This is the
/// sampler behind every pricer invocation; the returned sample doubles as
/// histogram input at the presentation boundary.
pub fn terminal_prices(
    model: &Gbm,
    s0: f64,
    maturity: f64,
    num_paths: usize,
    shocks: &mut ShockSource,
) -> Vec<f64> {
    let drift = model.log_drift(maturity);
    let diffusion = model.log_diffusion(maturity);

    // Draw the whole shock vector first, then transform in place, so the
    // stream is consumed in the same order a caller-supplied sample would be.
    let mut out = shocks.draw(num_paths);
    for z in out.iter_mut() {
        *z = s0 * diffusion.mul_add(*z, drift).exp();
    }
    out
}

/// Multiple independent GBM trajectories sharing one parameter set.
///
/// Shape is `num_paths x (num_steps + 1)`; column 0 holds the initial price
/// for every row and every entry is strictly positive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathMatrix {
    paths: Vec<Vec<f64>>,
    dt: f64,
}

impl PathMatrix {
    /// Number of simulated trajectories.
    #[inline]
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    /// Number of time steps per trajectory (columns minus the initial one).
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.paths.first().map_or(0, |row| row.len() - 1)
    }

    /// Time-step width in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// One trajectory, `num_steps + 1` prices starting at the initial price.
    #[inline]
    pub fn path(&self, index: usize) -> &[f64] {
        &self.paths[index]
    }

    /// All trajectories, row-major.
    #[inline]
    pub fn paths(&self) -> &[Vec<f64>] {
        &self.paths
    }

    /// Consumes the matrix, handing the rows to a rendering layer.
    #[inline]
    pub fn into_paths(self) -> Vec<Vec<f64>> {
        self.paths
    }
}

/// Simulates `num_paths` trajectories of `num_steps` exact GBM transitions.
///
/// Each time step draws one fresh length-`num_paths` shock vector and
/// advances every trajectory by `dt = maturity / num_steps`.
///
/// # Errors
/// Returns [`PricingError::InvalidInput`] when `s0 <= 0`, `maturity <= 0`,
/// or either count is zero.
pub fn simulate_paths(
    model: &Gbm,
    s0: f64,
    maturity: f64,
    num_paths: usize,
    num_steps: usize,
    shocks: &mut ShockSource,
) -> Result<PathMatrix, PricingError> {
    if !s0.is_finite() || s0 <= 0.0 {
        return Err(PricingError::InvalidInput(
            "initial price must be finite and > 0".to_string(),
        ));
    }
    if !maturity.is_finite() || maturity <= 0.0 {
        return Err(PricingError::InvalidInput(
            "maturity must be finite and > 0".to_string(),
        ));
    }
    if num_paths == 0 {
        return Err(PricingError::InvalidInput(
            "num_paths must be > 0".to_string(),
        ));
    }
    if num_steps == 0 {
        return Err(PricingError::InvalidInput(
            "num_steps must be > 0".to_string(),
        ));
    }

    let dt = maturity / num_steps as f64;
    let drift = model.log_drift(dt);
    let diffusion = model.log_diffusion(dt);

    let mut paths = vec![vec![0.0_f64; num_steps + 1]; num_paths];
    for row in paths.iter_mut() {
        row[0] = s0;
    }

    let mut z = vec![0.0_f64; num_paths];
    for step in 1..=num_steps {
        shocks.fill(&mut z);
        for (row, &zi) in paths.iter_mut().zip(z.iter()) {
            row[step] = row[step - 1] * diffusion.mul_add(zi, drift).exp();
        }
    }

    Ok(PathMatrix { paths, dt })
}
