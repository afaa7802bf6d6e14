//! Stochastic process models driving the simulation engines.

/// Geometric Brownian Motion with drift `mu` and volatility `sigma`.
///
/// The log-price evolves as a normal random walk, so the transition over any
/// horizon has the exact lognormal form used by [`Gbm::step_exact`]. Pricing
/// uses the risk-neutral parameterization `mu = r`.
#[derive(Debug, Clone, Copy)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    /// Log-space drift accumulated over `dt`.
    #[inline]
    pub fn log_drift(&self, dt: f64) -> f64 {
        (self.mu - 0.5 * self.sigma * self.sigma) * dt
    }

    /// Log-space diffusion coefficient over `dt`.
    #[inline]
    pub fn log_diffusion(&self, dt: f64) -> f64 {
        self.sigma * dt.sqrt()
    }

    /// Exact transition over `dt` driven by the standard-normal draw `z`.
    ///
    /// `S_next = S * exp((mu - sigma^2/2) dt + sigma sqrt(dt) z)`. This is
    /// the discretization-free lognormal solution, not an Euler step, so it
    /// is bias-free for any `dt` and maps positive prices to positive
    /// prices by construction.
    #[inline]
    pub fn step_exact(&self, s: f64, dt: f64, z: f64) -> f64 {
        s * self.log_diffusion(dt).mul_add(z, self.log_drift(dt)).exp()
    }
}
