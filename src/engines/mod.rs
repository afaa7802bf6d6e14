//! Estimation engines: the Monte Carlo pricer and the surface sweep built
//! on top of it.

pub mod monte_carlo;
pub mod surface;

pub use monte_carlo::MonteCarloPricer;
pub use surface::{PriceSurface, PriceSurfaceGenerator, SurfaceConfig};
