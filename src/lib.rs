//! Ferromonte estimates the fair value of European call and put options by
//! Monte Carlo simulation of the underlying under Geometric Brownian Motion,
//! and sweeps the estimator across volatility and maturity to build 2D price
//! surfaces for visualization.
//!
//! The crate is a pure computational library: no I/O, no persisted state.
//! Every estimation is self-contained and reproducible: the pricer reseeds
//! its own shock stream on each invocation, so identical parameters yield
//! bit-identical results, and a call and a put priced from the same
//! parameters share the same underlying shocks.
//!
//! References: Hull, *Options, Futures, and Other Derivatives* (11th ed.),
//! Ch. 13 and 21; Glasserman (2004) for Monte Carlo estimators.
//!
//! # Feature Flags
//! - `parallel` (default): Rayon-powered parallel surface sweeps.
//! - `serde`: serde derives on boundary payload types.
//!
//! # Quick Start
//! Price an at-the-money call:
//! ```rust
//! use ferromonte::core::{OptionType, SimulationParameters};
//! use ferromonte::engines::monte_carlo::MonteCarloPricer;
//!
//! let params = SimulationParameters::builder()
//!     .spot(100.0)
//!     .strike(100.0)
//!     .maturity(1.0)
//!     .rate(0.05)
//!     .vol(0.2)
//!     .option_type(OptionType::Call)
//!     .build()
//!     .unwrap();
//!
//! let estimate = MonteCarloPricer::new().price(&params).unwrap();
//! assert!(estimate.price > 9.0 && estimate.price < 12.0);
//! assert!(estimate.ci_lower <= estimate.price && estimate.price <= estimate.ci_upper);
//! ```
//!
//! Build a volatility/maturity price surface:
//! ```rust
//! use ferromonte::core::{OptionType, SimulationParameters};
//! use ferromonte::engines::monte_carlo::MonteCarloPricer;
//! use ferromonte::engines::surface::{PriceSurfaceGenerator, SurfaceConfig};
//!
//! let base = SimulationParameters::builder()
//!     .spot(100.0)
//!     .strike(100.0)
//!     .maturity(1.0)
//!     .rate(0.05)
//!     .vol(0.2)
//!     .num_simulations(2_000)
//!     .option_type(OptionType::Call)
//!     .build()
//!     .unwrap();
//!
//! let surface = PriceSurfaceGenerator::new(MonteCarloPricer::new())
//!     .with_config(SurfaceConfig { vol_points: 5, maturity_points: 5 })
//!     .generate(&base)
//!     .unwrap();
//! assert_eq!(surface.prices.len(), 5);
//! assert_eq!(surface.prices[0].len(), 5);
//! ```

pub mod core;
pub mod engines;
pub mod math;
pub mod mc;
pub mod models;
pub mod pricing;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{OptionType, PriceEstimate, PricingError, SimulationParameters};
    pub use crate::engines::monte_carlo::MonteCarloPricer;
    pub use crate::engines::surface::{PriceSurface, PriceSurfaceGenerator, SurfaceConfig};
    pub use crate::math::ShockSource;
    pub use crate::mc::simulation::{simulate_paths, terminal_prices, PathMatrix};
}
