//! Path-level Monte Carlo simulation primitives.

pub mod simulation;

pub use simulation::{simulate_paths, terminal_prices, PathMatrix};
