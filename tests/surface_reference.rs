//! Surface sweep geometry, monotonicity, and reproducibility.

use ferromonte::core::{OptionType, SimulationParameters};
use ferromonte::engines::monte_carlo::MonteCarloPricer;
use ferromonte::engines::surface::{PriceSurfaceGenerator, SurfaceConfig};

fn base_params(num_simulations: usize) -> SimulationParameters {
    SimulationParameters::builder()
        .spot(100.0)
        .strike(100.0)
        .maturity(1.0)
        .rate(0.05)
        .vol(0.2)
        .num_simulations(num_simulations)
        .option_type(OptionType::Call)
        .build()
        .expect("valid parameters")
}

#[test]
fn default_axes_span_the_documented_ranges() {
    let surface = PriceSurfaceGenerator::new(MonteCarloPricer::new())
        .generate(&base_params(500))
        .expect("sweep succeeds");

    assert_eq!(surface.vols.len(), 20);
    assert_eq!(surface.maturities.len(), 20);

    // Base vol 0.2 -> [0.10, 0.30]; base maturity 1.0 -> [0.5, 2.0].
    assert!((surface.vols[0] - 0.10).abs() < 1e-9);
    assert!((surface.vols[19] - 0.30).abs() < 1e-9);
    assert!((surface.maturities[0] - 0.5).abs() < 1e-9);
    assert!((surface.maturities[19] - 2.0).abs() < 1e-9);
}

#[test]
fn call_surface_is_non_decreasing_along_the_vol_axis() {
    let surface = PriceSurfaceGenerator::new(MonteCarloPricer::new())
        .generate(&base_params(4_000))
        .expect("sweep succeeds");

    // Shared shocks across cells make the vol direction near-exactly
    // monotone; the slack only covers floating-point noise at tiny vega.
    for row in &surface.prices {
        for pair in row.windows(2) {
            assert!(
                pair[1] >= pair[0] - 0.02,
                "vol axis decreased: {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn every_cell_is_a_non_negative_price() {
    let surface = PriceSurfaceGenerator::new(MonteCarloPricer::new())
        .with_config(SurfaceConfig {
            vol_points: 8,
            maturity_points: 8,
        })
        .generate(&base_params(1_000))
        .expect("sweep succeeds");
    for row in &surface.prices {
        assert!(row.iter().all(|&p| p >= 0.0));
    }
}

#[test]
fn repeated_sweeps_are_bit_identical() {
    // Cells run concurrently under the parallel feature; per-cell owned
    // shock streams keep the result independent of scheduling.
    let generator = PriceSurfaceGenerator::new(MonteCarloPricer::new()).with_config(SurfaceConfig {
        vol_points: 6,
        maturity_points: 5,
    });
    let base = base_params(2_000);
    let first = generator.generate(&base).expect("sweep succeeds");
    let second = generator.generate(&base).expect("sweep succeeds");
    assert_eq!(first.vols, second.vols);
    assert_eq!(first.maturities, second.maturities);
    assert_eq!(first.prices, second.prices);
}

#[test]
fn put_surface_shares_axes_with_the_call_surface() {
    let generator = PriceSurfaceGenerator::new(MonteCarloPricer::new()).with_config(SurfaceConfig {
        vol_points: 4,
        maturity_points: 4,
    });
    let call_base = base_params(500);
    let mut put_base = call_base.clone();
    put_base.option_type = OptionType::Put;

    let call_surface = generator.generate(&call_base).expect("sweep succeeds");
    let put_surface = generator.generate(&put_base).expect("sweep succeeds");
    assert_eq!(call_surface.vols, put_surface.vols);
    assert_eq!(call_surface.maturities, put_surface.maturities);
}
