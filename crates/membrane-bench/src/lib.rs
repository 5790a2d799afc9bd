//! Benchmark profiles and utilities for the membrane simulation.
//!
//! - [`reference_profile`]: the 100x100 reference drum head
//! - [`stress_profile`]: 512x512 grid (~262K cells) for stress testing
//! - [`scripted_strikes`]: deterministic strike positions via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use membrane_core::GridPoint;
use membrane_sim::MembraneConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The reference drum head: 100x100, 10 sub-steps, damping 0.99, c2 0.25.
pub fn reference_profile() -> MembraneConfig {
    MembraneConfig::default()
}

/// Same physics as [`reference_profile`] on a 512x512 grid.
pub fn stress_profile() -> MembraneConfig {
    MembraneConfig {
        grid_size: 512,
        ..MembraneConfig::default()
    }
}

/// Generate `count` deterministic strike positions for a `grid_size` grid.
///
/// Positions are drawn uniformly from the excitable square
/// `[2, grid_size - 2]²`, so some land outside the circular domain and
/// exercise the rejection path.
///
/// # Panics
///
/// Panics if `grid_size < 5` (the excitable square is empty).
pub fn scripted_strikes(seed: u64, count: usize, grid_size: u32) -> Vec<GridPoint> {
    assert!(grid_size >= 5, "grid too small for strikes: {grid_size}");
    let hi = grid_size as i32 - 2;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| GridPoint::new(rng.random_range(2..=hi), rng.random_range(2..=hi)))
        .collect()
}
