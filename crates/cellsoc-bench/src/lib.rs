//! Benchmark profiles for the cellsoc simulation core.
//!
//! Provides pre-built [`SimulationConfig`] profiles on a 100x100 grid
//! (10K cells), each with a deterministic random seed map:
//!
//! - [`life_profile`]: about a third of the cells alive
//! - [`percolation_profile`]: 60% open, top row percolated
//! - [`ocean_profile`]: 30% fish, 5% sharks on a torus

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cellsoc_core::Coord;
use cellsoc_engine::SimulationConfig;
use cellsoc_space::EdgeBehavior;
use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Side length of every profile grid.
pub const SIDE: u32 = 100;

/// Game of Life soup.
pub fn life_profile(seed: u64) -> SimulationConfig {
    SimulationConfig::new(SIDE, SIDE, random_codes(SIDE, SIDE, &[(0, 2), (1, 1)], seed))
        .with_seed(seed)
}

/// Random site percolation with fluid entering along the top row.
pub fn percolation_profile(seed: u64) -> SimulationConfig {
    let mut seeds = random_codes(SIDE, SIDE, &[(0, 4), (1, 6)], seed);
    for col in 0..SIDE as i32 {
        seeds.insert(Coord::new(0, col), 2);
    }
    SimulationConfig::new(SIDE, SIDE, seeds).with_seed(seed)
}

/// Wa-Tor ocean on a torus.
pub fn ocean_profile(seed: u64) -> SimulationConfig {
    let seeds = random_codes(SIDE, SIDE, &[(0, 65), (1, 30), (2, 5)], seed);
    SimulationConfig::new(SIDE, SIDE, seeds)
        .with_seed(seed)
        .with_edge(EdgeBehavior::Wrap)
}

/// A complete seed map drawing each cell's code from `weights`
/// (`(code, weight)` pairs), deterministic in `seed`.
///
/// # Panics
///
/// Panics if `weights` is empty or sums to zero.
pub fn random_codes(rows: u32, cols: u32, weights: &[(i32, u32)], seed: u64) -> IndexMap<Coord, i32> {
    let total: u32 = weights.iter().map(|&(_, w)| w).sum();
    assert!(total > 0, "weights must not sum to zero");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seeds = IndexMap::with_capacity((rows * cols) as usize);
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            let mut roll = rng.random_range(0..total);
            let code = weights
                .iter()
                .find(|&&(_, w)| {
                    if roll < w {
                        true
                    } else {
                        roll -= w;
                        false
                    }
                })
                .map(|&(code, _)| code)
                .unwrap_or(weights[0].0);
            seeds.insert(Coord::new(r, c), code);
        }
    }
    seeds
}
