//! End-to-end behaviour of the reference models driven through
//! `Simulation`: seeding from sparse maps, ticking, and reading back.

use cellsoc_core::{Coord, TickId};
use cellsoc_engine::{build_simulation, ModelSpec, SeedPolicy, Simulation, SimulationConfig};
use cellsoc_models::{GameOfLife, LifeState, Percolation, PercolationState, WaTor, WaTorState};
use cellsoc_space::{EdgeBehavior, Neighbourhood};
use cellsoc_test_utils::{census, grid_to_art, seeds_from_art, sparse_seeds_from_art};
use proptest::prelude::*;
use std::collections::BTreeSet;

const LIFE: &[(char, LifeState)] = &[('.', LifeState::Dead), ('#', LifeState::Alive)];

fn life_sim(art: &[&str], edge: EdgeBehavior) -> Simulation<GameOfLife> {
    let seeds = sparse_seeds_from_art(art, &[('#', 1)]);
    let config =
        SimulationConfig::new(art.len() as u32, art[0].len() as u32, seeds).with_edge(edge);
    Simulation::new(GameOfLife::conway(), config).unwrap()
}

// ── Game of Life ───────────────────────────────────────────────

#[test]
fn blinker_has_period_two() {
    let horizontal = [".....", ".....", ".###.", ".....", "....."];
    let vertical = [".....", "..#..", "..#..", "..#..", "....."];
    let mut sim = life_sim(&horizontal, EdgeBehavior::Absorb);

    sim.advance().unwrap();
    assert_eq!(grid_to_art(sim.grid(), LIFE), vertical);
    sim.advance().unwrap();
    assert_eq!(grid_to_art(sim.grid(), LIFE), horizontal);
    assert_eq!(sim.current_tick(), TickId(2));
}

#[test]
fn block_is_unchanged() {
    let block = ["....", ".##.", ".##.", "...."];
    let mut sim = life_sim(&block, EdgeBehavior::Absorb);
    let metrics = sim.advance().unwrap();
    assert_eq!(metrics.report.cells_changed, 0);
    assert_eq!(grid_to_art(sim.grid(), LIFE), block);
}

#[test]
fn toroidal_blinker_wraps_across_the_edge() {
    // Rows 4 and 0 touch on a torus: a lone pair dies out.
    let mut sim = life_sim(&["..#..", ".....", ".....", ".....", "..#.."], EdgeBehavior::Wrap);
    sim.advance().unwrap();
    assert_eq!(sim.grid().count_state(LifeState::Alive), 0);

    // A vertical blinker straddling rows 4, 0 and 1.
    let mut sim = life_sim(&["..#..", "..#..", ".....", ".....", "..#.."], EdgeBehavior::Wrap);
    sim.advance().unwrap();
    assert_eq!(
        grid_to_art(sim.grid(), LIFE),
        [".###.", ".....", ".....", ".....", "....."]
    );
}

#[test]
fn hex_life_runs_on_a_wrapped_even_grid() {
    let config = SimulationConfig::new(6, 6, [(Coord::new(2, 2), 1)])
        .with_edge(EdgeBehavior::Wrap)
        .with_neighbourhood(Neighbourhood::Hex6);
    let mut sim = Simulation::new(GameOfLife::conway(), config).unwrap();
    sim.advance().unwrap();
    assert_eq!(sim.grid().count_state(LifeState::Alive), 0);
}

// ── Percolation ────────────────────────────────────────────────

const PERC: &[(char, i32)] = &[('#', 0), ('.', 1), ('~', 2)];

#[test]
fn percolation_reaches_the_bottom_row() {
    let art = ["~....", "#.###", "#...#", "###.#", "..#.."];
    let config = SimulationConfig::new(5, 5, seeds_from_art(&art, PERC))
        .with_seed_policy(SeedPolicy::RequireComplete);
    let mut sim = Simulation::new(Percolation::new(), config).unwrap();
    let settled = sim.run_until_stable(100).unwrap();
    assert!(settled.is_some());
    assert_eq!(sim.state_at(Coord::new(4, 3)), Some(PercolationState::Percolated));
    assert_eq!(sim.state_at(Coord::new(4, 4)), Some(PercolationState::Percolated));
    assert_eq!(sim.state_at(Coord::new(4, 0)), Some(PercolationState::Open));
}

#[test]
fn gravity_percolation_settles_within_rows_plus_cols() {
    let art = ["~~~~~~", "..#...", ".#.#..", "......", "#.#..#"];
    let config = SimulationConfig::new(5, 6, seeds_from_art(&art, PERC));
    let mut sim = Simulation::new(Percolation::gravity(), config).unwrap();
    let settled = sim.run_until_stable(11).unwrap().unwrap();
    assert!(settled.0 <= 11);
    for col in [1, 3, 4] {
        assert_eq!(
            sim.state_at(Coord::new(4, col)),
            Some(PercolationState::Percolated)
        );
    }
}

proptest! {
    #[test]
    fn percolated_region_only_grows(
        codes in proptest::collection::vec(0i32..3, 36),
        ticks in 1usize..12,
    ) {
        let seeds = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| (Coord::new((i / 6) as i32, (i % 6) as i32), code));
        let mut sim = Simulation::new(Percolation::new(), SimulationConfig::new(6, 6, seeds)).unwrap();
        let blocked = sim.grid().coords_in_state(PercolationState::Blocked);
        let mut reached: BTreeSet<Coord> =
            sim.grid().coords_in_state(PercolationState::Percolated).into_iter().collect();
        for _ in 0..ticks {
            sim.advance().unwrap();
            let now: BTreeSet<Coord> =
                sim.grid().coords_in_state(PercolationState::Percolated).into_iter().collect();
            prop_assert!(reached.is_subset(&now));
            prop_assert_eq!(sim.grid().coords_in_state(PercolationState::Blocked), blocked.clone());
            reached = now;
        }
    }
}

// ── Wa-Tor ─────────────────────────────────────────────────────

const OCEAN: &[(char, i32)] = &[('.', 0), ('f', 1), ('S', 2)];

#[test]
fn lone_shark_starves_after_grace_period() {
    let model = WaTor::builder().shark_chronon(2).build().unwrap();
    let config = SimulationConfig::new(1, 1, [(Coord::new(0, 0), 2)]);
    let mut sim = Simulation::new(model, config).unwrap();

    // Counter goes 0 -> 5 without a reset; death on the tick that sees 5.
    sim.advance_by(5).unwrap();
    assert_eq!(sim.state_at(Coord::new(0, 0)), Some(WaTorState::Shark));
    let metrics = sim.advance().unwrap();
    assert_eq!(metrics.report.starvations, 1);
    assert_eq!(sim.state_at(Coord::new(0, 0)), Some(WaTorState::Empty));
}

#[test]
fn sharks_eat_their_way_through_a_school() {
    let art = ["fffff", "ffSff", "fffff"];
    let config = SimulationConfig::new(3, 5, seeds_from_art(&art, OCEAN)).with_seed(5);
    let mut sim = Simulation::new(WaTor::default(), config).unwrap();
    let metrics = sim.advance().unwrap().clone();
    assert!(metrics.report.meals >= 1);
    let counts = census(sim.grid());
    assert_eq!(counts.iter().map(|&(_, n)| n).sum::<usize>(), 15);
    assert!(sim.grid().count_state(WaTorState::Fish) < 14);
}

#[test]
fn same_seed_same_ocean() {
    let art = ["f..S..f.", ".f..f...", "..S...S.", "f...f..f", "...S.f..", "ff......"];
    let run = |seed| {
        let config = SimulationConfig::new(6, 8, seeds_from_art(&art, OCEAN))
            .with_seed(seed)
            .with_edge(EdgeBehavior::Wrap);
        let mut sim = build_simulation(ModelSpec::from_name("wator").unwrap(), config).unwrap();
        for _ in 0..30 {
            sim.advance().unwrap();
        }
        sim.snapshot()
    };
    assert_eq!(run(7), run(7));
}

proptest! {
    #[test]
    fn ocean_never_overflows(
        codes in proptest::collection::vec(0i32..3, 25),
        seed in any::<u64>(),
        wrap in any::<bool>(),
    ) {
        let seeds = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| (Coord::new((i / 5) as i32, (i % 5) as i32), code));
        let edge = if wrap { EdgeBehavior::Wrap } else { EdgeBehavior::Absorb };
        let model = WaTor::builder().fish_chronon(1).shark_chronon(2).build().unwrap();
        let config = SimulationConfig::new(5, 5, seeds).with_seed(seed).with_edge(edge);
        let mut sim = Simulation::new(model, config).unwrap();
        for _ in 0..15 {
            sim.advance().unwrap();
            let occupied = 25 - sim.grid().count_state(WaTorState::Empty);
            prop_assert!(occupied <= 25);
            prop_assert_eq!(sim.export_seeds().len(), 25);
        }
    }
}
