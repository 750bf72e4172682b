//! Single-threaded simulation driver.
//!
//! [`Simulation`] is the primary user-facing API. Each call to
//! [`advance()`](Simulation::advance) runs exactly one tick of the model's
//! update discipline and returns that tick's metrics.
//!
//! # Ownership model
//!
//! The simulation exclusively owns its grid. All mutating methods take
//! `&mut self`, and [`grid()`](Simulation::grid) hands out a shared borrow,
//! so a renderer cannot hold a view across an `advance()` call.
//!
//! # Halting
//!
//! A [`StepError`] from the model means an internal invariant broke. The
//! simulation halts: the grid keeps whatever state the failed tick left
//! (still fully populated) and every later `advance()` returns
//! [`StepError::Halted`] until [`reset()`](Simulation::reset).

use std::time::Instant;

use cellsoc_automaton::{Automaton, StateOf, StepContext};
use cellsoc_core::{Cell, CellState, Coord, StepError, TickId};
use cellsoc_grid::{Grid, GridSnapshot};
use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, trace};

use crate::config::{ConfigError, SimulationConfig};
use crate::metrics::TickMetrics;

// Compile-time assertion: Simulation is Send for any automaton.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check<A: Automaton>() {
        assert_send::<Simulation<A>>();
    }
};

/// A running cellular automaton: one model, one grid, one seeded generator.
///
/// # Example
///
/// ```
/// use cellsoc_core::Coord;
/// use cellsoc_engine::{Simulation, SimulationConfig};
/// use cellsoc_models::{GameOfLife, LifeState};
///
/// let blinker = [(Coord::new(2, 1), 1), (Coord::new(2, 2), 1), (Coord::new(2, 3), 1)];
/// let mut sim = Simulation::new(GameOfLife::conway(), SimulationConfig::new(5, 5, blinker))?;
///
/// sim.advance()?;
/// assert_eq!(sim.state_at(Coord::new(1, 2)), Some(LifeState::Alive));
/// assert_eq!(sim.state_at(Coord::new(2, 1)), Some(LifeState::Dead));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Simulation<A: Automaton> {
    automaton: A,
    config: SimulationConfig,
    grid: Grid<A::Cell>,
    rng: ChaCha8Rng,
    tick: TickId,
    halted: bool,
    last_metrics: TickMetrics,
}

impl<A: Automaton> Simulation<A> {
    /// Build a simulation from `config`.
    ///
    /// Validates the configuration, resolves the topology (the model's
    /// defaults unless the configuration overrides them), and seeds every
    /// cell. Consumes both arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid, a seed code
    /// is not in the model's alphabet, or (under
    /// [`SeedPolicy::RequireComplete`](crate::SeedPolicy::RequireComplete))
    /// a coordinate has no seed.
    pub fn new(automaton: A, config: SimulationConfig) -> Result<Self, ConfigError> {
        let grid = build_grid(&automaton, &config)?;
        debug!(
            model = automaton.name(),
            rows = config.rows,
            cols = config.cols,
            seeds = config.seeds.len(),
            seed = config.seed,
            "simulation constructed"
        );
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            automaton,
            config,
            grid,
            tick: TickId::default(),
            halted: false,
            last_metrics: TickMetrics::default(),
        })
    }

    /// Execute one tick.
    ///
    /// # Errors
    ///
    /// Returns the model's [`StepError`] if the tick fails, after which the
    /// simulation is halted, or [`StepError::Halted`] if it already was.
    pub fn advance(&mut self) -> Result<&TickMetrics, StepError> {
        if self.halted {
            return Err(StepError::Halted { tick: self.tick });
        }
        let next = self.tick.next();
        let start = Instant::now();
        let mut ctx = StepContext::new(&mut self.rng, next);
        match self.automaton.step(&mut self.grid, &mut ctx) {
            Ok(report) => {
                self.tick = next;
                self.last_metrics = TickMetrics {
                    tick: next,
                    total_us: start.elapsed().as_micros() as u64,
                    report,
                };
                trace!(
                    model = self.automaton.name(),
                    tick = next.0,
                    changed = report.cells_changed,
                    moves = report.moves,
                    births = report.births,
                    meals = report.meals,
                    starvations = report.starvations,
                    "tick complete"
                );
                Ok(&self.last_metrics)
            }
            Err(e) => {
                error!(model = self.automaton.name(), tick = next.0, error = %e, "tick failed, halting");
                self.halted = true;
                Err(e)
            }
        }
    }

    /// Execute `ticks` ticks, stopping at the first error.
    ///
    /// Returns the metrics of the last tick run (the previous tick's
    /// metrics if `ticks` is 0).
    pub fn advance_by(&mut self, ticks: u64) -> Result<&TickMetrics, StepError> {
        for _ in 0..ticks {
            self.advance()?;
        }
        Ok(&self.last_metrics)
    }

    /// Advance until a tick changes no cell's state, running at most
    /// `max_ticks` ticks.
    ///
    /// Returns the tick that changed nothing, or `None` if the limit was
    /// reached first. For in-place models a quiet tick is not necessarily a
    /// permanent fixed point.
    pub fn run_until_stable(&mut self, max_ticks: u64) -> Result<Option<TickId>, StepError> {
        for _ in 0..max_ticks {
            let metrics = self.advance()?;
            if metrics.report.is_quiescent() {
                return Ok(Some(metrics.tick));
            }
        }
        Ok(None)
    }

    /// Rebuild the grid from the stored configuration and reseed the
    /// generator with the stored seed. Clears a halt.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.grid = build_grid(&self.automaton, &self.config)?;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.tick = TickId::default();
        self.halted = false;
        self.last_metrics = TickMetrics::default();
        debug!(model = self.automaton.name(), seed = self.config.seed, "simulation reset");
        Ok(())
    }

    /// [`reset()`](Self::reset) with a new generator seed, which is stored
    /// for later resets.
    pub fn reset_with_seed(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.config.seed = seed;
        self.reset()
    }

    /// The current grid, read-only.
    pub fn grid(&self) -> &Grid<A::Cell> {
        &self.grid
    }

    /// The model.
    pub fn automaton(&self) -> &A {
        &self.automaton
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current tick (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The generator seed.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }

    /// Whether a failed tick has halted the simulation.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The state at `coord`, or `None` if out of bounds.
    pub fn state_at(&self, coord: Coord) -> Option<StateOf<A>> {
        self.grid.state_at(coord)
    }

    /// An owned copy of every cell's state code.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::of(&self.grid)
    }

    /// The current grid as a complete seed map, row-major.
    ///
    /// Feeding the result back into a [`SimulationConfig`] with the same
    /// extents rebuilds the current states (auxiliary per-cell data such as
    /// turn counters starts fresh).
    pub fn export_seeds(&self) -> IndexMap<Coord, i32> {
        self.grid
            .iter()
            .map(|(at, cell)| (at, cell.state().code()))
            .collect()
    }
}

impl<A: Automaton + std::fmt::Debug> std::fmt::Debug for Simulation<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("automaton", &self.automaton)
            .field("rows", &self.config.rows)
            .field("cols", &self.config.cols)
            .field("tick", &self.tick)
            .field("seed", &self.config.seed)
            .field("halted", &self.halted)
            .finish()
    }
}

fn build_grid<A: Automaton>(
    automaton: &A,
    config: &SimulationConfig,
) -> Result<Grid<A::Cell>, ConfigError> {
    config.validate()?;
    let topology = config.topology_for(automaton)?;
    config.check_codes(automaton)?;
    Grid::try_from_fn(topology, |at| {
        config
            .initial_state(automaton, at)
            .map(|state| automaton.spawn(state))
    })
}
