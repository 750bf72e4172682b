//! Reusable automaton fixtures for engine testing.
//!
//! - [`Flicker`]: a two-state model where every cell toggles each tick.
//! - [`FailingAutomaton`]: wraps [`Flicker`] and fails deterministically
//!   after N successful steps.

use cellsoc_automaton::{
    step_synchronous, Automaton, StepContext, StepReport, SyncCell, SynchronousRule,
    UpdateDiscipline,
};
use cellsoc_core::{CellState, Coord, StepError};
use cellsoc_grid::Grid;
use cellsoc_space::{EdgeBehavior, Neighbourhood};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Two-state alphabet used by the fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Light {
    Dark,
    Lit,
}

impl CellState for Light {
    const ALL: &'static [Self] = &[Light::Dark, Light::Lit];

    fn code(self) -> i32 {
        self as i32
    }

    fn label(self) -> &'static str {
        match self {
            Light::Dark => "DARK",
            Light::Lit => "LIT",
        }
    }
}

/// Every cell toggles every tick, so the grid never reaches a fixed point.
#[derive(Clone, Copy, Debug, Default)]
pub struct Flicker;

impl SynchronousRule for Flicker {
    type State = Light;

    fn determine(&self, _grid: &Grid<SyncCell<Light>>, _at: Coord, current: Light) -> Light {
        match current {
            Light::Dark => Light::Lit,
            Light::Lit => Light::Dark,
        }
    }
}

impl Automaton for Flicker {
    type Cell = SyncCell<Light>;

    fn name(&self) -> &str {
        "flicker"
    }

    fn discipline(&self) -> UpdateDiscipline {
        UpdateDiscipline::SnapshotCommit
    }

    fn default_edge(&self) -> EdgeBehavior {
        EdgeBehavior::Absorb
    }

    fn default_neighbourhood(&self) -> Neighbourhood {
        Neighbourhood::Square4
    }

    fn default_state(&self) -> Light {
        Light::Dark
    }

    fn spawn(&self, state: Light) -> SyncCell<Light> {
        SyncCell::new(state)
    }

    fn step(
        &self,
        grid: &mut Grid<SyncCell<Light>>,
        _ctx: &mut StepContext<'_>,
    ) -> Result<StepReport, StepError> {
        Ok(step_synchronous(self, grid))
    }
}

/// Behaves like [`Flicker`] for `succeed_count` steps, then fails every
/// step after that with [`StepError::InvariantViolated`].
pub struct FailingAutomaton {
    succeed_count: usize,
    calls: AtomicUsize,
}

impl FailingAutomaton {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `step()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Automaton for FailingAutomaton {
    type Cell = SyncCell<Light>;

    fn name(&self) -> &str {
        "failing"
    }

    fn discipline(&self) -> UpdateDiscipline {
        UpdateDiscipline::SnapshotCommit
    }

    fn default_edge(&self) -> EdgeBehavior {
        EdgeBehavior::Absorb
    }

    fn default_neighbourhood(&self) -> Neighbourhood {
        Neighbourhood::Square4
    }

    fn default_state(&self) -> Light {
        Light::Dark
    }

    fn spawn(&self, state: Light) -> SyncCell<Light> {
        SyncCell::new(state)
    }

    fn step(
        &self,
        grid: &mut Grid<SyncCell<Light>>,
        ctx: &mut StepContext<'_>,
    ) -> Result<StepReport, StepError> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(StepError::InvariantViolated {
                model: self.name().to_string(),
                coord: Coord::new(0, 0),
                reason: format!("scripted failure on call {}", n + 1),
            });
        }
        Flicker.step(grid, ctx)
    }
}
