//! Wa-Tor predator-prey model.
//!
//! Fish and sharks live on a grid of water. Unlike the synchronous models,
//! each tick visits cells one at a time in row-major order and writes every
//! decision straight into the live grid:
//!
//! - **Fish**: if at least `fish_chronon` turns have elapsed and an empty
//!   neighbour exists, a new fish is placed in a random empty neighbour and
//!   the parent's counter resets. Otherwise the fish swaps places with a
//!   random empty neighbour (if any) and its counter increments.
//! - **Shark**: first, if any neighbour is a fish, one is chosen at random
//!   and its slot is replaced by fresh empty water; the shark's counter
//!   resets. Then, if the counter has reached `shark_chronon +
//!   starvation_grace`, the shark starves and its slot becomes empty.
//!   Otherwise it reproduces or moves exactly as a fish does, using
//!   `shark_chronon`.
//!
//! Neighbours are classified when a cell acts, so an actor sees the effects
//! of every actor before it. A cell that moves or is born into a slot later
//! in row-major order acts again in the same tick, and a cell that has
//! already acted can still be eaten or displaced. Both effects are part of
//! the model.
//!
//! Eating and reproducing replace the target slot with a brand-new cell,
//! while moving swaps the actor's own cell (and its counter) into the
//! target slot. The two paths stay separate.

use cellsoc_automaton::{Automaton, StepContext, StepReport, UpdateDiscipline};
use cellsoc_core::{Cell, CellState, Coord, StepError};
use cellsoc_grid::Grid;
use cellsoc_space::{EdgeBehavior, Neighbourhood, SpaceError};
use smallvec::SmallVec;
use tracing::trace;

/// Wa-Tor alphabet. Seed codes: 0 `EMPTY`, 1 `FISH`, 2 `SHARK`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaTorState {
    /// Open water.
    Empty = 0,
    /// Prey.
    Fish = 1,
    /// Predator.
    Shark = 2,
}

impl CellState for WaTorState {
    const ALL: &'static [Self] = &[WaTorState::Empty, WaTorState::Fish, WaTorState::Shark];

    fn code(self) -> i32 {
        self as i32
    }

    fn label(self) -> &'static str {
        match self {
            WaTorState::Empty => "EMPTY",
            WaTorState::Fish => "FISH",
            WaTorState::Shark => "SHARK",
        }
    }
}

/// One Wa-Tor slot: a state plus the turns elapsed since the occupant last
/// reproduced or ate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaTorCell {
    state: WaTorState,
    turns_elapsed: u32,
}

impl WaTorCell {
    /// Open water.
    pub const EMPTY: Self = Self::new(WaTorState::Empty);

    /// A newborn occupant with no turns elapsed.
    pub const fn new(state: WaTorState) -> Self {
        Self::with_turns(state, 0)
    }

    /// An occupant with a given turn counter.
    pub const fn with_turns(state: WaTorState, turns_elapsed: u32) -> Self {
        Self {
            state,
            turns_elapsed,
        }
    }

    /// Turns elapsed since the last reproduction or meal.
    pub fn turns_elapsed(&self) -> u32 {
        self.turns_elapsed
    }
}

impl Cell for WaTorCell {
    type State = WaTorState;

    fn state(&self) -> WaTorState {
        self.state
    }
}

/// The Wa-Tor model. Construct with [`WaTor::builder`].
///
/// ```
/// use cellsoc_models::WaTor;
///
/// let model = WaTor::builder().fish_chronon(3).shark_chronon(5).build().unwrap();
/// assert_eq!(model.starvation_turns(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaTor {
    fish_chronon: u32,
    shark_chronon: u32,
    starvation_grace: u32,
    neighbourhood: Neighbourhood,
    edge: EdgeBehavior,
}

/// Builder for [`WaTor`].
///
/// Defaults: `fish_chronon` 3, `shark_chronon` 5, `starvation_grace` 3,
/// four-neighbour topology with bounded edges.
pub struct WaTorBuilder {
    fish_chronon: u32,
    shark_chronon: u32,
    starvation_grace: u32,
    neighbourhood: Neighbourhood,
    edge: EdgeBehavior,
}

impl WaTor {
    /// Create a new builder for configuring a Wa-Tor model.
    pub fn builder() -> WaTorBuilder {
        WaTorBuilder {
            fish_chronon: 3,
            shark_chronon: 5,
            starvation_grace: 3,
            neighbourhood: Neighbourhood::Square4,
            edge: EdgeBehavior::Absorb,
        }
    }

    /// Turns a fish waits before it may reproduce.
    pub fn fish_chronon(&self) -> u32 {
        self.fish_chronon
    }

    /// Turns a shark waits before it may reproduce.
    pub fn shark_chronon(&self) -> u32 {
        self.shark_chronon
    }

    /// Counter value at which a shark starves.
    pub fn starvation_turns(&self) -> u32 {
        self.shark_chronon + self.starvation_grace
    }

    fn act_fish(
        &self,
        grid: &mut Grid<WaTorCell>,
        ctx: &mut StepContext<'_>,
        at: Coord,
        mut cell: WaTorCell,
        report: &mut StepReport,
    ) -> Result<(), StepError> {
        let Scan { mut empty, .. } = scan(grid, at);
        if cell.turns_elapsed >= self.fish_chronon && !empty.is_empty() {
            self.reproduce(grid, ctx, at, cell, &mut empty, report)
        } else {
            cell.turns_elapsed += 1;
            self.relocate(grid, ctx, at, cell, &mut empty, report)
        }
    }

    fn act_shark(
        &self,
        grid: &mut Grid<WaTorCell>,
        ctx: &mut StepContext<'_>,
        at: Coord,
        mut cell: WaTorCell,
        report: &mut StepReport,
    ) -> Result<(), StepError> {
        let Scan {
            mut empty,
            mut fish,
        } = scan(grid, at);

        if !fish.is_empty() {
            let prey = self.choose(ctx, &mut fish, at, "no fish to eat")?;
            self.place(grid, prey, WaTorCell::EMPTY)?;
            cell.turns_elapsed = 0;
            report.meals += 1;
        }

        if cell.turns_elapsed >= self.starvation_turns() {
            trace!(%at, turns = cell.turns_elapsed, "shark starved");
            self.place(grid, at, WaTorCell::EMPTY)?;
            report.starvations += 1;
            Ok(())
        } else if cell.turns_elapsed >= self.shark_chronon && !empty.is_empty() {
            self.reproduce(grid, ctx, at, cell, &mut empty, report)
        } else {
            cell.turns_elapsed += 1;
            self.relocate(grid, ctx, at, cell, &mut empty, report)
        }
    }

    /// Put a newborn of the parent's kind in a random empty neighbour and
    /// reset the parent's counter.
    fn reproduce(
        &self,
        grid: &mut Grid<WaTorCell>,
        ctx: &mut StepContext<'_>,
        at: Coord,
        mut parent: WaTorCell,
        empty: &mut SmallVec<[Coord; 8]>,
        report: &mut StepReport,
    ) -> Result<(), StepError> {
        let child = self.choose(ctx, empty, at, "no empty slot for offspring")?;
        self.place(grid, child, WaTorCell::new(parent.state))?;
        parent.turns_elapsed = 0;
        self.place(grid, at, parent)?;
        report.births += 1;
        Ok(())
    }

    /// Write the updated actor back, then swap it into a random empty
    /// neighbour if there is one.
    fn relocate(
        &self,
        grid: &mut Grid<WaTorCell>,
        ctx: &mut StepContext<'_>,
        at: Coord,
        actor: WaTorCell,
        empty: &mut SmallVec<[Coord; 8]>,
        report: &mut StepReport,
    ) -> Result<(), StepError> {
        self.place(grid, at, actor)?;
        if empty.is_empty() {
            return Ok(());
        }
        let dest = self.choose(ctx, empty, at, "no empty slot to move into")?;
        grid.swap(at, dest).map_err(|e| self.violation(at, e))?;
        report.moves += 1;
        Ok(())
    }

    fn choose(
        &self,
        ctx: &mut StepContext<'_>,
        candidates: &mut SmallVec<[Coord; 8]>,
        at: Coord,
        reason: &str,
    ) -> Result<Coord, StepError> {
        ctx.take_uniform(candidates)
            .ok_or_else(|| StepError::InvariantViolated {
                model: self.name().to_string(),
                coord: at,
                reason: reason.to_string(),
            })
    }

    fn place(&self, grid: &mut Grid<WaTorCell>, at: Coord, cell: WaTorCell) -> Result<(), StepError> {
        grid.put(at, cell).map(drop).map_err(|e| self.violation(at, e))
    }

    fn violation(&self, at: Coord, err: SpaceError) -> StepError {
        StepError::InvariantViolated {
            model: self.name().to_string(),
            coord: at,
            reason: err.to_string(),
        }
    }
}

impl WaTorBuilder {
    /// Turns a fish waits before it may reproduce (default: 3).
    pub fn fish_chronon(mut self, turns: u32) -> Self {
        self.fish_chronon = turns;
        self
    }

    /// Turns a shark waits before it may reproduce (default: 5).
    pub fn shark_chronon(mut self, turns: u32) -> Self {
        self.shark_chronon = turns;
        self
    }

    /// Extra turns beyond `shark_chronon` a shark survives without eating
    /// (default: 3). Must be at least 1.
    pub fn starvation_grace(mut self, turns: u32) -> Self {
        self.starvation_grace = turns;
        self
    }

    /// Neighbourhood used to find prey and open water (default: `Square4`).
    pub fn neighbourhood(mut self, neighbourhood: Neighbourhood) -> Self {
        self.neighbourhood = neighbourhood;
        self
    }

    /// Edge behavior (default: `Absorb`).
    pub fn edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Build the model, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `starvation_grace` is 0 (a shark would starve before it could
    ///   ever reproduce)
    /// - `shark_chronon + starvation_grace` overflows `u32`
    pub fn build(self) -> Result<WaTor, String> {
        if self.starvation_grace == 0 {
            return Err("starvation_grace must be at least 1".to_string());
        }
        if self.shark_chronon.checked_add(self.starvation_grace).is_none() {
            return Err(format!(
                "shark_chronon ({}) + starvation_grace ({}) overflows",
                self.shark_chronon, self.starvation_grace
            ));
        }
        Ok(WaTor {
            fish_chronon: self.fish_chronon,
            shark_chronon: self.shark_chronon,
            starvation_grace: self.starvation_grace,
            neighbourhood: self.neighbourhood,
            edge: self.edge,
        })
    }
}

impl Default for WaTor {
    fn default() -> Self {
        Self {
            fish_chronon: 3,
            shark_chronon: 5,
            starvation_grace: 3,
            neighbourhood: Neighbourhood::Square4,
            edge: EdgeBehavior::Absorb,
        }
    }
}

struct Scan {
    empty: SmallVec<[Coord; 8]>,
    fish: SmallVec<[Coord; 8]>,
}

/// Classify the in-bounds neighbours of `at` as they stand right now.
fn scan(grid: &Grid<WaTorCell>, at: Coord) -> Scan {
    let mut empty = SmallVec::new();
    let mut fish = SmallVec::new();
    for n in grid.neighbours(at) {
        match grid.state_at(n) {
            Some(WaTorState::Empty) => empty.push(n),
            Some(WaTorState::Fish) => fish.push(n),
            _ => {}
        }
    }
    Scan { empty, fish }
}

impl Automaton for WaTor {
    type Cell = WaTorCell;

    fn name(&self) -> &str {
        "wator"
    }

    fn discipline(&self) -> UpdateDiscipline {
        UpdateDiscipline::InPlace
    }

    fn default_edge(&self) -> EdgeBehavior {
        self.edge
    }

    fn default_neighbourhood(&self) -> Neighbourhood {
        self.neighbourhood.clone()
    }

    fn default_state(&self) -> WaTorState {
        WaTorState::Empty
    }

    fn spawn(&self, state: WaTorState) -> WaTorCell {
        WaTorCell::new(state)
    }

    fn step(
        &self,
        grid: &mut Grid<WaTorCell>,
        ctx: &mut StepContext<'_>,
    ) -> Result<StepReport, StepError> {
        let before = grid.states();
        let mut report = StepReport::default();

        let order = grid.topology().canonical_ordering();
        for (rank, at) in order.into_iter().enumerate() {
            let cell = grid.cells()[rank];
            match cell.state {
                WaTorState::Empty => {}
                WaTorState::Fish => self.act_fish(grid, ctx, at, cell, &mut report)?,
                WaTorState::Shark => self.act_shark(grid, ctx, at, cell, &mut report)?,
            }
        }

        report.cells_changed = before
            .iter()
            .zip(grid.cells())
            .filter(|(old, new)| **old != new.state)
            .count();
        Ok(report)
    }
}
