//! The [`Automaton`] trait and [`UpdateDiscipline`] enum.

use crate::context::StepContext;
use crate::report::StepReport;
use cellsoc_core::{Cell, StepError};
use cellsoc_grid::Grid;
use cellsoc_space::{EdgeBehavior, Neighbourhood};

/// The state alphabet of an automaton's cells.
pub type StateOf<A> = <<A as Automaton>::Cell as Cell>::State;

/// How a model applies its transition rule across the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateDiscipline {
    /// Determine every cell's next state from the prior tick, then commit
    /// all at once. The result does not depend on processing order.
    SnapshotCommit,

    /// Process cells one at a time in row-major order, writing directly
    /// into the live grid. The result depends on processing order.
    InPlace,
}

/// A cellular automaton model.
///
/// # Contract
///
/// - `step()` advances the grid by exactly one tick and leaves every slot
///   occupied. It may only replace or swap cells, never resize the grid.
/// - `step()` is deterministic given the grid and the context's generator.
/// - `&self`: model parameters are immutable; per-cell data lives in
///   [`Self::Cell`](Automaton::Cell).
///
/// # Examples
///
/// A model where every cell copies its own state (nothing ever changes):
///
/// ```
/// use cellsoc_automaton::{step_synchronous, Automaton, StepContext, StepReport,
///     SyncCell, SynchronousRule, UpdateDiscipline};
/// use cellsoc_core::{CellState, Coord, StepError};
/// use cellsoc_grid::Grid;
/// use cellsoc_space::{EdgeBehavior, Neighbourhood};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// struct Stone;
///
/// impl CellState for Stone {
///     const ALL: &'static [Self] = &[Stone];
///     fn code(self) -> i32 { 0 }
///     fn label(self) -> &'static str { "STONE" }
/// }
///
/// struct Still;
///
/// impl SynchronousRule for Still {
///     type State = Stone;
///     fn determine(&self, _: &Grid<SyncCell<Stone>>, _: Coord, current: Stone) -> Stone {
///         current
///     }
/// }
///
/// impl Automaton for Still {
///     type Cell = SyncCell<Stone>;
///     fn name(&self) -> &str { "still" }
///     fn discipline(&self) -> UpdateDiscipline { UpdateDiscipline::SnapshotCommit }
///     fn default_edge(&self) -> EdgeBehavior { EdgeBehavior::Absorb }
///     fn default_neighbourhood(&self) -> Neighbourhood { Neighbourhood::Square4 }
///     fn default_state(&self) -> Stone { Stone }
///     fn spawn(&self, state: Stone) -> SyncCell<Stone> { SyncCell::new(state) }
///     fn step(&self, grid: &mut Grid<SyncCell<Stone>>, _: &mut StepContext<'_>)
///         -> Result<StepReport, StepError>
///     {
///         Ok(step_synchronous(self, grid))
///     }
/// }
///
/// assert_eq!(Still.name(), "still");
/// ```
pub trait Automaton: Send + 'static {
    /// The per-slot payload this model stores in the grid.
    type Cell: Cell;

    /// Human-readable name for logs and error reporting.
    fn name(&self) -> &str;

    /// Which update discipline `step()` follows.
    fn discipline(&self) -> UpdateDiscipline;

    /// Edge behavior used unless the configuration overrides it.
    fn default_edge(&self) -> EdgeBehavior;

    /// Neighbourhood used unless the configuration overrides it.
    fn default_neighbourhood(&self) -> Neighbourhood;

    /// State given to coordinates the seed configuration leaves out.
    fn default_state(&self) -> StateOf<Self>;

    /// A fresh cell in `state`, with all auxiliary data at its initial value.
    fn spawn(&self, state: StateOf<Self>) -> Self::Cell;

    /// Advance `grid` by one tick.
    fn step(
        &self,
        grid: &mut Grid<Self::Cell>,
        ctx: &mut StepContext<'_>,
    ) -> Result<StepReport, StepError>;
}
