//! Snapshot-then-commit stepping for order-independent rules.

use crate::report::StepReport;
use cellsoc_core::{Cell, CellState, Coord};
use cellsoc_grid::Grid;

/// A cell carrying its current state and the state it will take next.
///
/// `pending` is only meaningful between the determine and commit phases of
/// [`step_synchronous`]; outside a tick it equals `current`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncCell<S> {
    current: S,
    pending: S,
}

impl<S: CellState> SyncCell<S> {
    /// A cell in `state` with nothing pending.
    pub fn new(state: S) -> Self {
        Self {
            current: state,
            pending: state,
        }
    }

    /// The state this cell will take at the next commit.
    pub fn pending(&self) -> S {
        self.pending
    }

    /// Record the state this cell will take at the next commit.
    pub fn set_pending(&mut self, next: S) {
        self.pending = next;
    }

    /// Make the pending state current. Returns `true` if the state changed.
    pub fn commit(&mut self) -> bool {
        let changed = self.current != self.pending;
        self.current = self.pending;
        changed
    }
}

impl<S: CellState> Cell for SyncCell<S> {
    type State = S;

    fn state(&self) -> S {
        self.current
    }
}

/// A transition rule whose next state depends only on the previous tick.
///
/// `determine` sees the whole grid as it stood at the start of the tick:
/// no cell has committed yet, so every cell reads the same generation.
pub trait SynchronousRule {
    /// The alphabet the rule operates on.
    type State: CellState;

    /// The next state of the cell at `at`, currently in `current`.
    fn determine(&self, grid: &Grid<SyncCell<Self::State>>, at: Coord, current: Self::State)
        -> Self::State;
}

/// Advance `grid` by one tick under `rule`.
///
/// Runs in two phases. First every cell's next state is determined against
/// the unmodified grid and stored as pending. Then every cell commits. The
/// result is independent of processing order.
pub fn step_synchronous<R: SynchronousRule + ?Sized>(
    rule: &R,
    grid: &mut Grid<SyncCell<R::State>>,
) -> StepReport {
    let next: Vec<R::State> = grid
        .iter()
        .map(|(at, cell)| rule.determine(grid, at, cell.state()))
        .collect();

    let mut report = StepReport::default();
    for (cell, state) in grid.cells_mut().iter_mut().zip(next) {
        cell.set_pending(state);
        if cell.commit() {
            report.cells_changed += 1;
        }
    }
    report
}
