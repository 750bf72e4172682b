//! Site percolation: fluid spreads from percolated cells into open ones.

use cellsoc_automaton::{
    step_synchronous, Automaton, StepContext, StepReport, SyncCell, SynchronousRule,
    UpdateDiscipline,
};
use cellsoc_core::{CellState, Coord, StepError};
use cellsoc_grid::Grid;
use cellsoc_space::{EdgeBehavior, Neighbourhood};

/// Percolation alphabet. Seed codes: 0 `BLOCKED`, 1 `OPEN`, 2 `PERCOLATED`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PercolationState {
    /// Impassable. Never changes.
    Blocked = 0,
    /// Passable but not yet reached.
    Open = 1,
    /// Reached by the fluid. Never changes.
    Percolated = 2,
}

impl PercolationState {
    /// `Blocked` and `Percolated` have no outgoing transition.
    pub fn is_terminal(self) -> bool {
        !matches!(self, PercolationState::Open)
    }
}

impl CellState for PercolationState {
    const ALL: &'static [Self] = &[
        PercolationState::Blocked,
        PercolationState::Open,
        PercolationState::Percolated,
    ];

    fn code(self) -> i32 {
        self as i32
    }

    fn label(self) -> &'static str {
        match self {
            PercolationState::Blocked => "BLOCKED",
            PercolationState::Open => "OPEN",
            PercolationState::Percolated => "PERCOLATED",
        }
    }
}

/// The percolation model.
///
/// An open cell becomes percolated once any of its neighbours is
/// percolated. The neighbourhood decides the direction fluid can travel:
/// [`Neighbourhood::Square4`] by default, or [`Neighbourhood::Downward`]
/// for gravity-driven flow where fluid only enters a cell from the three
/// cells above it.
///
/// The percolated region only grows, so every run reaches a fixed point.
/// Under gravity flow fluid descends one row per tick, so an `R x C` grid
/// settles within `R + C` ticks. Four- and eight-directional flow can snake
/// through a maze of open cells and is bounded only by the open-cell count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Percolation {
    neighbourhood: Neighbourhood,
    edge: EdgeBehavior,
}

impl Percolation {
    /// Four-directional percolation on a bounded grid.
    pub fn new() -> Self {
        Self {
            neighbourhood: Neighbourhood::Square4,
            edge: EdgeBehavior::Absorb,
        }
    }

    /// Gravity percolation: fluid flows down and diagonally down.
    pub fn gravity() -> Self {
        Self::new().with_neighbourhood(Neighbourhood::Downward)
    }

    /// Replace the default neighbourhood.
    pub fn with_neighbourhood(mut self, neighbourhood: Neighbourhood) -> Self {
        self.neighbourhood = neighbourhood;
        self
    }

    /// Replace the default edge behavior.
    pub fn with_edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }
}

impl Default for Percolation {
    fn default() -> Self {
        Self::new()
    }
}

impl SynchronousRule for Percolation {
    type State = PercolationState;

    fn determine(
        &self,
        grid: &Grid<SyncCell<PercolationState>>,
        at: Coord,
        current: PercolationState,
    ) -> PercolationState {
        if current.is_terminal() {
            return current;
        }
        let reached = grid
            .neighbours(at)
            .into_iter()
            .any(|n| grid.state_at(n) == Some(PercolationState::Percolated));
        if reached {
            PercolationState::Percolated
        } else {
            PercolationState::Open
        }
    }
}

impl Automaton for Percolation {
    type Cell = SyncCell<PercolationState>;

    fn name(&self) -> &str {
        "percolation"
    }

    fn discipline(&self) -> UpdateDiscipline {
        UpdateDiscipline::SnapshotCommit
    }

    fn default_edge(&self) -> EdgeBehavior {
        self.edge
    }

    fn default_neighbourhood(&self) -> Neighbourhood {
        self.neighbourhood.clone()
    }

    fn default_state(&self) -> PercolationState {
        PercolationState::Blocked
    }

    fn spawn(&self, state: PercolationState) -> SyncCell<PercolationState> {
        SyncCell::new(state)
    }

    fn step(
        &self,
        grid: &mut Grid<SyncCell<PercolationState>>,
        _ctx: &mut StepContext<'_>,
    ) -> Result<StepReport, StepError> {
        Ok(step_synchronous(self, grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellsoc_test_utils::{grid_from_art, grid_to_art};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const LEGEND: &[(char, PercolationState)] = &[
        ('#', PercolationState::Blocked),
        ('.', PercolationState::Open),
        ('~', PercolationState::Percolated),
    ];

    fn draw(model: &Percolation, art: &[&str]) -> Grid<SyncCell<PercolationState>> {
        grid_from_art(model, art, EdgeBehavior::Absorb, LEGEND)
    }

    fn percolated(grid: &Grid<SyncCell<PercolationState>>) -> BTreeSet<Coord> {
        grid.coords_in_state(PercolationState::Percolated)
            .into_iter()
            .collect()
    }

    #[test]
    fn fluid_spreads_one_step_per_tick() {
        let model = Percolation::new();
        let mut grid = draw(&model, &["~...", "##.#", "...."]);

        step_synchronous(&model, &mut grid);
        assert_eq!(grid_to_art(&grid, LEGEND), ["~~..", "##.#", "...."]);

        step_synchronous(&model, &mut grid);
        step_synchronous(&model, &mut grid);
        assert_eq!(grid_to_art(&grid, LEGEND), ["~~~~", "##~#", "...."]);
    }

    #[test]
    fn blocked_cells_stop_the_flow() {
        let model = Percolation::new();
        let mut grid = draw(&model, &["~#.", "##.", "..."]);
        for _ in 0..10 {
            step_synchronous(&model, &mut grid);
        }
        assert_eq!(grid_to_art(&grid, LEGEND), ["~#.", "##.", "..."]);
    }

    #[test]
    fn gravity_only_flows_downward() {
        let model = Percolation::gravity();
        let mut grid = draw(&model, &[".....", "..~..", ".....", "....."]);
        step_synchronous(&model, &mut grid);
        assert_eq!(
            grid_to_art(&grid, LEGEND),
            [".....", "..~..", ".~~~.", "....."]
        );
        step_synchronous(&model, &mut grid);
        assert_eq!(
            grid_to_art(&grid, LEGEND),
            [".....", "..~..", ".~~~.", "~~~~~"]
        );
    }

    #[test]
    fn terminal_states() {
        assert!(PercolationState::Blocked.is_terminal());
        assert!(PercolationState::Percolated.is_terminal());
        assert!(!PercolationState::Open.is_terminal());
        assert_eq!(PercolationState::from_code(2), Some(PercolationState::Percolated));
    }

    #[test]
    fn defaults() {
        let model = Percolation::default();
        assert_eq!(model.default_neighbourhood(), Neighbourhood::Square4);
        assert_eq!(model.default_edge(), EdgeBehavior::Absorb);
        assert_eq!(model.default_state(), PercolationState::Blocked);
    }

    fn arb_grid() -> impl Strategy<Value = (u32, u32, Vec<PercolationState>)> {
        (1u32..8, 1u32..8).prop_flat_map(|(rows, cols)| {
            let n = (rows * cols) as usize;
            let states = proptest::sample::select(PercolationState::ALL.to_vec());
            (Just(rows), Just(cols), proptest::collection::vec(states, n))
        })
    }

    fn arb_neighbourhood() -> impl Strategy<Value = Neighbourhood> {
        prop_oneof![
            Just(Neighbourhood::Square4),
            Just(Neighbourhood::Square8),
            Just(Neighbourhood::Downward),
        ]
    }

    proptest! {
        #[test]
        fn percolated_set_grows_and_blocked_never_changes(
            (rows, cols, states) in arb_grid(),
            neighbourhood in arb_neighbourhood(),
        ) {
            let model = Percolation::new().with_neighbourhood(neighbourhood.clone());
            let topo = cellsoc_space::Topology::new(
                rows, cols, EdgeBehavior::Absorb, neighbourhood,
            ).unwrap();
            let mut it = states.iter().copied();
            let mut grid = Grid::from_fn(topo, |_| SyncCell::new(it.next().unwrap()));
            let blocked = grid.coords_in_state(PercolationState::Blocked);

            let limit = grid.cell_count() + 1;
            let mut before = percolated(&grid);
            let mut settled_at = None;
            for t in 1..=limit {
                let report = step_synchronous(&model, &mut grid);
                let after = percolated(&grid);
                prop_assert!(before.is_subset(&after));
                prop_assert_eq!(&grid.coords_in_state(PercolationState::Blocked), &blocked);
                before = after;
                if report.is_quiescent() {
                    settled_at = Some(t);
                    break;
                }
            }
            prop_assert!(settled_at.is_some(), "no fixed point within {} ticks", limit);
            if model.default_neighbourhood() == Neighbourhood::Downward {
                prop_assert!(settled_at.unwrap_or(usize::MAX) <= (rows + cols) as usize);
            }
        }
    }
}
