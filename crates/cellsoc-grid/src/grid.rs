//! The [`Grid`] cell arena.

use cellsoc_core::{Cell, Coord};
use cellsoc_space::{SpaceError, Topology};
use smallvec::SmallVec;

/// A fixed-size mapping from every in-bounds coordinate to one cell.
///
/// Cells are stored in row-major order. A cell's position is the slot that
/// holds it: moving a cell means exchanging slot contents with
/// [`swap`](Self::swap), and creating a cell somewhere means replacing that
/// slot's occupant with [`put`](Self::put).
///
/// # Examples
///
/// ```
/// use cellsoc_core::Coord;
/// use cellsoc_grid::Grid;
/// use cellsoc_space::{EdgeBehavior, Neighbourhood, Topology};
///
/// let topo = Topology::new(2, 3, EdgeBehavior::Absorb, Neighbourhood::Square4).unwrap();
/// let mut grid = Grid::from_fn(topo, |c| c.row * 10 + c.col);
/// assert_eq!(grid.get(Coord::new(1, 2)), Some(&12));
///
/// grid.swap(Coord::new(0, 0), Coord::new(1, 2)).unwrap();
/// assert_eq!(grid.get(Coord::new(0, 0)), Some(&12));
/// assert_eq!(grid.get(Coord::new(1, 2)), Some(&0));
/// ```
#[derive(Clone, Debug)]
pub struct Grid<C> {
    topology: Topology,
    cells: Vec<C>,
}

impl<C> Grid<C> {
    /// Build a grid by calling `f` once per coordinate in row-major order.
    pub fn from_fn(topology: Topology, mut f: impl FnMut(Coord) -> C) -> Self {
        let cells = topology.canonical_ordering().into_iter().map(&mut f).collect();
        Self { topology, cells }
    }

    /// Fallible [`from_fn`](Self::from_fn). Stops at the first error.
    pub fn try_from_fn<E>(
        topology: Topology,
        mut f: impl FnMut(Coord) -> Result<C, E>,
    ) -> Result<Self, E> {
        let cells = topology
            .canonical_ordering()
            .into_iter()
            .map(&mut f)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Self { topology, cells })
    }

    /// The grid's topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.topology.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.topology.cols()
    }

    /// Number of cells, always `rows * cols`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Pure range check against the grid extents.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.topology.is_in_bounds(coord)
    }

    /// In-bounds neighbours of `at` under the grid's topology.
    pub fn neighbours(&self, at: Coord) -> SmallVec<[Coord; 8]> {
        self.topology.neighbours(at)
    }

    /// The cell at `coord`, or `None` if out of bounds.
    pub fn get(&self, coord: Coord) -> Option<&C> {
        self.topology.rank(coord).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `coord`, or `None` if out of bounds.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut C> {
        self.topology.rank(coord).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `coord`, returning the previous occupant.
    pub fn put(&mut self, coord: Coord, cell: C) -> Result<C, SpaceError> {
        let i = self.rank_checked(coord)?;
        Ok(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Exchange the cells stored at `a` and `b`.
    ///
    /// The cells themselves are moved, not copied: whatever auxiliary data
    /// they carry travels with them.
    pub fn swap(&mut self, a: Coord, b: Coord) -> Result<(), SpaceError> {
        let i = self.rank_checked(a)?;
        let j = self.rank_checked(b)?;
        self.cells.swap(i, j);
        Ok(())
    }

    /// `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &C)> + '_ {
        self.topology.canonical_ordering().into_iter().zip(self.cells.iter())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Mutable access to all cells in row-major order.
    ///
    /// The slice length is fixed, so the key-set invariant holds.
    pub fn cells_mut(&mut self) -> &mut [C] {
        &mut self.cells
    }

    fn rank_checked(&self, coord: Coord) -> Result<usize, SpaceError> {
        self.topology.check_bounds(coord)?;
        self.topology.rank(coord).ok_or_else(|| SpaceError::CoordOutOfBounds {
            coord,
            bounds: format!("[0, {}) x [0, {})", self.rows(), self.cols()),
        })
    }
}

impl<C: Cell> Grid<C> {
    /// Current state of the cell at `coord`.
    pub fn state_at(&self, coord: Coord) -> Option<C::State> {
        self.get(coord).map(Cell::state)
    }

    /// Number of cells currently in `state`.
    pub fn count_state(&self, state: C::State) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Coordinates of every cell currently in `state`, row-major.
    pub fn coords_in_state(&self, state: C::State) -> Vec<Coord> {
        self.iter()
            .filter(|(_, c)| c.state() == state)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Current states of all cells, row-major.
    pub fn states(&self) -> Vec<C::State> {
        self.cells.iter().map(Cell::state).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellsoc_core::CellState;
    use cellsoc_space::{EdgeBehavior, Neighbourhood};
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Ink {
        Blank,
        Dot,
    }

    impl CellState for Ink {
        const ALL: &'static [Self] = &[Ink::Blank, Ink::Dot];
        fn code(self) -> i32 {
            self as i32
        }
        fn label(self) -> &'static str {
            match self {
                Ink::Blank => "BLANK",
                Ink::Dot => "DOT",
            }
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Tagged {
        ink: Ink,
        tag: u32,
    }

    impl Cell for Tagged {
        type State = Ink;
        fn state(&self) -> Ink {
            self.ink
        }
    }

    fn topo(rows: u32, cols: u32) -> Topology {
        Topology::new(rows, cols, EdgeBehavior::Absorb, Neighbourhood::Square4).unwrap()
    }

    #[test]
    fn from_fn_visits_row_major() {
        let mut seen = Vec::new();
        let grid = Grid::from_fn(topo(2, 2), |c| {
            seen.push(c);
            0u8
        });
        assert_eq!(grid.cell_count(), 4);
        assert_eq!(
            seen,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn try_from_fn_stops_at_first_error() {
        let result: Result<Grid<u8>, Coord> =
            Grid::try_from_fn(topo(3, 3), |c| if c.row == 1 { Err(c) } else { Ok(0) });
        assert_eq!(result.unwrap_err(), Coord::new(1, 0));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let grid = Grid::from_fn(topo(2, 2), |_| 0u8);
        assert!(grid.get(Coord::new(-1, 0)).is_none());
        assert!(grid.get(Coord::new(0, 2)).is_none());
    }

    #[test]
    fn put_returns_previous_and_keeps_size() {
        let mut grid = Grid::from_fn(topo(2, 2), |c| c.col);
        let old = grid.put(Coord::new(1, 1), 9).unwrap();
        assert_eq!(old, 1);
        assert_eq!(grid.get(Coord::new(1, 1)), Some(&9));
        assert_eq!(grid.cell_count(), 4);
    }

    #[test]
    fn put_out_of_bounds_errors() {
        let mut grid = Grid::from_fn(topo(2, 2), |_| 0u8);
        assert!(matches!(
            grid.put(Coord::new(5, 5), 1),
            Err(SpaceError::CoordOutOfBounds { .. })
        ));
    }

    #[test]
    fn swap_moves_auxiliary_data() {
        let mut grid = Grid::from_fn(topo(1, 3), |c| Tagged {
            ink: if c.col == 0 { Ink::Dot } else { Ink::Blank },
            tag: c.col as u32,
        });
        grid.swap(Coord::new(0, 0), Coord::new(0, 2)).unwrap();
        assert_eq!(
            grid.get(Coord::new(0, 2)),
            Some(&Tagged {
                ink: Ink::Dot,
                tag: 0
            })
        );
        assert_eq!(grid.state_at(Coord::new(0, 0)), Some(Ink::Blank));
    }

    #[test]
    fn swap_out_of_bounds_leaves_grid_untouched() {
        let mut grid = Grid::from_fn(topo(1, 2), |c| c.col);
        assert!(grid.swap(Coord::new(0, 0), Coord::new(0, 2)).is_err());
        assert_eq!(grid.cells(), &[0, 1]);
    }

    #[test]
    fn census_helpers() {
        let grid = Grid::from_fn(topo(2, 3), |c| Tagged {
            ink: if (c.row + c.col) % 2 == 0 { Ink::Dot } else { Ink::Blank },
            tag: 0,
        });
        assert_eq!(grid.count_state(Ink::Dot), 3);
        assert_eq!(
            grid.coords_in_state(Ink::Blank),
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 2)]
        );
        assert_eq!(grid.states().len(), 6);
    }

    proptest! {
        #[test]
        fn swaps_preserve_multiset(
            ops in proptest::collection::vec((0i32..4, 0i32..5, 0i32..4, 0i32..5), 0..40),
        ) {
            let mut grid = Grid::from_fn(topo(4, 5), |c| c.row * 5 + c.col);
            for (ar, ac, br, bc) in ops {
                grid.swap(Coord::new(ar, ac), Coord::new(br, bc)).unwrap();
            }
            let mut values = grid.cells().to_vec();
            values.sort();
            prop_assert_eq!(values, (0..20).collect::<Vec<_>>());
        }
    }
}
