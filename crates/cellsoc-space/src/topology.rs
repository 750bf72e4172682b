//! Bounded 2D grid topology: extents, edge behavior, and neighbourhood.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use crate::neighbourhood::Neighbourhood;
use cellsoc_core::Coord;
use smallvec::SmallVec;

/// A `rows x cols` grid with an edge policy and a neighbourhood shape.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Topologies never resize after construction.
///
/// Canonical ordering is row-major; [`rank`](Self::rank) maps a coordinate
/// to its index in that ordering, which is also its slot in a grid arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
    neighbourhood: Neighbourhood,
}

impl Topology {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a topology with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// or `Err(SpaceError::InvalidNeighbourhood)` for a wrapped
    /// [`Hex6`](Neighbourhood::Hex6) grid with an odd column count (the
    /// column-parity layout cannot close into a torus).
    ///
    /// # Examples
    ///
    /// ```
    /// use cellsoc_core::Coord;
    /// use cellsoc_space::{EdgeBehavior, Neighbourhood, Topology};
    ///
    /// let t = Topology::new(16, 16, EdgeBehavior::Absorb, Neighbourhood::Square8).unwrap();
    /// assert_eq!(t.cell_count(), 256);
    ///
    /// // Moore neighbours of the corner with Absorb: only 3.
    /// assert_eq!(t.neighbours(Coord::new(0, 0)).len(), 3);
    /// ```
    pub fn new(
        rows: u32,
        cols: u32,
        edge: EdgeBehavior,
        neighbourhood: Neighbourhood,
    ) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if neighbourhood == Neighbourhood::Hex6 && edge == EdgeBehavior::Wrap && cols % 2 == 1 {
            return Err(SpaceError::InvalidNeighbourhood {
                reason: format!("wrapped hex grid needs an even column count, got {cols}"),
            });
        }
        Ok(Self {
            rows,
            cols,
            edge,
            neighbourhood,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Neighbourhood shape.
    pub fn neighbourhood(&self) -> &Neighbourhood {
        &self.neighbourhood
    }

    /// Pure range check against the constructed extents.
    ///
    /// This is the sole gate before a coordinate is dereferenced.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        grid2d::in_bounds(coord, self.rows, self.cols)
    }

    /// Like [`is_in_bounds`](Self::is_in_bounds), as a `Result`.
    pub fn check_bounds(&self, coord: Coord) -> Result<(), SpaceError> {
        grid2d::check_bounds(coord, self.rows, self.cols)
    }

    /// Target of `offset` applied to `at`.
    ///
    /// Under [`EdgeBehavior::Wrap`] both axes wrap modulo the extents, so
    /// the result is always in bounds. Under [`EdgeBehavior::Absorb`] the
    /// raw sum is returned and may be out of bounds; callers must check
    /// with [`is_in_bounds`](Self::is_in_bounds) before use. Offsets of any
    /// magnitude are accepted: a sum beyond the `i32` range saturates, which
    /// is always out of bounds.
    ///
    /// ```
    /// use cellsoc_core::Coord;
    /// use cellsoc_space::{EdgeBehavior, Neighbourhood, Topology};
    ///
    /// let torus = Topology::new(5, 7, EdgeBehavior::Wrap, Neighbourhood::Square4).unwrap();
    /// assert_eq!(torus.resolve(Coord::new(0, 0), (-1, 0)), Coord::new(4, 0));
    ///
    /// let plane = Topology::new(5, 7, EdgeBehavior::Absorb, Neighbourhood::Square4).unwrap();
    /// assert_eq!(plane.resolve(Coord::new(0, 0), (-1, 0)), Coord::new(-1, 0));
    /// ```
    pub fn resolve(&self, at: Coord, (dr, dc): (i32, i32)) -> Coord {
        Coord::new(
            grid2d::resolve_axis(at.row, dr, self.rows, self.edge),
            grid2d::resolve_axis(at.col, dc, self.cols, self.edge),
        )
    }

    /// In-bounds neighbours of `at`, in the neighbourhood's offset order.
    ///
    /// On very small toroidal grids several offsets can resolve to the same
    /// cell (or to `at` itself); each resolution is reported.
    pub fn neighbours(&self, at: Coord) -> SmallVec<[Coord; 8]> {
        self.neighbourhood
            .offsets(at)
            .iter()
            .map(|&off| self.resolve(at, off))
            .filter(|&c| self.is_in_bounds(c))
            .collect()
    }

    /// Position of `coord` in the canonical (row-major) ordering.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        grid2d::canonical_rank_2d(coord, self.rows, self.cols)
    }

    /// The coordinate at position `rank` of the canonical ordering.
    pub fn coord_at(&self, rank: usize) -> Option<Coord> {
        grid2d::coord_at_rank_2d(rank, self.rows, self.cols)
    }

    /// All cells in canonical (row-major) order.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        grid2d::canonical_ordering_2d(self.rows, self.cols)
    }
}
