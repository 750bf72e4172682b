//! Edge (boundary) behavior for grid topologies.

/// How a grid resolves neighbour offsets that cross its edges.
///
/// # Examples
///
/// ```
/// use cellsoc_core::Coord;
/// use cellsoc_space::{EdgeBehavior, Neighbourhood, Topology};
///
/// // Absorb: the corner has 2 von Neumann neighbours, the interior has 4.
/// let absorb = Topology::new(4, 4, EdgeBehavior::Absorb, Neighbourhood::Square4).unwrap();
/// assert_eq!(absorb.neighbours(Coord::new(0, 0)).len(), 2);
/// assert_eq!(absorb.neighbours(Coord::new(1, 1)).len(), 4);
///
/// // Wrap: every cell has exactly 4 neighbours (torus).
/// let wrap = Topology::new(4, 4, EdgeBehavior::Wrap, Neighbourhood::Square4).unwrap();
/// assert_eq!(wrap.neighbours(Coord::new(0, 0)).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Bounded grid. Offsets resolve to the raw sum, which may fall outside
    /// the grid; such neighbours are dropped by the bounds check.
    #[default]
    Absorb,
    /// Toroidal grid. Offsets wrap modulo the row and column extents.
    Wrap,
}
