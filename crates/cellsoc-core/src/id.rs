//! Strongly-typed identifiers: the [`Coord`] grid position and [`TickId`].

use std::fmt;

/// An immutable `(row, col)` grid position.
///
/// Coordinates are plain values: equality, hashing, and ordering are by
/// value, and ordering is row-major (row first, then column), matching the
/// canonical cell ordering used everywhere in the workspace.
///
/// A `Coord` may lie outside any particular grid. Producing an
/// out-of-bounds coordinate is normal (see [`Coord::offset`]); dereferencing
/// one is gated by the grid's bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, growing downward.
    pub row: i32,
    /// Column index, growing rightward.
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from a row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The raw coordinate `(row + dr, col + dc)`, saturating at the `i32`
    /// range.
    ///
    /// No wrapping and no bounds checking. Edge handling is the job of the
    /// topology that owns the grid extents.
    ///
    /// ```
    /// use cellsoc_core::Coord;
    ///
    /// assert_eq!(Coord::new(0, 0).offset(-1, 0), Coord::new(-1, 0));
    /// ```
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step. Tick 0 is the
/// freshly seeded grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ordering_is_row_major() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]
        );
    }

    #[test]
    fn display_is_parenthesised_pair() {
        assert_eq!(Coord::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        assert_eq!(Coord::new(1, 0).offset(i32::MAX, 0), Coord::new(i32::MAX, 0));
        assert_eq!(Coord::new(0, -1).offset(0, i32::MIN), Coord::new(0, i32::MIN));
    }

    #[test]
    fn tick_next_increments() {
        assert_eq!(TickId(0).next(), TickId(1));
        assert_eq!(TickId::default(), TickId(0));
    }

    proptest! {
        #[test]
        fn offset_is_invertible(r in -100i32..100, c in -100i32..100, dr in -3i32..=3, dc in -3i32..=3) {
            let at = Coord::new(r, c);
            prop_assert_eq!(at.offset(dr, dc).offset(-dr, -dc), at);
        }
    }
}
