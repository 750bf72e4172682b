//! Error types for topology construction and coordinate checks.

use cellsoc_core::Coord;
use std::fmt;

/// Errors arising from topology construction or coordinate checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// The neighbourhood cannot be used with this grid.
    InvalidNeighbourhood {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::InvalidNeighbourhood { reason } => {
                write!(f, "invalid neighbourhood: {reason}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
