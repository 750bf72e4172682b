//! Neighbourhood shapes: fixed `(row-delta, col-delta)` offset sets.

use crate::error::SpaceError;
use cellsoc_core::Coord;
use smallvec::SmallVec;

/// An offset list. Eight inline slots cover every built-in shape.
pub type Offsets = SmallVec<[(i32, i32); 8]>;

/// Von Neumann offsets: N, S, W, E.
const SQUARE4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Moore offsets: N, S, W, E, NW, NE, SW, SE.
const SQUARE8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Hex offsets for even columns: N, S, NW, SW, NE, SE.
const HEX_EVEN_COL: [(i32, i32); 6] = [(-1, 0), (1, 0), (-1, -1), (0, -1), (-1, 1), (0, 1)];

/// Hex offsets for odd columns, which sit half a cell lower.
const HEX_ODD_COL: [(i32, i32); 6] = [(-1, 0), (1, 0), (0, -1), (1, -1), (0, 1), (1, 1)];

/// The three cells above: NW, N, NE.
const DOWNWARD: [(i32, i32); 3] = [(-1, -1), (-1, 0), (-1, 1)];

/// Which cells count as a cell's neighbours.
///
/// Offsets are relative to the base cell and listed in a fixed order; rules
/// that scan neighbours see them in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Neighbourhood {
    /// 4-connected (von Neumann): the cardinal directions.
    #[default]
    Square4,
    /// 8-connected (Moore): cardinal plus diagonal directions.
    Square8,
    /// 6-connected hexagonal layout with odd columns shifted half a cell
    /// down. The offsets depend on the base cell's column parity.
    Hex6,
    /// Gravity-style connectivity: a cell is reached only from the three
    /// cells directly above it.
    Downward,
    /// A caller-supplied offset set, built with [`Neighbourhood::custom`].
    Custom(Offsets),
}

impl Neighbourhood {
    /// Largest offset count any neighbourhood may have.
    pub const MAX_DEGREE: usize = 8;

    /// Build a custom neighbourhood.
    ///
    /// Returns `Err(SpaceError::InvalidNeighbourhood)` if the set is empty,
    /// has more than [`MAX_DEGREE`](Self::MAX_DEGREE) offsets, contains
    /// `(0, 0)`, or repeats an offset.
    ///
    /// ```
    /// use cellsoc_space::Neighbourhood;
    ///
    /// let knight = Neighbourhood::custom([(-2, -1), (-2, 1), (2, -1), (2, 1)]).unwrap();
    /// assert_eq!(knight.degree(), 4);
    /// assert!(Neighbourhood::custom([(0, 0)]).is_err());
    /// ```
    pub fn custom(offsets: impl IntoIterator<Item = (i32, i32)>) -> Result<Self, SpaceError> {
        let offsets: Offsets = offsets.into_iter().collect();
        if offsets.is_empty() {
            return Err(SpaceError::InvalidNeighbourhood {
                reason: "custom neighbourhood has no offsets".into(),
            });
        }
        if offsets.len() > Self::MAX_DEGREE {
            return Err(SpaceError::InvalidNeighbourhood {
                reason: format!(
                    "custom neighbourhood has {} offsets, maximum is {}",
                    offsets.len(),
                    Self::MAX_DEGREE
                ),
            });
        }
        if offsets.contains(&(0, 0)) {
            return Err(SpaceError::InvalidNeighbourhood {
                reason: "offset (0, 0) would make a cell its own neighbour".into(),
            });
        }
        for (i, off) in offsets.iter().enumerate() {
            if offsets[..i].contains(off) {
                return Err(SpaceError::InvalidNeighbourhood {
                    reason: format!("offset {off:?} listed twice"),
                });
            }
        }
        Ok(Self::Custom(offsets))
    }

    /// The offsets that apply to the cell at `at`.
    ///
    /// Only [`Hex6`](Self::Hex6) looks at `at` (its column parity); every
    /// other shape returns the same list for all cells.
    pub fn offsets(&self, at: Coord) -> &[(i32, i32)] {
        match self {
            Self::Square4 => &SQUARE4,
            Self::Square8 => &SQUARE8,
            Self::Hex6 => {
                if at.col.rem_euclid(2) == 1 {
                    &HEX_ODD_COL
                } else {
                    &HEX_EVEN_COL
                }
            }
            Self::Downward => &DOWNWARD,
            Self::Custom(offsets) => offsets,
        }
    }

    /// Number of offsets, i.e. the neighbour count of an interior cell.
    pub fn degree(&self) -> usize {
        match self {
            Self::Square4 => SQUARE4.len(),
            Self::Square8 => SQUARE8.len(),
            Self::Hex6 => HEX_EVEN_COL.len(),
            Self::Downward => DOWNWARD.len(),
            Self::Custom(offsets) => offsets.len(),
        }
    }

    /// Whether `b` being a neighbour of `a` implies the converse.
    pub fn is_symmetric(&self) -> bool {
        match self {
            Self::Square4 | Self::Square8 | Self::Hex6 => true,
            Self::Downward => false,
            Self::Custom(offsets) => offsets
                .iter()
                .all(|&(dr, dc)| offsets.contains(&(-dr, -dc))),
        }
    }

    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Square4 => "square4",
            Self::Square8 => "square8",
            Self::Hex6 => "hex6",
            Self::Downward => "downward",
            Self::Custom(_) => "custom",
        }
    }
}
