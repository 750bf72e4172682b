//! Shared arithmetic for row-major 2D grids.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use cellsoc_core::Coord;

/// Resolve `base + delta` on a single axis under the given edge behavior.
///
/// The sum is taken in `i64`, so no offset can overflow. Absorb returns the
/// raw value, saturated to the `i32` range, even when it is out of range;
/// the caller bounds-checks before use. Saturation never lands in bounds
/// because every extent is at most `i32::MAX`. Wrap reduces modulo `len`.
pub(crate) fn resolve_axis(base: i32, delta: i32, len: u32, edge: EdgeBehavior) -> i32 {
    let raw = i64::from(base) + i64::from(delta);
    match edge {
        EdgeBehavior::Absorb => raw.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        EdgeBehavior::Wrap => raw.rem_euclid(i64::from(len)) as i32,
    }
}

/// Pure range check against the grid extents.
pub(crate) fn in_bounds(coord: Coord, rows: u32, cols: u32) -> bool {
    coord.row >= 0 && coord.row < rows as i32 && coord.col >= 0 && coord.col < cols as i32
}

/// Check that a coordinate is in bounds, producing a descriptive error.
pub(crate) fn check_bounds(coord: Coord, rows: u32, cols: u32) -> Result<(), SpaceError> {
    if in_bounds(coord, rows, cols) {
        Ok(())
    } else {
        Err(SpaceError::CoordOutOfBounds {
            coord,
            bounds: format!("[0, {rows}) x [0, {cols})"),
        })
    }
}

/// Row-major canonical ordering: `(0,0), (0,1), ..., (rows-1, cols-1)`.
pub(crate) fn canonical_ordering_2d(rows: u32, cols: u32) -> Vec<Coord> {
    let mut out = Vec::with_capacity((rows as usize) * (cols as usize));
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            out.push(Coord::new(r, c));
        }
    }
    out
}

/// Position of `coord` in the row-major ordering, or `None` if out of bounds.
pub(crate) fn canonical_rank_2d(coord: Coord, rows: u32, cols: u32) -> Option<usize> {
    if !in_bounds(coord, rows, cols) {
        return None;
    }
    Some((coord.row as usize) * (cols as usize) + (coord.col as usize))
}

/// Inverse of [`canonical_rank_2d`].
pub(crate) fn coord_at_rank_2d(rank: usize, rows: u32, cols: u32) -> Option<Coord> {
    let cols = cols as usize;
    if rank >= (rows as usize) * cols {
        return None;
    }
    Some(Coord::new((rank / cols) as i32, (rank % cols) as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_returns_raw_value() {
        assert_eq!(resolve_axis(0, -1, 5, EdgeBehavior::Absorb), -1);
        assert_eq!(resolve_axis(4, 1, 5, EdgeBehavior::Absorb), 5);
    }

    #[test]
    fn wrap_reduces_modulo_len() {
        assert_eq!(resolve_axis(0, -1, 5, EdgeBehavior::Wrap), 4);
        assert_eq!(resolve_axis(4, 1, 5, EdgeBehavior::Wrap), 0);
        assert_eq!(resolve_axis(0, -11, 5, EdgeBehavior::Wrap), 4);
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        assert_eq!(resolve_axis(2, i32::MAX, 3, EdgeBehavior::Absorb), i32::MAX);
        assert_eq!(resolve_axis(0, i32::MIN, 3, EdgeBehavior::Absorb), i32::MIN);
        // i32::MAX = 3 * 715_827_882 + 1
        assert_eq!(resolve_axis(0, i32::MAX, 3, EdgeBehavior::Wrap), 1);
        assert_eq!(resolve_axis(2, i32::MAX, 3, EdgeBehavior::Wrap), 0);
        assert_eq!(resolve_axis(0, i32::MIN, 3, EdgeBehavior::Wrap), 1);
    }

    #[test]
    fn rank_round_trips_in_bounds() {
        for (i, coord) in canonical_ordering_2d(3, 4).into_iter().enumerate() {
            assert_eq!(canonical_rank_2d(coord, 3, 4), Some(i));
            assert_eq!(coord_at_rank_2d(i, 3, 4), Some(coord));
        }
        assert_eq!(canonical_rank_2d(Coord::new(3, 0), 3, 4), None);
        assert_eq!(coord_at_rank_2d(12, 3, 4), None);
    }

    #[test]
    fn check_bounds_reports_range() {
        let err = check_bounds(Coord::new(0, 9), 2, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "coordinate (0, 9) out of bounds: [0, 2) x [0, 3)"
        );
    }
}
