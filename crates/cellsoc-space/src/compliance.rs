//! Topology compliance test helpers.
//!
//! These functions verify the invariants every topology must satisfy,
//! whatever its edge behavior and neighbourhood. Reused across the test
//! modules of this crate.

use crate::topology::Topology;
use indexmap::IndexSet;

/// Assert that every reported neighbour is in bounds.
pub fn assert_neighbours_in_bounds(t: &Topology) {
    for coord in t.canonical_ordering() {
        for nb in t.neighbours(coord) {
            assert!(
                t.is_in_bounds(nb),
                "neighbour {nb} of {coord} is out of bounds"
            );
        }
    }
}

/// Assert that no cell reports more neighbours than the shape's degree.
pub fn assert_degree_bounded(t: &Topology) {
    let degree = t.neighbourhood().degree();
    for coord in t.canonical_ordering() {
        let n = t.neighbours(coord).len();
        assert!(n <= degree, "{coord} has {n} neighbours, degree is {degree}");
    }
}

/// For symmetric shapes, assert that `b in N(a)` implies `a in N(b)`.
pub fn assert_neighbours_symmetric(t: &Topology) {
    if !t.neighbourhood().is_symmetric() {
        return;
    }
    for coord in t.canonical_ordering() {
        for nb in t.neighbours(coord) {
            assert!(
                t.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(t: &Topology) {
    assert_eq!(
        t.canonical_ordering(),
        t.canonical_ordering(),
        "canonical_ordering is non-deterministic"
    );
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords.
pub fn assert_canonical_ordering_complete(t: &Topology) {
    let ordering = t.canonical_ordering();
    assert_eq!(
        ordering.len(),
        t.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        t.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), t.cell_count(), "canonical_ordering has duplicates");
}

/// Assert that `rank` and `coord_at` invert each other over the ordering.
pub fn assert_rank_round_trip(t: &Topology) {
    for (i, coord) in t.canonical_ordering().into_iter().enumerate() {
        assert_eq!(t.rank(coord), Some(i), "rank({coord}) != {i}");
        assert_eq!(t.coord_at(i), Some(coord), "coord_at({i}) != {coord}");
    }
    assert_eq!(t.coord_at(t.cell_count()), None);
}

/// Run all compliance checks on a topology.
pub fn run_full_compliance(t: &Topology) {
    assert_neighbours_in_bounds(t);
    assert_degree_bounded(t);
    assert_neighbours_symmetric(t);
    assert_canonical_ordering_deterministic(t);
    assert_canonical_ordering_complete(t);
    assert_rank_round_trip(t);
}
