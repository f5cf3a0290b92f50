//! Connectivity compliance test helpers.
//!
//! These functions verify that a neighbourhood rule satisfies the
//! invariants region growth relies on. Reused by the `Four` and `Eight`
//! test suites.

use crate::connectivity::Connectivity;
use crate::plane::PlaneBounds;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(conn: Connectivity, plane: PlaneBounds) {
    for (u, v) in plane.cells() {
        for nb in conn.neighbours(u, v, plane) {
            let back = conn.neighbours(nb.0, nb.1, plane);
            assert!(
                back.contains(&(u, v)),
                "neighbour symmetry violated: {nb:?} in N({u},{v}) but not the reverse"
            );
        }
    }
}

/// Assert that no cell is its own neighbour.
pub fn assert_no_self_loops(conn: Connectivity, plane: PlaneBounds) {
    for (u, v) in plane.cells() {
        assert!(
            !conn.neighbours(u, v, plane).contains(&(u, v)),
            "({u},{v}) lists itself as a neighbour"
        );
    }
}

/// Assert that neighbour lists contain no duplicates.
pub fn assert_neighbours_unique(conn: Connectivity, plane: PlaneBounds) {
    for (u, v) in plane.cells() {
        let n = conn.neighbours(u, v, plane);
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(unique.len(), n.len(), "duplicate neighbours of ({u},{v})");
    }
}

/// Assert that interior cells have exactly `degree()` neighbours.
pub fn assert_interior_degree(conn: Connectivity, plane: PlaneBounds) {
    for (u, v) in plane.cells() {
        let interior = u > 0
            && v > 0
            && (u as u64) < plane.width() - 1
            && (v as u64) < plane.height() - 1;
        if interior {
            assert_eq!(conn.neighbours(u, v, plane).len(), conn.degree());
        }
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(conn: Connectivity, plane: PlaneBounds) {
    assert_neighbours_symmetric(conn, plane);
    assert_no_self_loops(conn, plane);
    assert_neighbours_unique(conn, plane);
    assert_interior_degree(conn, plane);
}
