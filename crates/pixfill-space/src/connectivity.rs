//! 4- and 8-connected neighbourhoods on the (U, V) plane.

use crate::plane::PlaneBounds;
use smallvec::SmallVec;
use std::fmt;

/// Cardinal offsets: -U, +U, -V, +V.
const OFFSETS_4: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cardinal offsets followed by the four diagonals.
const OFFSETS_8: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Neighbour-adjacency rule for region growth.
///
/// Fixed for the duration of a fill. Neighbours off the plane are
/// omitted, so edge cells have fewer neighbours (corners have 2 under
/// `Four` and 3 under `Eight`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Edge-adjacent cells only (N/S/E/W).
    Four,
    /// Edge- or corner-adjacent cells.
    #[default]
    Eight,
}

impl Connectivity {
    /// The `(du, dv)` offsets of this neighbourhood.
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Eight => &OFFSETS_8,
        }
    }

    /// Maximum number of neighbours a cell can have.
    pub fn degree(self) -> usize {
        self.offsets().len()
    }

    /// The in-plane neighbours of `(u, v)`, in offset order.
    pub fn neighbours(self, u: i64, v: i64, plane: PlaneBounds) -> SmallVec<[(i64, i64); 8]> {
        self.offsets()
            .iter()
            .map(|&(du, dv)| (u + du, v + dv))
            .filter(|&(nu, nv)| plane.contains(nu, nv))
            .collect()
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Four => write!(f, "4-connected"),
            Self::Eight => write!(f, "8-connected"),
        }
    }
}
