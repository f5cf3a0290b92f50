//! Semantic axis types.

use std::fmt;

/// The semantic meaning of a raster axis.
///
/// Rasters declare one `AxisType` per dimension, in storage order. The
/// order is arbitrary: X, Y and Channel may appear anywhere, so callers
/// look axes up by type instead of assuming fixed offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisType {
    /// Horizontal spatial axis.
    X,
    /// Vertical spatial axis.
    Y,
    /// Depth spatial axis.
    Z,
    /// Per-position value components (e.g. color channels).
    Channel,
    /// Time points.
    Time,
    /// An axis with no well-known meaning, distinguished by a label index.
    Unknown(u16),
}

impl AxisType {
    /// Returns `true` for the three spatial axes.
    pub fn is_spatial(self) -> bool {
        matches!(self, Self::X | Self::Y | Self::Z)
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
            Self::Channel => write!(f, "Channel"),
            Self::Time => write!(f, "Time"),
            Self::Unknown(n) => write!(f, "Unknown({n})"),
        }
    }
}
