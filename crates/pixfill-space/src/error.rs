//! Error types for axis-role lookup and addressing.

use pixfill_core::AxisType;
use std::error::Error;
use std::fmt;

/// Axis-configuration inconsistencies.
///
/// These are fatal precondition violations: the requested plane axes do
/// not fit the raster, and nothing falls back to a different axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisError {
    /// The raster has no axis of the requested type.
    MissingAxis {
        /// The requested axis type.
        axis: AxisType,
    },
    /// U and V were both mapped to the same axis type.
    SamePlaneAxis {
        /// The duplicated axis type.
        axis: AxisType,
    },
    /// The channel axis cannot be a plane axis.
    ChannelAsPlaneAxis,
    /// Axis types and extents disagree in length.
    ShapeMismatch {
        /// Number of axis types.
        axes: usize,
        /// Number of extents.
        extents: usize,
    },
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAxis { axis } => write!(f, "raster has no {axis} axis"),
            Self::SamePlaneAxis { axis } => {
                write!(f, "plane axes U and V are both {axis}")
            }
            Self::ChannelAsPlaneAxis => write!(f, "channel axis cannot be a plane axis"),
            Self::ShapeMismatch { axes, extents } => {
                write!(f, "{axes} axis types but {extents} extents")
            }
        }
    }
}

impl Error for AxisError {}

/// Errors arising while building a [`RasterAddress`](crate::RasterAddress).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate lies outside its axis extent.
    CoordOutOfBounds {
        /// Raster axis index.
        axis: usize,
        /// The offending coordinate.
        value: i64,
        /// Extent of that axis.
        extent: u64,
    },
    /// The plane position supplied no coordinate for a fixed axis.
    MissingPlanePosition {
        /// Raster axis index with no coordinate.
        axis: usize,
    },
    /// The axis roles themselves are inconsistent.
    Axis(AxisError),
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds {
                axis,
                value,
                extent,
            } => {
                write!(f, "coordinate {value} on axis {axis} outside [0, {extent})")
            }
            Self::MissingPlanePosition { axis } => {
                write!(f, "plane position has no coordinate for axis {axis}")
            }
            Self::Axis(e) => write!(f, "axis configuration: {e}"),
        }
    }
}

impl Error for SpaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Axis(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AxisError> for SpaceError {
    fn from(e: AxisError) -> Self {
        Self::Axis(e)
    }
}
