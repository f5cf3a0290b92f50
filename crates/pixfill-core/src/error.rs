//! Error types for raster access.

use crate::id::Position;
use std::error::Error;
use std::fmt;

/// Errors from raster construction or random access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// A position has the wrong number of components.
    DimensionMismatch {
        /// The raster's dimensionality.
        expected: usize,
        /// The number of components supplied.
        actual: usize,
    },
    /// A position lies outside the raster extent.
    PositionOutOfBounds {
        /// The offending position.
        position: Position,
        /// Extent of every axis.
        extents: Vec<u64>,
    },
    /// Attempted to construct a raster with a zero-length axis or no axes.
    EmptyRaster,
    /// The same semantic axis type was declared twice.
    DuplicateAxis {
        /// The duplicated axis type, rendered for display.
        axis: String,
    },
    /// The total sample count does not fit in memory addressing.
    TooLarge,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "expected {expected}-dimensional position, got {actual}")
            }
            Self::PositionOutOfBounds { position, extents } => {
                write!(f, "position {position:?} out of bounds for extents {extents:?}")
            }
            Self::EmptyRaster => write!(f, "raster must have at least one sample"),
            Self::DuplicateAxis { axis } => write!(f, "axis {axis} declared more than once"),
            Self::TooLarge => write!(f, "raster sample count overflows usize"),
        }
    }
}

impl Error for RasterError {}
