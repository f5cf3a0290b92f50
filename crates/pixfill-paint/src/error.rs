//! Error types for sampling and painting.

use pixfill_core::RasterError;
use std::error::Error;
use std::fmt;

/// Errors from [`ChannelSampler`](crate::ChannelSampler) reads and writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleError {
    /// A written vector does not have one sample per channel.
    ChannelCountMismatch {
        /// Channels at the address.
        expected: usize,
        /// Samples supplied.
        actual: usize,
    },
    /// The underlying raster rejected the access.
    Raster(RasterError),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelCountMismatch { expected, actual } => {
                write!(f, "expected {expected} channel values, got {actual}")
            }
            Self::Raster(e) => write!(f, "raster access: {e}"),
        }
    }
}

impl Error for SampleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Raster(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for SampleError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

/// Errors from [`FloodFiller::fill`](crate::FloodFiller::fill).
///
/// All variants are raised before the first write, except
/// [`Sample`](Self::Sample) coming from a raster that fails mid-fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FillError {
    /// The seed lies outside the (U, V) plane.
    SeedOutOfBounds {
        /// Seed U coordinate.
        u: i64,
        /// Seed V coordinate.
        v: i64,
    },
    /// Reading or writing a channel vector failed.
    Sample(SampleError),
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeedOutOfBounds { u, v } => write!(f, "seed ({u}, {v}) is off the plane"),
            Self::Sample(e) => write!(f, "sampling failed: {e}"),
        }
    }
}

impl Error for FillError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sample(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SampleError> for FillError {
    fn from(e: SampleError) -> Self {
        Self::Sample(e)
    }
}
