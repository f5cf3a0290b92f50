//! Error types for resolution and tool dispatch.

use crate::config::ConfigError;
use pixfill_paint::{FillError, SampleError};
use pixfill_space::{AxisError, SpaceError};
use std::error::Error;
use std::fmt;

/// Fatal failures while resolving a click to a raster address.
///
/// Misses (outside the image, outside the plane) are not errors; they
/// resolve to `Ok(None)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The configured plane axes do not fit the raster.
    Axis(AxisError),
    /// The view's plane position does not fit the raster.
    Space(SpaceError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axis(e) => write!(f, "axis configuration: {e}"),
            Self::Space(e) => write!(f, "plane position: {e}"),
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Axis(e) => Some(e),
            Self::Space(e) => Some(e),
        }
    }
}

impl From<AxisError> for ResolveError {
    fn from(e: AxisError) -> Self {
        Self::Axis(e)
    }
}

impl From<SpaceError> for ResolveError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::Axis(e) => Self::Axis(e),
            other => Self::Space(other),
        }
    }
}

/// Errors surfaced by a [`Tool`](crate::Tool) event handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolError {
    /// The click could not be mapped onto the raster.
    Resolve(ResolveError),
    /// The flood fill failed.
    Fill(FillError),
    /// A sample read or write failed.
    Sample(SampleError),
    /// The tool was given an invalid configuration.
    Config(ConfigError),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve(e) => write!(f, "resolve: {e}"),
            Self::Fill(e) => write!(f, "fill: {e}"),
            Self::Sample(e) => write!(f, "sample: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolve(e) => Some(e),
            Self::Fill(e) => Some(e),
            Self::Sample(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<ResolveError> for ToolError {
    fn from(e: ResolveError) -> Self {
        Self::Resolve(e)
    }
}

impl From<FillError> for ToolError {
    fn from(e: FillError) -> Self {
        Self::Fill(e)
    }
}

impl From<SampleError> for ToolError {
    fn from(e: SampleError) -> Self {
        Self::Sample(e)
    }
}

impl From<ConfigError> for ToolError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
