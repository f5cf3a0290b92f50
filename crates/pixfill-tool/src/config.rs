//! Tool configuration, validation, and error types.
//!
//! Each tool is built from a plain config struct with `Default` values
//! matching the classic paint-tool behaviour. [`validate()`] methods
//! check structural invariants up front so the event handlers never see
//! a nonsensical width or rate.
//!
//! [`validate()`]: FloodFillConfig::validate

use std::error::Error;
use std::fmt;

use pixfill_core::AxisType;
use pixfill_paint::spray::MAX_RATE;
use pixfill_paint::SprayCan;
use pixfill_space::{AxisError, Connectivity};

// ── PlaneAxes ──────────────────────────────────────────────────────

/// Which raster axis types map to screen horizontal (U) and vertical (V).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneAxes {
    /// Axis type drawn horizontally. Default: X.
    pub u: AxisType,
    /// Axis type drawn vertically. Default: Y.
    pub v: AxisType,
}

impl Default for PlaneAxes {
    fn default() -> Self {
        Self {
            u: AxisType::X,
            v: AxisType::Y,
        }
    }
}

impl PlaneAxes {
    /// Check that U and V are distinct non-channel axes.
    ///
    /// Whether the raster actually has them is only known at click time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.u == AxisType::Channel || self.v == AxisType::Channel {
            return Err(ConfigError::PlaneAxes(AxisError::ChannelAsPlaneAxis));
        }
        if self.u == self.v {
            return Err(ConfigError::PlaneAxes(AxisError::SamePlaneAxis {
                axis: self.u,
            }));
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a tool configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The plane axes are unusable on any raster.
    PlaneAxes(AxisError),
    /// A brush line width of zero.
    LineWidthZero,
    /// A spray disk width of zero.
    SprayWidthZero,
    /// A spray dot size of zero.
    DotSizeZero,
    /// A spray rate outside `1..=10`.
    RateOutOfRange {
        /// The configured rate.
        rate: u32,
    },
    /// The spray engine rejected the configuration.
    SprayCan {
        /// Builder message.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaneAxes(e) => write!(f, "plane axes: {e}"),
            Self::LineWidthZero => write!(f, "line_width must be at least 1"),
            Self::SprayWidthZero => write!(f, "spray width must be at least 1"),
            Self::DotSizeZero => write!(f, "dot_size must be at least 1"),
            Self::RateOutOfRange { rate } => {
                write!(f, "rate must be in 1..={MAX_RATE}, got {rate}")
            }
            Self::SprayCan { reason } => write!(f, "spray can: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PlaneAxes(e) => Some(e),
            _ => None,
        }
    }
}

// ── FloodFillConfig ────────────────────────────────────────────────

/// Configuration for [`FloodFillTool`](crate::FloodFillTool).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloodFillConfig {
    /// Neighbourhood used for region growth. Default: 8-connected.
    pub connectivity: Connectivity,
    /// Plane axes. Default: X, Y.
    pub plane_axes: PlaneAxes,
}

impl FloodFillConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.plane_axes.validate()
    }
}

// ── BrushConfig ────────────────────────────────────────────────────

/// Configuration for [`BrushTool`](crate::BrushTool).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrushConfig {
    /// Brush width in cells. Default: 1. Minimum: 1.
    pub line_width: u32,
    /// Plane axes. Default: X, Y.
    pub plane_axes: PlaneAxes,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            line_width: 1,
            plane_axes: PlaneAxes::default(),
        }
    }
}

impl BrushConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_width == 0 {
            return Err(ConfigError::LineWidthZero);
        }
        self.plane_axes.validate()
    }
}

// ── SprayConfig ────────────────────────────────────────────────────

/// Configuration for [`SprayCanTool`](crate::SprayCanTool).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SprayConfig {
    /// Spray disk diameter in cells. Default: 22.
    pub width: u32,
    /// Brush width of each dot. Default: 1.
    pub dot_size: u32,
    /// Flow rate, 1 to 10. Default: 6.
    pub rate: u32,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Plane axes. Default: X, Y.
    pub plane_axes: PlaneAxes,
}

impl Default for SprayConfig {
    fn default() -> Self {
        Self {
            width: 22,
            dot_size: 1,
            rate: 6,
            seed: 0,
            plane_axes: PlaneAxes::default(),
        }
    }
}

impl SprayConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::SprayWidthZero);
        }
        if self.dot_size == 0 {
            return Err(ConfigError::DotSizeZero);
        }
        if !(1..=MAX_RATE).contains(&self.rate) {
            return Err(ConfigError::RateOutOfRange { rate: self.rate });
        }
        self.plane_axes.validate()
    }

    /// Validate, then build the spray engine.
    pub fn build_can(&self) -> Result<SprayCan, ConfigError> {
        self.validate()?;
        SprayCan::builder()
            .width(self.width)
            .dot_size(self.dot_size)
            .rate(self.rate)
            .seed(self.seed)
            .build()
            .map_err(|reason| ConfigError::SprayCan { reason })
    }
}
