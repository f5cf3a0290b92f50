//! pixfill: screen-to-raster addressing and flood fill for n-dimensional rasters.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! pixfill sub-crates. For most users, adding `pixfill` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use pixfill::prelude::*;
//!
//! // A 10x10 gray raster with a wall down column 5.
//! let mut raster = DenseRaster::new(&[(AxisType::X, 10), (AxisType::Y, 10)], ElementType::U8)
//!     .unwrap();
//! for y in 0..10 {
//!     raster.set(&[5, y], 1.0).unwrap();
//! }
//!
//! // Address the cell at (2, 2) and fill its 4-connected region.
//! let roles = AxisRoles::xy(&raster).unwrap();
//! let seed = RasterAddress::new(&roles, 2, 2, &PlanePosition::origin(2)).unwrap();
//! let mut surface = PaintSurface::new(&mut raster);
//! let outcome = FloodFiller::new()
//!     .fill(&seed, Connectivity::Four, &mut surface, &ChannelVector::scalar(9.0, true))
//!     .unwrap();
//!
//! assert_eq!(outcome.painted, 50);
//! assert_eq!(raster.get(&[0, 0]).unwrap(), 9.0);
//! assert_eq!(raster.get(&[7, 0]).unwrap(), 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pixfill-core` | IDs, axis and element types, channel vectors, raster traits |
//! | [`space`] | `pixfill-space` | Axis roles, addresses, plane bounds, connectivity |
//! | [`raster`] | `pixfill-raster` | Dense in-memory rasters |
//! | [`paint`] | `pixfill-paint` | Sampling, paint surfaces, flood fill, spray |
//! | [`tool`] | `pixfill-tool` | Resolver, tools, config and events |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`pixfill-core`).
///
/// Contains [`types::ChannelVector`], [`types::ElementType`] and the
/// [`types::Raster`]/[`types::RasterMut`] access traits.
pub use pixfill_core as types;

/// Axis roles and plane topology (`pixfill-space`).
pub use pixfill_space as space;

/// Dense in-memory rasters (`pixfill-raster`).
pub use pixfill_raster as raster;

/// Sampling and painting engines (`pixfill-paint`).
///
/// [`paint::FloodFiller`] is the region grower; [`paint::PaintSurface`]
/// handles brush widths.
pub use pixfill_paint as paint;

/// Interaction tools (`pixfill-tool`).
///
/// [`tool::FloodFillTool`], [`tool::ColorPickerTool`],
/// [`tool::BrushTool`] and [`tool::SprayCanTool`], plus the
/// [`tool::Canvas`]/[`tool::PlaneView`] seams a display implements.
pub use pixfill_tool as tool;

/// Common imports for typical pixfill usage.
///
/// ```rust
/// use pixfill::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use pixfill_core::{AxisType, ChannelVector, DatasetId, ElementType, Raster, RasterMut};

    // Errors
    pub use pixfill_core::RasterError;
    pub use pixfill_paint::{FillError, SampleError};
    pub use pixfill_space::{AxisError, SpaceError};
    pub use pixfill_tool::{ConfigError, ResolveError, ToolError};

    // Space
    pub use pixfill_space::{AxisRoles, Connectivity, PlaneBounds, PlanePosition, RasterAddress};

    // Raster
    pub use pixfill_raster::DenseRaster;

    // Paint
    pub use pixfill_paint::{ChannelSampler, FillOutcome, FloodFiller, PaintSurface};

    // Tools
    pub use pixfill_tool::{
        BrushConfig, BrushTool, Canvas, ChannelOptions, ClickEvent, ColorPickerTool,
        CoordinateResolver, DataPoint, EventPublisher, FloodFillConfig, FloodFillTool,
        MouseButton, PickSlot, PlaneAxes, PlaneView, RasterEvent, ScreenPoint, SprayCanTool,
        SprayConfig, Tool, ToolTarget,
    };
}
