//! Interaction layer for pixfill.
//!
//! Turns screen events into raster edits. A dispatcher owns the tools,
//! the shared [`ChannelOptions`] and the display collaborators, and for
//! each mouse event builds a [`ToolTarget`] and calls the active
//! [`Tool`]:
//!
//! - [`FloodFillTool`]: connectivity-bounded fill from the clicked cell
//! - [`ColorPickerTool`]: copy the clicked vector into the options
//! - [`BrushTool`]: freehand strokes of square stamps
//! - [`SprayCanTool`]: randomized dot bursts
//!
//! Every edit runs to completion on the calling thread and is followed by
//! a [`RasterEvent`] when an [`EventPublisher`] is attached.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod brush;
pub mod canvas;
pub mod config;
pub mod error;
pub mod events;
pub mod flood_tool;
pub mod options;
pub mod picker;
pub mod resolver;
pub mod spray_tool;
pub mod tool;

pub use brush::BrushTool;
pub use canvas::{Canvas, DataPoint, PlaneView, ScreenPoint};
pub use config::{BrushConfig, ConfigError, FloodFillConfig, PlaneAxes, SprayConfig};
pub use error::{ResolveError, ToolError};
pub use events::{EventPublisher, RasterEvent};
pub use flood_tool::FloodFillTool;
pub use options::ChannelOptions;
pub use picker::{ColorPickerTool, PickSlot};
pub use resolver::CoordinateResolver;
pub use spray_tool::SprayCanTool;
pub use tool::{ClickEvent, MouseButton, Tool, ToolTarget};
