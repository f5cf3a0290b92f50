//! Core types and traits for the pixfill raster tools.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the pixfill workspace:
//! dataset IDs, axis types, element types, channel vectors, error types,
//! and the [`Raster`]/[`RasterMut`] access traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod channel;
pub mod element;
pub mod error;
pub mod id;
pub mod traits;

pub use axis::AxisType;
pub use channel::ChannelVector;
pub use element::ElementType;
pub use error::RasterError;
pub use id::{DatasetId, Position};
pub use traits::{Raster, RasterMut};
