//! Sampling and painting engines for pixfill.
//!
//! - [`ChannelSampler`]: read/write the channel vector at a [`RasterAddress`]
//! - [`PaintSurface`]: width-aware painting on top of a sampler
//! - [`FloodFiller`]: connectivity-bounded region repaint
//! - [`SprayCan`]: randomized dot spraying
//!
//! All engines borrow the raster through [`Raster`]/[`RasterMut`] and run
//! synchronously to completion on the calling thread.
//!
//! [`RasterAddress`]: pixfill_space::RasterAddress
//! [`Raster`]: pixfill_core::Raster
//! [`RasterMut`]: pixfill_core::RasterMut

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod flood;
pub mod sampler;
pub mod spray;
pub mod surface;

pub use error::{FillError, SampleError};
pub use flood::{FillOutcome, FloodFiller};
pub use sampler::ChannelSampler;
pub use spray::{SprayCan, SprayCanBuilder, SprayOutcome, DOTS_PER_RATE};
pub use surface::PaintSurface;
