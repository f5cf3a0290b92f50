//! Dense in-memory raster storage for pixfill.
//!
//! [`DenseRaster`] stores every sample as an `f64` in a single flat
//! buffer, first axis fastest, and narrows writes according to its
//! declared [`ElementType`](pixfill_core::ElementType). It is the
//! reference [`Raster`](pixfill_core::Raster) implementation used by the
//! tools' tests and benchmarks; applications with their own image
//! containers implement the traits directly instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;

pub use dense::{DenseRaster, DenseRasterBuilder};
