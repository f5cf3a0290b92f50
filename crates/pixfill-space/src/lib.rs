//! Raster addressing and plane topology for pixfill.
//!
//! This crate turns a raster's declared axis order into an explicit
//! role table ([`AxisRoles`]) and uses it to build fully specified
//! [`RasterAddress`] values: a (U, V) point on the active image plane,
//! an optional channel axis, and a fixed coordinate on every other axis.
//!
//! # Plane topology
//!
//! - [`PlaneBounds`]: the `width x height` extent of the (U, V) plane
//! - [`Connectivity`]: 4- or 8-connected neighbourhoods, clipped to the plane

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod address;
pub mod connectivity;
pub mod error;
pub mod plane;
pub mod position;
pub mod roles;

#[cfg(test)]
pub(crate) mod compliance;

pub use address::RasterAddress;
pub use connectivity::Connectivity;
pub use error::{AxisError, SpaceError};
pub use plane::PlaneBounds;
pub use position::PlanePosition;
pub use roles::AxisRoles;
