//! Core abstraction traits for raster access.
//!
//! The tools never own a raster. They borrow one through these traits for
//! the duration of a single interaction, and the borrow checker enforces
//! the single-writer rule in-process. Callers sharing a raster across
//! threads must add their own synchronization.

use crate::axis::AxisType;
use crate::element::ElementType;
use crate::error::RasterError;
use crate::id::DatasetId;

/// Read-only random access to an n-dimensional raster.
pub trait Raster {
    /// Identity carried by change notifications.
    fn id(&self) -> DatasetId;

    /// Semantic type of every axis, in storage order.
    fn axis_types(&self) -> &[AxisType];

    /// Extent of every axis, in storage order.
    fn extents(&self) -> &[u64];

    /// Native element type of the stored samples.
    fn element_type(&self) -> ElementType;

    /// Read the scalar at a fully specified position.
    ///
    /// `position` must have exactly [`ndim`](Self::ndim) components, each
    /// within its axis extent.
    fn get(&self, position: &[i64]) -> Result<f64, RasterError>;

    /// Number of axes.
    fn ndim(&self) -> usize {
        self.axis_types().len()
    }

    /// Index of the first axis of type `axis`, if the raster has one.
    fn axis_index(&self, axis: AxisType) -> Option<usize> {
        self.axis_types().iter().position(|&t| t == axis)
    }

    /// Whether samples are integer-valued.
    fn is_integer(&self) -> bool {
        self.element_type().is_integer()
    }

    /// Validate `position` against the raster's shape.
    fn check_position(&self, position: &[i64]) -> Result<(), RasterError> {
        let extents = self.extents();
        if position.len() != extents.len() {
            return Err(RasterError::DimensionMismatch {
                expected: extents.len(),
                actual: position.len(),
            });
        }
        let inside = position
            .iter()
            .zip(extents)
            .all(|(&p, &e)| p >= 0 && (p as u64) < e);
        if !inside {
            return Err(RasterError::PositionOutOfBounds {
                position: position.iter().copied().collect(),
                extents: extents.to_vec(),
            });
        }
        Ok(())
    }
}

/// Mutable random access to an n-dimensional raster.
pub trait RasterMut: Raster {
    /// Store `value` at a fully specified position.
    ///
    /// The value is narrowed according to the raster's
    /// [`ElementType`](crate::ElementType), not the caller's.
    fn set(&mut self, position: &[i64], value: f64) -> Result<(), RasterError>;
}

impl<R: Raster + ?Sized> Raster for &R {
    fn id(&self) -> DatasetId {
        (**self).id()
    }

    fn axis_types(&self) -> &[AxisType] {
        (**self).axis_types()
    }

    fn extents(&self) -> &[u64] {
        (**self).extents()
    }

    fn element_type(&self) -> ElementType {
        (**self).element_type()
    }

    fn get(&self, position: &[i64]) -> Result<f64, RasterError> {
        (**self).get(position)
    }
}

impl<R: Raster + ?Sized> Raster for &mut R {
    fn id(&self) -> DatasetId {
        (**self).id()
    }

    fn axis_types(&self) -> &[AxisType] {
        (**self).axis_types()
    }

    fn extents(&self) -> &[u64] {
        (**self).extents()
    }

    fn element_type(&self) -> ElementType {
        (**self).element_type()
    }

    fn get(&self, position: &[i64]) -> Result<f64, RasterError> {
        (**self).get(position)
    }
}

impl<R: RasterMut + ?Sized> RasterMut for &mut R {
    fn set(&mut self, position: &[i64], value: f64) -> Result<(), RasterError> {
        (**self).set(position, value)
    }
}
