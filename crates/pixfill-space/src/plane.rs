//! Extent of the (U, V) image plane.

use crate::error::SpaceError;

/// The `width x height` extent of the (U, V) plane of a raster.
///
/// `u` ranges over `[0, width)` and `v` over `[0, height)`. Flat indices
/// are row-major: `v * width + u`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaneBounds {
    width: u64,
    height: u64,
}

impl PlaneBounds {
    /// Create plane bounds. Either extent may be zero (an empty plane).
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    /// Extent along U.
    pub fn width(&self) -> u64 {
        self.width
    }

    /// Extent along V.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Number of (U, V) cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Whether `(u, v)` lies on the plane.
    pub fn contains(&self, u: i64, v: i64) -> bool {
        u >= 0 && v >= 0 && (u as u64) < self.width && (v as u64) < self.height
    }

    /// Row-major flat index of `(u, v)`, or `None` off the plane.
    pub fn index(&self, u: i64, v: i64) -> Option<usize> {
        if self.contains(u, v) {
            Some(v as usize * self.width as usize + u as usize)
        } else {
            None
        }
    }

    /// Check `(u, v)` and report the first offending axis.
    ///
    /// `u_axis` and `v_axis` are the raster axis indices used in the error.
    pub(crate) fn check(
        &self,
        u: i64,
        v: i64,
        u_axis: usize,
        v_axis: usize,
    ) -> Result<(), SpaceError> {
        if u < 0 || u as u64 >= self.width {
            return Err(SpaceError::CoordOutOfBounds {
                axis: u_axis,
                value: u,
                extent: self.width,
            });
        }
        if v < 0 || v as u64 >= self.height {
            return Err(SpaceError::CoordOutOfBounds {
                axis: v_axis,
                value: v,
                extent: self.height,
            });
        }
        Ok(())
    }

    /// All `(u, v)` cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        (0..self.height as i64).flat_map(move |v| (0..self.width as i64).map(move |u| (u, v)))
    }
}
