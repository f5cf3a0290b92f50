//! Fully specified raster addresses.

use crate::error::SpaceError;
use crate::position::PlanePosition;
use crate::roles::AxisRoles;
use pixfill_core::Position;
use smallvec::SmallVec;

/// A position on an n-dimensional raster, split by axis role.
///
/// Holds the (U, V) point on the image plane, the channel axis (if any)
/// and a fixed coordinate for every remaining axis. A channel vector is
/// read or written by sweeping the channel axis while everything else
/// stays put; see [`position`](Self::position).
///
/// Constructed fresh per interaction. Moving within the plane with
/// [`at`](Self::at) returns a new address and leaves this one untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterAddress {
    u_axis: usize,
    v_axis: usize,
    u: i64,
    v: i64,
    channel_axis: Option<usize>,
    other: SmallVec<[(usize, i64); 4]>,
    ndim: usize,
}

impl RasterAddress {
    /// Build an address at `(u, v)`, taking fixed-axis coordinates from `plane`.
    ///
    /// `plane` is indexed by raster axis index; its entries for the U, V
    /// and channel axes are ignored.
    ///
    /// # Errors
    ///
    /// - [`SpaceError::CoordOutOfBounds`] if `(u, v)` is off the plane or a
    ///   fixed-axis coordinate lies outside its extent
    /// - [`SpaceError::MissingPlanePosition`] if `plane` has no entry for a
    ///   fixed axis
    pub fn new(
        roles: &AxisRoles,
        u: i64,
        v: i64,
        plane: &PlanePosition,
    ) -> Result<Self, SpaceError> {
        roles
            .plane_bounds()
            .check(u, v, roles.u_axis(), roles.v_axis())?;

        let mut other = SmallVec::new();
        for axis in roles.fixed_axes() {
            let value = plane
                .get(axis)
                .ok_or(SpaceError::MissingPlanePosition { axis })?;
            let extent = roles.extent(axis).unwrap_or(0);
            if value < 0 || value as u64 >= extent {
                return Err(SpaceError::CoordOutOfBounds {
                    axis,
                    value,
                    extent,
                });
            }
            other.push((axis, value));
        }

        Ok(Self {
            u_axis: roles.u_axis(),
            v_axis: roles.v_axis(),
            u,
            v,
            channel_axis: roles.channel_axis(),
            other,
            ndim: roles.ndim(),
        })
    }

    /// The same address moved to `(u, v)` on the plane.
    ///
    /// Does not bounds-check; callers test against
    /// [`PlaneBounds`](crate::PlaneBounds) first.
    pub fn at(&self, u: i64, v: i64) -> Self {
        Self {
            u,
            v,
            ..self.clone()
        }
    }

    /// Coordinate along U.
    pub fn u(&self) -> i64 {
        self.u
    }

    /// Coordinate along V.
    pub fn v(&self) -> i64 {
        self.v
    }

    /// Raster axis index of U.
    pub fn u_axis(&self) -> usize {
        self.u_axis
    }

    /// Raster axis index of V.
    pub fn v_axis(&self) -> usize {
        self.v_axis
    }

    /// Raster axis index of the channel axis, if present.
    pub fn channel_axis(&self) -> Option<usize> {
        self.channel_axis
    }

    /// Fixed `(axis, coordinate)` pairs in ascending axis order.
    pub fn other_axes(&self) -> &[(usize, i64)] {
        &self.other
    }

    /// Number of raster axes addressed.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// The full raster position for channel `channel`.
    ///
    /// `channel` is ignored when the raster has no channel axis.
    pub fn position(&self, channel: i64) -> Position {
        let mut pos: Position = SmallVec::from_elem(0, self.ndim);
        pos[self.u_axis] = self.u;
        pos[self.v_axis] = self.v;
        if let Some(c) = self.channel_axis {
            pos[c] = channel;
        }
        for &(axis, value) in &self.other {
            pos[axis] = value;
        }
        pos
    }
}
