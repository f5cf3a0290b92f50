//! Semantic-role lookup table for raster axes.

use crate::error::AxisError;
use crate::plane::PlaneBounds;
use indexmap::IndexMap;
use pixfill_core::{AxisType, Raster};
use smallvec::SmallVec;

/// Maps semantic axis roles to raster axis indices.
///
/// Built once per raster (and rebuilt whenever its axis layout may have
/// changed). Records which axes form the (U, V) plane, where the channel
/// axis sits if there is one, and which axes are held fixed. Nothing here
/// assumes X, Y or Channel occupy particular positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisRoles {
    by_type: IndexMap<AxisType, usize>,
    extents: SmallVec<[u64; 8]>,
    u_axis: usize,
    v_axis: usize,
    channel_axis: Option<usize>,
}

impl AxisRoles {
    /// Roles for a raster with X as U and Y as V.
    pub fn xy<R: Raster + ?Sized>(raster: &R) -> Result<Self, AxisError> {
        Self::for_raster(raster, AxisType::X, AxisType::Y)
    }

    /// Roles for a raster with the given plane axis types.
    pub fn for_raster<R: Raster + ?Sized>(
        raster: &R,
        u: AxisType,
        v: AxisType,
    ) -> Result<Self, AxisError> {
        Self::from_parts(raster.axis_types(), raster.extents(), u, v)
    }

    /// Roles from an explicit axis layout.
    ///
    /// # Errors
    ///
    /// - [`AxisError::ShapeMismatch`] if `axis_types` and `extents` differ in length
    /// - [`AxisError::ChannelAsPlaneAxis`] if `u` or `v` is [`AxisType::Channel`]
    /// - [`AxisError::SamePlaneAxis`] if `u == v`
    /// - [`AxisError::MissingAxis`] if the layout lacks `u` or `v`
    pub fn from_parts(
        axis_types: &[AxisType],
        extents: &[u64],
        u: AxisType,
        v: AxisType,
    ) -> Result<Self, AxisError> {
        if axis_types.len() != extents.len() {
            return Err(AxisError::ShapeMismatch {
                axes: axis_types.len(),
                extents: extents.len(),
            });
        }
        if u == AxisType::Channel || v == AxisType::Channel {
            return Err(AxisError::ChannelAsPlaneAxis);
        }
        if u == v {
            return Err(AxisError::SamePlaneAxis { axis: u });
        }

        let mut by_type = IndexMap::with_capacity(axis_types.len());
        for (index, &ty) in axis_types.iter().enumerate() {
            // First occurrence wins.
            by_type.entry(ty).or_insert(index);
        }

        let u_axis = *by_type
            .get(&u)
            .ok_or(AxisError::MissingAxis { axis: u })?;
        let v_axis = *by_type
            .get(&v)
            .ok_or(AxisError::MissingAxis { axis: v })?;
        let channel_axis = by_type.get(&AxisType::Channel).copied();

        Ok(Self {
            by_type,
            extents: SmallVec::from_slice(extents),
            u_axis,
            v_axis,
            channel_axis,
        })
    }

    /// Number of raster axes.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// Raster axis index of the first axis of type `axis`.
    pub fn index_of(&self, axis: AxisType) -> Option<usize> {
        self.by_type.get(&axis).copied()
    }

    /// Raster axis index mapped to on-screen horizontal.
    pub fn u_axis(&self) -> usize {
        self.u_axis
    }

    /// Raster axis index mapped to on-screen vertical.
    pub fn v_axis(&self) -> usize {
        self.v_axis
    }

    /// Raster axis index of the channel axis, if present.
    pub fn channel_axis(&self) -> Option<usize> {
        self.channel_axis
    }

    /// Number of channels: the channel-axis extent, or 1 if absent.
    pub fn channel_count(&self) -> usize {
        self.channel_axis
            .map_or(1, |axis| self.extents[axis] as usize)
    }

    /// Extent of raster axis `axis`.
    pub fn extent(&self, axis: usize) -> Option<u64> {
        self.extents.get(axis).copied()
    }

    /// The (U, V) plane extent.
    pub fn plane_bounds(&self) -> PlaneBounds {
        PlaneBounds::new(self.extents[self.u_axis], self.extents[self.v_axis])
    }

    /// Axes held fixed during addressing, in ascending index order.
    ///
    /// Every axis that is neither U, V nor the channel axis.
    pub fn fixed_axes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.ndim()).filter(move |&axis| {
            axis != self.u_axis && axis != self.v_axis && Some(axis) != self.channel_axis
        })
    }
}
