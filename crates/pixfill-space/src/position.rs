//! The view's current position on every raster axis.

use pixfill_core::Position;

/// The slice a view is currently showing, one coordinate per raster axis.
///
/// Indexed by raster axis index. Entries for the plane axes and the
/// channel axis are carried along but ignored when addressing, since
/// those come from the click and the per-channel loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanePosition {
    coords: Position,
}

impl PlanePosition {
    /// Position with the given coordinate for each axis.
    pub fn new(coords: impl IntoIterator<Item = i64>) -> Self {
        Self {
            coords: coords.into_iter().collect(),
        }
    }

    /// All-zero position for an `ndim`-dimensional raster.
    pub fn origin(ndim: usize) -> Self {
        Self::new(std::iter::repeat(0).take(ndim))
    }

    /// Coordinate on `axis`, if the position covers it.
    pub fn get(&self, axis: usize) -> Option<i64> {
        self.coords.get(axis).copied()
    }

    /// Replace the coordinate on `axis`, growing with zeros if needed.
    pub fn set(&mut self, axis: usize, value: i64) {
        if axis >= self.coords.len() {
            self.coords.resize(axis + 1, 0);
        }
        self.coords[axis] = value;
    }

    /// Number of axes covered.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether no axes are covered.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.coords
    }
}
