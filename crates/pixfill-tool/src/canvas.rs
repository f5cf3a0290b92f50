//! Collaborator seams for the display layer.
//!
//! The tools never draw and never own a view. They ask a [`Canvas`] to
//! calibrate screen pixels into data space and a [`PlaneView`] for the
//! slice it is showing.

use pixfill_space::PlanePosition;

/// A mouse position in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    /// Horizontal pixel.
    pub x: i32,
    /// Vertical pixel.
    pub y: i32,
}

impl ScreenPoint {
    /// Point at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A calibrated position in data space along the plane axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    /// Coordinate along U.
    pub x: f64,
    /// Coordinate along V.
    pub y: f64,
}

impl DataPoint {
    /// Point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen-to-data calibration supplied by the display.
pub trait Canvas {
    /// Whether `point` falls on the drawn image.
    fn is_point_in_image(&self, point: ScreenPoint) -> bool;

    /// Data-space coordinate under `point`.
    fn screen_to_data(&self, point: ScreenPoint) -> DataPoint;
}

/// The slice a display currently shows.
pub trait PlaneView {
    /// One coordinate per raster axis.
    fn plane_position(&self) -> PlanePosition;
}

impl<C: Canvas + ?Sized> Canvas for &C {
    fn is_point_in_image(&self, point: ScreenPoint) -> bool {
        (**self).is_point_in_image(point)
    }

    fn screen_to_data(&self, point: ScreenPoint) -> DataPoint {
        (**self).screen_to_data(point)
    }
}

impl<V: PlaneView + ?Sized> PlaneView for &V {
    fn plane_position(&self) -> PlanePosition {
        (**self).plane_position()
    }
}
