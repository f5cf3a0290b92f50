//! Test utilities and mock collaborators for pixfill development.
//!
//! Provides mock implementations of the display seams ([`Canvas`],
//! [`PlaneView`]), a [`CountingRaster`] wrapper that records every
//! sample access, and raster [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;

use pixfill_core::{AxisType, DatasetId, ElementType, Raster, RasterError, RasterMut};
use pixfill_space::PlanePosition;
use pixfill_tool::{Canvas, DataPoint, PlaneView, ScreenPoint};

/// Mock implementation of [`Canvas`].
///
/// Draws a `width x height` image whose top-left corner sits at
/// `offset` on screen, magnified by `zoom` screen pixels per data cell.
#[derive(Clone, Copy, Debug)]
pub struct MockCanvas {
    pub width: i32,
    pub height: i32,
    pub offset: (i32, i32),
    pub zoom: f64,
}

impl MockCanvas {
    /// One screen pixel per cell, image at the screen origin.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            offset: (0, 0),
            zoom: 1.0,
        }
    }

    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset = (x, y);
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }
}

impl Canvas for MockCanvas {
    fn is_point_in_image(&self, p: ScreenPoint) -> bool {
        let x = p.x - self.offset.0;
        let y = p.y - self.offset.1;
        let w = (f64::from(self.width) * self.zoom) as i32;
        let h = (f64::from(self.height) * self.zoom) as i32;
        (0..w).contains(&x) && (0..h).contains(&y)
    }

    fn screen_to_data(&self, p: ScreenPoint) -> DataPoint {
        DataPoint::new(
            f64::from(p.x - self.offset.0) / self.zoom,
            f64::from(p.y - self.offset.1) / self.zoom,
        )
    }
}

/// Mock implementation of [`PlaneView`] returning a fixed position.
#[derive(Clone, Debug, Default)]
pub struct MockView {
    pub position: PlanePosition,
}

impl MockView {
    pub fn new(coords: impl IntoIterator<Item = i64>) -> Self {
        Self {
            position: PlanePosition::new(coords),
        }
    }

    pub fn origin(ndim: usize) -> Self {
        Self {
            position: PlanePosition::origin(ndim),
        }
    }
}

impl PlaneView for MockView {
    fn plane_position(&self) -> PlanePosition {
        self.position.clone()
    }
}

/// Wraps a raster and counts every `get` and `set`.
#[derive(Debug)]
pub struct CountingRaster<R> {
    inner: R,
    reads: Cell<usize>,
    writes: usize,
}

impl<R> CountingRaster<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
            writes: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Raster> Raster for CountingRaster<R> {
    fn id(&self) -> DatasetId {
        self.inner.id()
    }

    fn axis_types(&self) -> &[AxisType] {
        self.inner.axis_types()
    }

    fn extents(&self) -> &[u64] {
        self.inner.extents()
    }

    fn element_type(&self) -> ElementType {
        self.inner.element_type()
    }

    fn get(&self, position: &[i64]) -> Result<f64, RasterError> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get(position)
    }
}

impl<R: RasterMut> RasterMut for CountingRaster<R> {
    fn set(&mut self, position: &[i64], value: f64) -> Result<(), RasterError> {
        self.writes += 1;
        self.inner.set(position, value)
    }
}
