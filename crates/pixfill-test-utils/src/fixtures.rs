//! Reusable raster fixtures.
//!
//! - [`uniform`]: a `w x h` gray raster filled with one value
//! - [`wall`]: zeros split by a full-height column of ones
//! - [`checkerboard`]: alternating 0/1 cells
//! - [`rgb`]: a three-channel raster with the channel axis last
//! - [`shuffled`]: X, Z, Channel, Y, with channel away from the plane
//! - [`diff`]: positions where two rasters disagree

use pixfill_core::AxisType::{Channel, X, Y, Z};
use pixfill_core::{ElementType, Position, Raster, RasterMut};
use pixfill_raster::DenseRaster;

fn gray(w: u64, h: u64) -> DenseRaster {
    DenseRaster::builder()
        .axis(X, w)
        .axis(Y, h)
        .element(ElementType::U8)
        .build()
        .expect("fixture dimensions are non-zero")
}

pub fn uniform(w: u64, h: u64, value: f64) -> DenseRaster {
    let mut r = gray(w, h);
    r.fill(value);
    r
}

/// Zeros with column `x` set to 1.
pub fn wall(w: u64, h: u64, x: i64) -> DenseRaster {
    let mut r = gray(w, h);
    for y in 0..h as i64 {
        r.set(&[x, y], 1.0).expect("wall column inside raster");
    }
    r
}

/// `(x + y) % 2` at every cell, so `(0, 0)` is 0.
pub fn checkerboard(w: u64, h: u64) -> DenseRaster {
    let mut r = gray(w, h);
    for y in 0..h as i64 {
        for x in 0..w as i64 {
            r.set(&[x, y], ((x + y) % 2) as f64)
                .expect("cell inside raster");
        }
    }
    r
}

/// Layout `[X, Y, Channel(3)]`, every pixel set to `color`.
pub fn rgb(w: u64, h: u64, color: [f64; 3]) -> DenseRaster {
    let mut r = DenseRaster::builder()
        .axis(X, w)
        .axis(Y, h)
        .axis(Channel, 3)
        .element(ElementType::U8)
        .build()
        .expect("fixture dimensions are non-zero");
    for y in 0..h as i64 {
        for x in 0..w as i64 {
            for (c, &v) in color.iter().enumerate() {
                r.set(&[x, y, c as i64], v).expect("cell inside raster");
            }
        }
    }
    r
}

/// Layout `[X(w), Z(depth), Channel(channels), Y(h)]`, all zeros.
pub fn shuffled(w: u64, h: u64, depth: u64, channels: u64) -> DenseRaster {
    DenseRaster::builder()
        .axis(X, w)
        .axis(Z, depth)
        .axis(Channel, channels)
        .axis(Y, h)
        .element(ElementType::U16)
        .build()
        .expect("fixture dimensions are non-zero")
}

/// Every position where `a` and `b` hold different samples.
///
/// Both rasters must share a shape.
pub fn diff(a: &DenseRaster, b: &DenseRaster) -> Vec<Position> {
    assert_eq!(a.extents(), b.extents(), "diff needs equal shapes");
    let mut out = Vec::new();
    let mut pos: Position = a.extents().iter().map(|_| 0).collect();
    for (i, (&x, &y)) in a.samples().iter().zip(b.samples()).enumerate() {
        if x != y {
            unravel(i, a.extents(), &mut pos);
            out.push(pos.clone());
        }
    }
    out
}

/// Axis 0 fastest, matching [`DenseRaster`] storage.
fn unravel(mut index: usize, extents: &[u64], pos: &mut Position) {
    for (axis, &extent) in extents.iter().enumerate() {
        pos[axis] = (index % extent as usize) as i64;
        index /= extent as usize;
    }
}
