//! Benchmark profiles for the pixfill raster tools.
//!
//! Provides pre-built rasters for benchmarking:
//!
//! - [`open_profile`]: a single uniform gray plane
//! - [`maze_profile`]: a gray plane with deterministic scattered walls
//! - [`stack_profile`]: an RGB volume with channel and Z axes interleaved

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pixfill_core::AxisType::{Channel, X, Y, Z};
use pixfill_core::{ElementType, RasterMut};
use pixfill_raster::DenseRaster;

/// A `size x size` U8 plane of zeros.
pub fn open_profile(size: u64) -> DenseRaster {
    DenseRaster::new(&[(X, size), (Y, size)], ElementType::U8)
        .expect("benchmark dimensions are non-zero")
}

/// A `size x size` U8 plane where roughly `wall_percent` of cells are 1.
///
/// Cell `(0, 0)` is always open so fills seeded there have work to do.
pub fn maze_profile(size: u64, wall_percent: u64, seed: u64) -> DenseRaster {
    let mut r = open_profile(size);
    for y in 0..size as i64 {
        for x in 0..size as i64 {
            let i = (y as u64 * size + x as u64) ^ seed;
            let roll = i.wrapping_mul(6364136223846793007).wrapping_add(1442695040888963407) >> 33;
            if roll % 100 < wall_percent && (x, y) != (0, 0) {
                r.set(&[x, y], 1.0).expect("cell inside raster");
            }
        }
    }
    r
}

/// Layout `[X, Channel(3), Y, Z]` of zeros, `size x size x depth`.
pub fn stack_profile(size: u64, depth: u64) -> DenseRaster {
    DenseRaster::builder()
        .axis(X, size)
        .axis(Channel, 3)
        .axis(Y, size)
        .axis(Z, depth)
        .element(ElementType::U8)
        .build()
        .expect("benchmark dimensions are non-zero")
}
