//! Connectivity-bounded flood fill.
//!
//! Repaints the connected region of the (U, V) plane whose channel
//! vectors exactly equal the seed's original vector. Every fixed axis
//! stays at the seed's coordinate for the whole operation.
//!
//! The match criterion is captured once, before the first write, so the
//! fill is bounded by connectivity and never chains through cells that
//! merely end up equal to the target.

use crate::error::{FillError, SampleError};
use crate::surface::PaintSurface;
use pixfill_core::{ChannelVector, RasterMut};
use pixfill_space::{Connectivity, RasterAddress};

/// Result of a completed fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillOutcome {
    /// Cells repainted with the target vector.
    pub painted: usize,
    /// Cells whose vector was tested.
    pub visited: usize,
}

impl FillOutcome {
    /// Whether the fill left the raster untouched.
    pub fn is_noop(&self) -> bool {
        self.painted == 0
    }
}

/// Worklist-driven region grower.
///
/// Keeps its stack and visited set between calls so repeated fills on
/// the same plane size do not reallocate. Traversal order is
/// depth-first; the painted set does not depend on it.
#[derive(Debug, Default)]
pub struct FloodFiller {
    stack: Vec<(i64, i64)>,
    visited: Vec<bool>,
}

impl FloodFiller {
    /// Create a filler with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flood `target` over the region connected to `seed`.
    ///
    /// The surface's line width is pinned to 1 for the duration of the
    /// fill and restored afterwards. If the seed already holds `target`,
    /// nothing is written.
    ///
    /// # Errors
    ///
    /// - [`FillError::SeedOutOfBounds`] if the seed is off the plane
    /// - [`FillError::Sample`] if `target` has the wrong channel count
    ///   (checked before any write) or the raster rejects an access
    pub fn fill<R: RasterMut>(
        &mut self,
        seed: &RasterAddress,
        connectivity: Connectivity,
        surface: &mut PaintSurface<R>,
        target: &ChannelVector,
    ) -> Result<FillOutcome, FillError> {
        let width = surface.line_width();
        surface.set_line_width(1);
        let result = self.grow(seed, connectivity, surface, target);
        surface.set_line_width(width);
        result
    }

    fn grow<R: RasterMut>(
        &mut self,
        seed: &RasterAddress,
        connectivity: Connectivity,
        surface: &mut PaintSurface<R>,
        target: &ChannelVector,
    ) -> Result<FillOutcome, FillError> {
        let plane = surface.plane_bounds(seed)?;
        if !plane.contains(seed.u(), seed.v()) {
            return Err(FillError::SeedOutOfBounds {
                u: seed.u(),
                v: seed.v(),
            });
        }

        let original = surface.read(seed)?;
        if target.len() != original.len() {
            return Err(SampleError::ChannelCountMismatch {
                expected: original.len(),
                actual: target.len(),
            }
            .into());
        }
        let target = target.quantized(surface.raster().element_type());
        if original == target {
            log::trace!(
                "flood fill at ({}, {}) skipped: seed already {target}",
                seed.u(),
                seed.v()
            );
            return Ok(FillOutcome::default());
        }

        self.stack.clear();
        self.visited.clear();
        self.visited.resize(plane.cell_count(), false);
        self.stack.push((seed.u(), seed.v()));

        let mut outcome = FillOutcome::default();
        while let Some((u, v)) = self.stack.pop() {
            let Some(i) = plane.index(u, v) else {
                continue;
            };
            if self.visited[i] {
                continue;
            }
            self.visited[i] = true;
            outcome.visited += 1;

            let here = seed.at(u, v);
            if surface.read(&here)? != original {
                continue;
            }
            outcome.painted += surface.paint_pixel(&here, &target)?;

            for (nu, nv) in connectivity.neighbours(u, v, plane) {
                if let Some(j) = plane.index(nu, nv) {
                    if !self.visited[j] {
                        self.stack.push((nu, nv));
                    }
                }
            }
        }

        log::debug!(
            "flood fill at ({}, {}) {connectivity}: painted {} of {} visited",
            seed.u(),
            seed.v(),
            outcome.painted,
            outcome.visited
        );
        Ok(outcome)
    }
}
