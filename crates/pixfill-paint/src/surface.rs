//! Width-aware painting through a channel sampler.

use crate::error::SampleError;
use crate::sampler::ChannelSampler;
use pixfill_core::{ChannelVector, Raster, RasterError, RasterMut};
use pixfill_space::{PlaneBounds, RasterAddress};

/// The surface painting tools write through.
///
/// A "pixel" paint stamps a square brush of [`line_width`](Self::line_width)
/// cells centered on the address: offsets `[-(w/2), w - w/2)` along U and
/// V, clipped to the plane. Width 1 writes exactly one cell. Painting is
/// idempotent per address.
#[derive(Debug)]
pub struct PaintSurface<R> {
    sampler: ChannelSampler<R>,
    line_width: u32,
}

impl<R: Raster> PaintSurface<R> {
    /// Wrap a raster with line width 1.
    pub fn new(raster: R) -> Self {
        Self {
            sampler: ChannelSampler::new(raster),
            line_width: 1,
        }
    }

    /// Set the brush width. Zero is treated as 1.
    pub fn set_line_width(&mut self, width: u32) {
        self.line_width = width.max(1);
    }

    /// Current brush width.
    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    /// The sampler used for reads and equality tests.
    pub fn sampler(&self) -> &ChannelSampler<R> {
        &self.sampler
    }

    /// The wrapped raster.
    pub fn raster(&self) -> &R {
        self.sampler.raster()
    }

    /// Unwrap the raster.
    pub fn into_inner(self) -> R {
        self.sampler.into_inner()
    }

    /// Read the channel vector at `address`.
    pub fn read(&self, address: &RasterAddress) -> Result<ChannelVector, SampleError> {
        self.sampler.read(address)
    }

    /// The (U, V) plane that `address` lives on.
    pub fn plane_bounds(&self, address: &RasterAddress) -> Result<PlaneBounds, SampleError> {
        let extents = self.sampler.raster().extents();
        match (extents.get(address.u_axis()), extents.get(address.v_axis())) {
            (Some(&w), Some(&h)) => Ok(PlaneBounds::new(w, h)),
            _ => Err(SampleError::Raster(RasterError::DimensionMismatch {
                expected: extents.len(),
                actual: address.ndim(),
            })),
        }
    }
}

impl<R: RasterMut> PaintSurface<R> {
    /// Mutable access to the wrapped raster.
    pub fn raster_mut(&mut self) -> &mut R {
        self.sampler.raster_mut()
    }

    /// Stamp `vector` around `address`. Returns the number of cells written.
    pub fn paint_pixel(
        &mut self,
        address: &RasterAddress,
        vector: &ChannelVector,
    ) -> Result<usize, SampleError> {
        if self.line_width == 1 {
            self.sampler.write(address, vector)?;
            return Ok(1);
        }

        let plane = self.plane_bounds(address)?;
        let w = i64::from(self.line_width);
        let lo = -(w / 2);
        let hi = w - w / 2;
        let mut written = 0;
        for dv in lo..hi {
            for du in lo..hi {
                let (u, v) = (address.u() + du, address.v() + dv);
                if plane.contains(u, v) {
                    self.sampler.write(&address.at(u, v), vector)?;
                    written += 1;
                }
            }
        }
        Ok(written)
    }

    /// Stamp `vector` along the straight line from `from` to `to`.
    ///
    /// Both addresses must share their fixed axes; only their (U, V)
    /// points differ. Uses Bresenham stepping, so each stamp is one cell
    /// from the previous. Returns the total cells written, counting
    /// overlapping stamps once per stamp.
    pub fn paint_line(
        &mut self,
        from: &RasterAddress,
        to: &RasterAddress,
        vector: &ChannelVector,
    ) -> Result<usize, SampleError> {
        let (mut u, mut v) = (from.u(), from.v());
        let (u1, v1) = (to.u(), to.v());
        let du = (u1 - u).abs();
        let dv = -(v1 - v).abs();
        let su = if u < u1 { 1 } else { -1 };
        let sv = if v < v1 { 1 } else { -1 };
        let mut err = du + dv;
        let mut written = 0;

        loop {
            written += self.paint_pixel(&from.at(u, v), vector)?;
            if u == u1 && v == v1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dv {
                err += dv;
                u += su;
            }
            if e2 <= du {
                err += du;
                v += sv;
            }
        }
        Ok(written)
    }
}
