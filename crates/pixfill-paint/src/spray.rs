//! Randomized dot spraying.
//!
//! Each burst stamps `rate * DOTS_PER_RATE` dots at points drawn
//! uniformly from a disk of diameter `width` around the click. The RNG is
//! a seeded ChaCha8 stream owned by the can, so a given seed and click
//! sequence always produces the same pixels.
//!
//! Constructed via the builder pattern: [`SprayCan::builder`].

use crate::error::SampleError;
use crate::surface::PaintSurface;
use pixfill_core::{ChannelVector, RasterMut};
use pixfill_space::RasterAddress;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Dots emitted per unit of rate in one burst.
pub const DOTS_PER_RATE: u32 = 5;

/// Largest accepted rate.
pub const MAX_RATE: u32 = 10;

/// Result of one spray burst.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SprayOutcome {
    /// Dots that landed on the plane.
    pub dots: usize,
    /// Cells written, counting overlapping dots once per dot.
    pub cells: usize,
}

/// A deterministic spray can.
#[derive(Debug)]
pub struct SprayCan {
    width: u32,
    dot_size: u32,
    rate: u32,
    rng: ChaCha8Rng,
}

/// Builder for [`SprayCan`].
pub struct SprayCanBuilder {
    width: u32,
    dot_size: u32,
    rate: u32,
    seed: u64,
}

impl SprayCan {
    /// Create a builder with width 22, dot size 1, rate 6 and seed 0.
    pub fn builder() -> SprayCanBuilder {
        SprayCanBuilder {
            width: 22,
            dot_size: 1,
            rate: 6,
            seed: 0,
        }
    }

    /// Diameter of the spray disk in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Brush width of each dot.
    pub fn dot_size(&self) -> u32 {
        self.dot_size
    }

    /// Dots per burst divided by [`DOTS_PER_RATE`].
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Dots attempted per burst.
    pub fn dots_per_burst(&self) -> u32 {
        self.rate * DOTS_PER_RATE
    }

    /// Spray one burst of `value` around `center`.
    ///
    /// Dots falling off the plane are dropped. The surface's line width is
    /// set to the dot size for the burst and restored afterwards.
    pub fn spray<R: RasterMut>(
        &mut self,
        center: &RasterAddress,
        surface: &mut PaintSurface<R>,
        value: &ChannelVector,
    ) -> Result<SprayOutcome, SampleError> {
        let width = surface.line_width();
        surface.set_line_width(self.dot_size);
        let result = self.burst(center, surface, value);
        surface.set_line_width(width);
        result
    }

    fn burst<R: RasterMut>(
        &mut self,
        center: &RasterAddress,
        surface: &mut PaintSurface<R>,
        value: &ChannelVector,
    ) -> Result<SprayOutcome, SampleError> {
        let plane = surface.plane_bounds(center)?;
        let radius = f64::from(self.width) / 2.0;
        let mut outcome = SprayOutcome::default();

        for _ in 0..self.dots_per_burst() {
            // sqrt keeps the density uniform over the disk area
            let r = radius * self.rng.random::<f64>().sqrt();
            let theta = self.rng.random_range(0.0..std::f64::consts::TAU);
            let u = center.u() + (r * theta.cos()).round() as i64;
            let v = center.v() + (r * theta.sin()).round() as i64;
            if !plane.contains(u, v) {
                continue;
            }
            outcome.dots += 1;
            outcome.cells += surface.paint_pixel(&center.at(u, v), value)?;
        }

        log::trace!(
            "spray at ({}, {}): {} dots, {} cells",
            center.u(),
            center.v(),
            outcome.dots,
            outcome.cells
        );
        Ok(outcome)
    }
}

impl SprayCanBuilder {
    /// Set the spray disk diameter (default: 22). Must be >= 1.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the brush width of each dot (default: 1). Must be >= 1.
    pub fn dot_size(mut self, dot_size: u32) -> Self {
        self.dot_size = dot_size;
        self
    }

    /// Set the burst rate (default: 6). Must be in `1..=10`.
    pub fn rate(mut self, rate: u32) -> Self {
        self.rate = rate;
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the spray can, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `width` or `dot_size` is zero, or `rate` is
    /// outside `1..=10`.
    pub fn build(self) -> Result<SprayCan, String> {
        if self.width == 0 {
            return Err("width must be >= 1".to_string());
        }
        if self.dot_size == 0 {
            return Err("dot_size must be >= 1".to_string());
        }
        if !(1..=MAX_RATE).contains(&self.rate) {
            return Err(format!("rate must be in 1..={MAX_RATE}, got {}", self.rate));
        }
        Ok(SprayCan {
            width: self.width,
            dot_size: self.dot_size,
            rate: self.rate,
            rng: ChaCha8Rng::seed_from_u64(self.seed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfill_core::AxisType::{X, Y};
    use pixfill_core::{ElementType, Raster};
    use pixfill_raster::DenseRaster;
    use pixfill_space::{AxisRoles, PlanePosition};

    fn canvas(size: u64) -> DenseRaster {
        DenseRaster::new(&[(X, size), (Y, size)], ElementType::U8).unwrap()
    }

    fn center(r: &DenseRaster, u: i64, v: i64) -> RasterAddress {
        let roles = AxisRoles::xy(r).unwrap();
        RasterAddress::new(&roles, u, v, &PlanePosition::origin(r.ndim())).unwrap()
    }

    fn burst(can: &mut SprayCan, r: &mut DenseRaster, u: i64, v: i64) -> SprayOutcome {
        let c = center(r, u, v);
        let mut surface = PaintSurface::new(r);
        can.spray(&c, &mut surface, &ChannelVector::scalar(255.0, true))
            .unwrap()
    }

    // ── Builder ─────────────────────────────────────────────────

    #[test]
    fn builder_defaults() {
        let can = SprayCan::builder().build().unwrap();
        assert_eq!(can.width(), 22);
        assert_eq!(can.dot_size(), 1);
        assert_eq!(can.rate(), 6);
        assert_eq!(can.dots_per_burst(), 30);
    }

    #[test]
    fn builder_rejects_bad_values() {
        assert!(SprayCan::builder().width(0).build().is_err());
        assert!(SprayCan::builder().dot_size(0).build().is_err());
        assert!(SprayCan::builder().rate(0).build().is_err());
        assert!(SprayCan::builder().rate(11).build().is_err());
        assert!(SprayCan::builder().rate(10).build().is_ok());
    }

    // ── Bursts ──────────────────────────────────────────────────

    #[test]
    fn same_seed_same_pixels() {
        let mut a = canvas(64);
        let mut b = canvas(64);
        let mut can_a = SprayCan::builder().seed(7).build().unwrap();
        let mut can_b = SprayCan::builder().seed(7).build().unwrap();
        for _ in 0..3 {
            burst(&mut can_a, &mut a, 32, 32);
            burst(&mut can_b, &mut b, 32, 32);
        }
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn dots_stay_inside_the_disk() {
        let mut r = canvas(64);
        let mut can = SprayCan::builder().width(10).rate(10).seed(3).build().unwrap();
        for _ in 0..5 {
            burst(&mut can, &mut r, 32, 32);
        }
        let mut painted = 0;
        for v in 0..64i64 {
            for u in 0..64i64 {
                if r.get(&[u, v]).unwrap() != 0.0 {
                    painted += 1;
                    let (du, dv) = (u - 32, v - 32);
                    // radius 5 plus half a cell of rounding per axis
                    assert!(du * du + dv * dv <= 32, "dot at ({u},{v})");
                }
            }
        }
        assert!(painted > 0);
    }

    #[test]
    fn every_dot_lands_on_an_open_plane() {
        let mut r = canvas(64);
        let mut can = SprayCan::builder().rate(4).build().unwrap();
        let out = burst(&mut can, &mut r, 32, 32);
        assert_eq!(out.dots, 20);
        assert_eq!(out.cells, 20);
    }

    #[test]
    fn dots_off_the_plane_are_dropped() {
        let mut r = canvas(4);
        let mut can = SprayCan::builder().width(40).rate(10).seed(1).build().unwrap();
        let out = burst(&mut can, &mut r, 0, 0);
        assert!(out.dots < 50);
        assert_eq!(out.cells, out.dots);
    }

    #[test]
    fn dot_size_widens_stamps_and_restores_width() {
        let mut r = canvas(64);
        let c = center(&r, 32, 32);
        let mut can = SprayCan::builder().dot_size(3).rate(1).build().unwrap();
        let mut surface = PaintSurface::new(&mut r);
        surface.set_line_width(2);
        let out = can
            .spray(&c, &mut surface, &ChannelVector::scalar(1.0, true))
            .unwrap();
        assert_eq!(surface.line_width(), 2);
        assert_eq!(out.cells, out.dots * 9);
    }
}
