//! Per-address channel vector access.

use crate::error::SampleError;
use pixfill_core::{ChannelVector, Raster, RasterError, RasterMut};
use pixfill_space::RasterAddress;

/// Reads and writes whole channel vectors at a [`RasterAddress`].
///
/// Each call sweeps the channel axis at the address's (U, V) point with
/// every other axis fixed. Nothing is cached between calls, so reads and
/// writes can be interleaved freely.
///
/// `R` is usually a borrow (`&DenseRaster` or `&mut DenseRaster`); the
/// sampler never owns the caller's raster.
#[derive(Debug)]
pub struct ChannelSampler<R> {
    raster: R,
}

impl<R: Raster> ChannelSampler<R> {
    /// Wrap a raster.
    pub fn new(raster: R) -> Self {
        Self { raster }
    }

    /// The wrapped raster.
    pub fn raster(&self) -> &R {
        &self.raster
    }

    /// Unwrap the raster.
    pub fn into_inner(self) -> R {
        self.raster
    }

    /// Number of channels at `address`: the channel-axis extent, or 1.
    pub fn channel_count(&self, address: &RasterAddress) -> Result<usize, SampleError> {
        match address.channel_axis() {
            None => Ok(1),
            Some(axis) => self
                .raster
                .extents()
                .get(axis)
                .map(|&extent| extent as usize)
                .ok_or(SampleError::Raster(RasterError::DimensionMismatch {
                    expected: self.raster.ndim(),
                    actual: address.ndim(),
                })),
        }
    }

    /// Read the channel vector at `address`.
    pub fn read(&self, address: &RasterAddress) -> Result<ChannelVector, SampleError> {
        let count = self.channel_count(address)?;
        let mut values = Vec::with_capacity(count);
        for channel in 0..count {
            values.push(self.raster.get(&address.position(channel as i64))?);
        }
        Ok(ChannelVector::new(values, self.raster.is_integer()))
    }
}

impl<R: RasterMut> ChannelSampler<R> {
    /// Mutable access to the wrapped raster.
    pub fn raster_mut(&mut self) -> &mut R {
        &mut self.raster
    }

    /// Write `vector` at `address`, one sample per channel.
    ///
    /// Samples are narrowed by the raster's element type. A vector of the
    /// wrong length is rejected before anything is written.
    pub fn write(
        &mut self,
        address: &RasterAddress,
        vector: &ChannelVector,
    ) -> Result<(), SampleError> {
        let count = self.channel_count(address)?;
        if vector.len() != count {
            return Err(SampleError::ChannelCountMismatch {
                expected: count,
                actual: vector.len(),
            });
        }
        for (channel, &value) in vector.values().iter().enumerate() {
            self.raster
                .set(&address.position(channel as i64), value)?;
        }
        Ok(())
    }
}
