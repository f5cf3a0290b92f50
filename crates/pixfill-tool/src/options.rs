//! Foreground and background paint values.

use pixfill_core::{ChannelVector, ElementType};

/// The two channel vectors painting tools draw with.
///
/// Stored independent of any raster. [`value_for`](Self::value_for)
/// adapts a stored vector to the channel count and element type of the
/// raster being painted.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelOptions {
    foreground: ChannelVector,
    background: ChannelVector,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            foreground: ChannelVector::new([255.0, 255.0, 255.0], true),
            background: ChannelVector::new([0.0, 0.0, 0.0], true),
        }
    }
}

impl ChannelOptions {
    /// Options with explicit foreground and background vectors.
    pub fn new(foreground: ChannelVector, background: ChannelVector) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// The foreground vector.
    pub fn foreground(&self) -> &ChannelVector {
        &self.foreground
    }

    /// The background vector.
    pub fn background(&self) -> &ChannelVector {
        &self.background
    }

    /// Replace the foreground vector.
    pub fn set_foreground(&mut self, values: ChannelVector) {
        self.foreground = values;
    }

    /// Replace the background vector.
    pub fn set_background(&mut self, values: ChannelVector) {
        self.background = values;
    }

    /// Background when `alt` is held, foreground otherwise.
    pub fn choose(&self, alt: bool) -> &ChannelVector {
        if alt {
            &self.background
        } else {
            &self.foreground
        }
    }

    /// The chosen vector fitted to `channel_count` channels and quantized
    /// to `element`.
    pub fn value_for(&self, alt: bool, channel_count: usize, element: ElementType) -> ChannelVector {
        self.choose(alt)
            .fitted(channel_count, element.is_integer())
            .quantized(element)
    }
}
