//! Per-position channel value vectors.

use crate::element::ElementType;
use smallvec::SmallVec;
use std::fmt;

/// The ordered per-channel values sampled at one raster position.
///
/// Holds one sample per channel (a single sample when the raster has no
/// channel axis) plus whether the samples came from an integer-valued
/// raster. Equality is exact and component-wise on the raw values; the
/// integer flag only affects [`Display`](fmt::Display). NaN components
/// compare equal to NaN so that NaN regions can be matched.
#[derive(Clone, Debug)]
pub struct ChannelVector {
    values: SmallVec<[f64; 4]>,
    integer: bool,
}

impl ChannelVector {
    /// Create a vector from explicit samples.
    pub fn new(values: impl IntoIterator<Item = f64>, integer: bool) -> Self {
        Self {
            values: values.into_iter().collect(),
            integer,
        }
    }

    /// A single-channel vector.
    pub fn scalar(value: f64, integer: bool) -> Self {
        Self::new([value], integer)
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample for channel `i`, if present.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    /// All samples in channel order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Whether the samples came from an integer-valued raster.
    pub fn is_integer(&self) -> bool {
        self.integer
    }

    /// Adapt this vector to a raster with `channel_count` channels.
    ///
    /// Extra samples are dropped; missing ones repeat the last sample
    /// (or `0.0` if the vector is empty). The integer flag is replaced
    /// with `integer`.
    pub fn fitted(&self, channel_count: usize, integer: bool) -> Self {
        let last = self.values.last().copied().unwrap_or(0.0);
        let values = (0..channel_count).map(|i| self.values.get(i).copied().unwrap_or(last));
        Self::new(values, integer)
    }

    /// Narrow every sample to what a raster of `element` type would store.
    pub fn quantized(&self, element: ElementType) -> Self {
        Self::new(
            self.values.iter().map(|&v| element.quantize(v)),
            element.is_integer(),
        )
    }
}

fn same_sample(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for ChannelVector {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(&a, &b)| same_sample(a, b))
    }
}

impl fmt::Display for ChannelVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i != 0 {
                write!(f, ",")?;
            }
            if self.integer {
                write!(f, "{}", *v as i64)?;
            } else {
                write!(f, "{v:.6}")?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_integer_flag() {
        let a = ChannelVector::new([1.0, 2.0, 3.0], true);
        let b = ChannelVector::new([1.0, 2.0, 3.0], false);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_is_exact() {
        let a = ChannelVector::scalar(1.0, false);
        let b = ChannelVector::scalar(1.0 + f64::EPSILON, false);
        assert_ne!(a, b);
    }

    #[test]
    fn equality_requires_same_length() {
        let a = ChannelVector::new([1.0], true);
        let b = ChannelVector::new([1.0, 1.0], true);
        assert_ne!(a, b);
    }

    #[test]
    fn nan_matches_nan() {
        let a = ChannelVector::new([f64::NAN, 2.0], false);
        let b = ChannelVector::new([f64::NAN, 2.0], false);
        assert_eq!(a, b);
        assert_ne!(a, ChannelVector::new([0.0, 2.0], false));
    }

    #[test]
    fn quantized_narrows_to_element_range() {
        let v = ChannelVector::new([300.0, -4.0, 12.5], false);
        let q = v.quantized(ElementType::U8);
        assert_eq!(q.values(), &[255.0, 0.0, 13.0]);
        assert!(q.is_integer());
    }

    #[test]
    fn fitted_pads_and_truncates() {
        let rgb = ChannelVector::new([10.0, 20.0, 30.0], true);
        assert_eq!(rgb.fitted(1, true).values(), &[10.0]);
        assert_eq!(rgb.fitted(5, true).values(), &[10.0, 20.0, 30.0, 30.0, 30.0]);
        let empty = ChannelVector::new([], true);
        assert_eq!(empty.fitted(2, true).values(), &[0.0, 0.0]);
    }

    #[test]
    fn display_follows_integer_flag() {
        assert_eq!(ChannelVector::new([1.0, 255.0], true).to_string(), "(1,255)");
        assert_eq!(
            ChannelVector::scalar(0.5, false).to_string(),
            "(0.500000)"
        );
    }
}
