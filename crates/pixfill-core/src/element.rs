//! Native element types and their storage rules.

use std::fmt;

/// The native numeric type a raster stores its samples in.
///
/// Values written through the core are `f64`; the element type decides how
/// they are narrowed on store. See [`quantize`](Self::quantize).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Single bit, `0` or `1`.
    Bit,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// 32-bit IEEE float.
    F32,
    /// 64-bit IEEE float.
    F64,
}

impl ElementType {
    /// Whether samples of this type are integer-valued.
    pub fn is_integer(self) -> bool {
        !matches!(self, Self::F32 | Self::F64)
    }

    /// Inclusive `(min, max)` representable range, or `None` for floats.
    pub fn integer_range(self) -> Option<(f64, f64)> {
        match self {
            Self::Bit => Some((0.0, 1.0)),
            Self::U8 => Some((0.0, u8::MAX as f64)),
            Self::I8 => Some((i8::MIN as f64, i8::MAX as f64)),
            Self::U16 => Some((0.0, u16::MAX as f64)),
            Self::I16 => Some((i16::MIN as f64, i16::MAX as f64)),
            Self::U32 => Some((0.0, u32::MAX as f64)),
            Self::I32 => Some((i32::MIN as f64, i32::MAX as f64)),
            Self::F32 | Self::F64 => None,
        }
    }

    /// Narrow `value` to what this element type can hold.
    ///
    /// Integer types round half away from zero and saturate at their
    /// range; NaN stores as `0`. `F32` rounds through `f32`. `F64` is
    /// stored unchanged.
    pub fn quantize(self, value: f64) -> f64 {
        match self.integer_range() {
            Some((lo, hi)) => {
                if value.is_nan() {
                    0.0
                } else {
                    value.round().clamp(lo, hi)
                }
            }
            None => match self {
                Self::F32 => value as f32 as f64,
                _ => value,
            },
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bit => "bit",
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn u8_rounds_and_saturates() {
        assert_eq!(ElementType::U8.quantize(12.4), 12.0);
        assert_eq!(ElementType::U8.quantize(12.5), 13.0);
        assert_eq!(ElementType::U8.quantize(-3.0), 0.0);
        assert_eq!(ElementType::U8.quantize(300.0), 255.0);
        assert_eq!(ElementType::U8.quantize(f64::NAN), 0.0);
    }

    #[test]
    fn signed_types_keep_negatives() {
        assert_eq!(ElementType::I16.quantize(-2.6), -3.0);
        assert_eq!(ElementType::I8.quantize(-200.0), -128.0);
    }

    #[test]
    fn bit_is_zero_or_one() {
        assert_eq!(ElementType::Bit.quantize(0.2), 0.0);
        assert_eq!(ElementType::Bit.quantize(0.7), 1.0);
        assert_eq!(ElementType::Bit.quantize(5.0), 1.0);
    }

    #[test]
    fn floats_pass_through() {
        assert_eq!(ElementType::F64.quantize(0.1), 0.1);
        assert_eq!(ElementType::F32.quantize(0.5), 0.5);
        assert!(ElementType::F64.quantize(f64::NAN).is_nan());
        assert!(!ElementType::F32.is_integer());
        assert!(ElementType::U16.is_integer());
    }

    proptest! {
        #[test]
        fn quantize_is_idempotent(v in -1.0e6f64..1.0e6) {
            for ty in [ElementType::U8, ElementType::I16, ElementType::U32, ElementType::F32] {
                let once = ty.quantize(v);
                prop_assert_eq!(ty.quantize(once), once);
            }
        }
    }
}
