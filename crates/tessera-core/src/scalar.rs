//! Scalar element types and the [`ScalarKind`] tag.

use std::fmt;

/// Classification of a buffer's scalar storage type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    Uint32,
    /// 32-bit IEEE 754 float.
    Float32,
    /// 64-bit IEEE 754 float.
    Float64,
}

impl ScalarKind {
    /// Every supported kind, narrowest integers first.
    pub const ALL: [ScalarKind; 8] = [
        Self::Int8,
        Self::Uint8,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Float32,
        Self::Float64,
    ];

    /// Size of one scalar of this kind in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    /// Returns `true` for the floating-point kinds.
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Typed-array style name, e.g. `"Float32Array"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int8 => "Int8Array",
            Self::Uint8 => "Uint8Array",
            Self::Int16 => "Int16Array",
            Self::Uint16 => "Uint16Array",
            Self::Int32 => "Int32Array",
            Self::Uint32 => "Uint32Array",
            Self::Float32 => "Float32Array",
            Self::Float64 => "Float64Array",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric element that can live in a tuple buffer.
///
/// Every scalar round-trips through `f64` without loss, which is how
/// values of one kind are converted into another. Conversion into an
/// integer kind follows Rust `as` semantics: the fractional part is
/// truncated toward zero, out-of-range values saturate, NaN becomes 0.
pub trait Scalar:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + bytemuck::Pod + Send + Sync + 'static
{
    /// The runtime tag for this scalar type.
    const KIND: ScalarKind;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`, saturating and truncating per this kind.
    fn from_f64(value: f64) -> Self;

    /// Convert a scalar of any kind into this kind.
    #[inline]
    fn convert<S: Scalar>(value: S) -> Self {
        Self::from_f64(value.to_f64())
    }
}

macro_rules! impl_scalar {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_scalar! {
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kind_constants_match_types() {
        assert_eq!(<u8 as Scalar>::KIND, ScalarKind::Uint8);
        assert_eq!(<f32 as Scalar>::KIND, ScalarKind::Float32);
        assert_eq!(<i32 as Scalar>::KIND, ScalarKind::Int32);
    }

    #[test]
    fn size_bytes_matches_mem_size() {
        assert_eq!(ScalarKind::Int8.size_bytes(), std::mem::size_of::<i8>());
        assert_eq!(ScalarKind::Uint16.size_bytes(), std::mem::size_of::<u16>());
        assert_eq!(ScalarKind::Uint32.size_bytes(), std::mem::size_of::<u32>());
        assert_eq!(ScalarKind::Float64.size_bytes(), std::mem::size_of::<f64>());
    }

    #[test]
    fn integer_conversion_saturates() {
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(u8::from_f64(-4.0), 0);
        assert_eq!(i8::from_f64(-1000.0), -128);
        assert_eq!(i16::from_f64(f64::INFINITY), i16::MAX);
    }

    #[test]
    fn integer_conversion_truncates_toward_zero() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
    }

    #[test]
    fn nan_converts_to_zero_for_integers() {
        assert_eq!(u16::from_f64(f64::NAN), 0);
        assert!(f32::from_f64(f64::NAN).is_nan());
    }

    #[test]
    fn convert_between_kinds() {
        assert_eq!(f32::convert(7u8), 7.0);
        assert_eq!(u8::convert(7.5f32), 7);
        assert_eq!(i16::convert(-3i8), -3);
    }

    #[test]
    fn display_uses_typed_array_name() {
        assert_eq!(ScalarKind::Float32.to_string(), "Float32Array");
        assert!(ScalarKind::Float64.is_float());
        assert!(!ScalarKind::Uint32.is_float());
    }

    proptest! {
        #[test]
        fn i32_roundtrips_through_f64(v in any::<i32>()) {
            prop_assert_eq!(i32::from_f64(v.to_f64()), v);
        }

        #[test]
        fn u32_roundtrips_through_f64(v in any::<u32>()) {
            prop_assert_eq!(u32::from_f64(v.to_f64()), v);
        }

        #[test]
        fn finite_f32_roundtrips_through_f64(v in -1.0e30f32..1.0e30f32) {
            prop_assert_eq!(f32::from_f64(v.to_f64()), v);
        }
    }
}
