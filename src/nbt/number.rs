use std::hash::{Hash, Hasher};

use crate::{
    TagKind, TagType,
    util::{f32_bits_eq, f64_bits_eq, floor_f32, floor_f32_long, floor_f64, floor_f64_long},
};

/// A tag holding a single numeric value, viewable as every other numeric type.
///
/// Coercions are total. Integral sources narrow with two's complement
/// wraparound; floating sources are floored first, so `-1.5` becomes `-2`.
///
/// # Example
///
/// ```
/// use na_tagtree::{FloatTag, IntTag, NumberTag};
///
/// assert_eq!(FloatTag::of(-1.5).as_int(), -2);
/// assert_eq!(IntTag::of(300).as_byte(), 44);
/// assert_eq!(FloatTag::of(f32::NAN).as_long(), 0);
/// ```
pub trait NumberTag: TagKind {
    fn as_byte(&self) -> i8;
    fn as_short(&self) -> i16;
    fn as_int(&self) -> i32;
    fn as_long(&self) -> i64;
    fn as_float(&self) -> f32;
    fn as_double(&self) -> f64;
}

macro_rules! integral_tag {
    ($($name:ident($ty:ty) => $tag:ident),* $(,)?) => {
        $(
            #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
            pub struct $name($ty);

            impl $name {
                #[inline]
                pub const fn of(value: $ty) -> Self {
                    Self(value)
                }

                #[inline]
                pub const fn value(&self) -> $ty {
                    self.0
                }
            }

            impl TagKind for $name {
                const TAG_TYPE: TagType = TagType::$tag;
            }

            impl NumberTag for $name {
                #[inline]
                fn as_byte(&self) -> i8 {
                    self.0 as i8
                }

                #[inline]
                fn as_short(&self) -> i16 {
                    self.0 as i16
                }

                #[inline]
                fn as_int(&self) -> i32 {
                    self.0 as i32
                }

                #[inline]
                fn as_long(&self) -> i64 {
                    self.0 as i64
                }

                #[inline]
                fn as_float(&self) -> f32 {
                    self.0 as f32
                }

                #[inline]
                fn as_double(&self) -> f64 {
                    self.0 as f64
                }
            }

            impl From<$ty> for $name {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

integral_tag!(
    ByteTag(i8) => Byte,
    ShortTag(i16) => Short,
    IntTag(i32) => Int,
    LongTag(i64) => Long,
);

impl ByteTag {
    pub const ZERO: ByteTag = ByteTag(0);
    pub const ONE: ByteTag = ByteTag(1);

    /// NBT has no boolean tag; booleans are stored as a byte of `0` or `1`.
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::ONE } else { Self::ZERO }
    }

    #[inline]
    pub const fn as_bool(&self) -> bool {
        self.0 != 0
    }
}

macro_rules! floating_tag {
    ($($name:ident($ty:ty) => $tag:ident, $floor:ident, $floor_long:ident, $bits_eq:ident),* $(,)?) => {
        $(
            /// Equality and hashing compare the raw bit pattern, so a NaN
            /// equals itself and `0.0` differs from `-0.0`.
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name($ty);

            impl $name {
                #[inline]
                pub const fn of(value: $ty) -> Self {
                    Self(value)
                }

                #[inline]
                pub const fn value(&self) -> $ty {
                    self.0
                }
            }

            impl PartialEq for $name {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    $bits_eq(self.0, other.0)
                }
            }

            impl Eq for $name {}

            impl Hash for $name {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.0.to_bits().hash(state);
                }
            }

            impl TagKind for $name {
                const TAG_TYPE: TagType = TagType::$tag;
            }

            impl NumberTag for $name {
                #[inline]
                fn as_byte(&self) -> i8 {
                    $floor(self.0) as i8
                }

                #[inline]
                fn as_short(&self) -> i16 {
                    $floor(self.0) as i16
                }

                #[inline]
                fn as_int(&self) -> i32 {
                    $floor(self.0)
                }

                #[inline]
                fn as_long(&self) -> i64 {
                    $floor_long(self.0)
                }

                #[inline]
                fn as_float(&self) -> f32 {
                    self.0 as f32
                }

                #[inline]
                fn as_double(&self) -> f64 {
                    self.0 as f64
                }
            }

            impl From<$ty> for $name {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

floating_tag!(
    FloatTag(f32) => Float, floor_f32, floor_f32_long, f32_bits_eq,
    DoubleTag(f64) => Double, floor_f64, floor_f64_long, f64_bits_eq,
);
