use crate::{
    ByteArrayTag, ByteTag, CompoundTag, DoubleTag, FloatTag, IntArrayTag, IntTag, ListTag,
    LongArrayTag, LongTag, NumberTag, ShortTag, StringTag, TagKind, TagType,
};

/// Any NBT tag.
///
/// Tags are immutable and cheap to clone: containers and arrays share their
/// storage, so cloning never copies elements.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum BinaryTag {
    End,
    Byte(ByteTag),
    Short(ShortTag),
    Int(IntTag),
    Long(LongTag),
    Float(FloatTag),
    Double(DoubleTag),
    ByteArray(ByteArrayTag),
    String(StringTag),
    List(ListTag),
    Compound(CompoundTag),
    IntArray(IntArrayTag),
    LongArray(LongArrayTag),
}

macro_rules! coerce {
    ($self:ident, $method:ident) => {
        match $self {
            BinaryTag::Byte(tag) => Some(tag.$method()),
            BinaryTag::Short(tag) => Some(tag.$method()),
            BinaryTag::Int(tag) => Some(tag.$method()),
            BinaryTag::Long(tag) => Some(tag.$method()),
            BinaryTag::Float(tag) => Some(tag.$method()),
            BinaryTag::Double(tag) => Some(tag.$method()),
            _ => None,
        }
    };
}

impl BinaryTag {
    #[inline]
    pub fn tag_type(&self) -> TagType {
        match self {
            BinaryTag::End => TagType::End,
            BinaryTag::Byte(_) => ByteTag::TAG_TYPE,
            BinaryTag::Short(_) => ShortTag::TAG_TYPE,
            BinaryTag::Int(_) => IntTag::TAG_TYPE,
            BinaryTag::Long(_) => LongTag::TAG_TYPE,
            BinaryTag::Float(_) => FloatTag::TAG_TYPE,
            BinaryTag::Double(_) => DoubleTag::TAG_TYPE,
            BinaryTag::ByteArray(_) => ByteArrayTag::TAG_TYPE,
            BinaryTag::String(_) => StringTag::TAG_TYPE,
            BinaryTag::List(_) => ListTag::TAG_TYPE,
            BinaryTag::Compound(_) => CompoundTag::TAG_TYPE,
            BinaryTag::IntArray(_) => IntArrayTag::TAG_TYPE,
            BinaryTag::LongArray(_) => LongArrayTag::TAG_TYPE,
        }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, BinaryTag::End)
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.tag_type().is_number()
    }

    #[inline]
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            BinaryTag::Byte(tag) => Some(tag.value()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_short(&self) -> Option<i16> {
        match self {
            BinaryTag::Short(tag) => Some(tag.value()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            BinaryTag::Int(tag) => Some(tag.value()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            BinaryTag::Long(tag) => Some(tag.value()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            BinaryTag::Float(tag) => Some(tag.value()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            BinaryTag::Double(tag) => Some(tag.value()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_byte_array(&self) -> Option<&ByteArrayTag> {
        match self {
            BinaryTag::ByteArray(tag) => Some(tag),
            _ => None,
        }
    }

    #[inline]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            BinaryTag::String(tag) => Some(tag.value()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&ListTag> {
        match self {
            BinaryTag::List(tag) => Some(tag),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&CompoundTag> {
        match self {
            BinaryTag::Compound(tag) => Some(tag),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int_array(&self) -> Option<&IntArrayTag> {
        match self {
            BinaryTag::IntArray(tag) => Some(tag),
            _ => None,
        }
    }

    #[inline]
    pub fn as_long_array(&self) -> Option<&LongArrayTag> {
        match self {
            BinaryTag::LongArray(tag) => Some(tag),
            _ => None,
        }
    }

    /// Coerces any numeric tag to a byte; `None` for other tags.
    pub fn to_byte(&self) -> Option<i8> {
        coerce!(self, as_byte)
    }

    pub fn to_short(&self) -> Option<i16> {
        coerce!(self, as_short)
    }

    pub fn to_int(&self) -> Option<i32> {
        coerce!(self, as_int)
    }

    pub fn to_long(&self) -> Option<i64> {
        coerce!(self, as_long)
    }

    pub fn to_float(&self) -> Option<f32> {
        coerce!(self, as_float)
    }

    pub fn to_double(&self) -> Option<f64> {
        coerce!(self, as_double)
    }
}

macro_rules! impl_from_tag {
    ($($variant:ident($tag:ty)),* $(,)?) => {
        $(
            impl From<$tag> for BinaryTag {
                #[inline]
                fn from(tag: $tag) -> Self {
                    BinaryTag::$variant(tag)
                }
            }
        )*
    };
}

impl_from_tag!(
    Byte(ByteTag),
    Short(ShortTag),
    Int(IntTag),
    Long(LongTag),
    Float(FloatTag),
    Double(DoubleTag),
    ByteArray(ByteArrayTag),
    String(StringTag),
    List(ListTag),
    Compound(CompoundTag),
    IntArray(IntArrayTag),
    LongArray(LongArrayTag),
);

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident($tag:ident)),* $(,)?) => {
        $(
            impl From<$ty> for BinaryTag {
                #[inline]
                fn from(value: $ty) -> Self {
                    BinaryTag::$variant($tag::from(value))
                }
            }
        )*
    };
}

impl_from_value!(
    i8 => Byte(ByteTag),
    bool => Byte(ByteTag),
    i16 => Short(ShortTag),
    i32 => Int(IntTag),
    i64 => Long(LongTag),
    f32 => Float(FloatTag),
    f64 => Double(DoubleTag),
    &str => String(StringTag),
    String => String(StringTag),
    Vec<i8> => ByteArray(ByteArrayTag),
    Vec<i32> => IntArray(IntArrayTag),
    Vec<i64> => LongArray(LongArrayTag),
);

impl From<bool> for ByteTag {
    #[inline]
    fn from(value: bool) -> Self {
        ByteTag::from_bool(value)
    }
}
