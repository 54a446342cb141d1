//! [`serde::Serialize`] for tags.
//!
//! Tags map onto the serde data model the obvious way: numbers as their
//! native type, strings as strings, arrays and lists as sequences, compounds
//! as maps and End as unit. This is a data-model mapping, not a byte layout;
//! any serde format can consume it.

use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

use crate::{
    BinaryTag, ByteArrayTag, ByteTag, CompoundTag, DoubleTag, FloatTag, IntArrayTag, IntTag,
    ListTag, LongArrayTag, LongTag, ShortTag, StringTag,
};

macro_rules! serialize_number {
    ($($name:ident => $method:ident),* $(,)?) => {
        $(
            impl Serialize for $name {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.$method(self.value())
                }
            }
        )*
    };
}

serialize_number!(
    ByteTag => serialize_i8,
    ShortTag => serialize_i16,
    IntTag => serialize_i32,
    LongTag => serialize_i64,
    FloatTag => serialize_f32,
    DoubleTag => serialize_f64,
);

impl Serialize for StringTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

fn serialize_iter<S, T>(
    serializer: S,
    len: usize,
    values: impl Iterator<Item = T>,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut seq = serializer.serialize_seq(Some(len))?;
    for value in values {
        seq.serialize_element(&value)?;
    }
    seq.end()
}

impl Serialize for ByteArrayTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_iter(serializer, self.len(), self.iter())
    }
}

impl Serialize for IntArrayTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_iter(serializer, self.len(), self.iter())
    }
}

impl Serialize for LongArrayTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_iter(serializer, self.len(), self.iter())
    }
}

impl Serialize for ListTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_iter(serializer, self.len(), self.iter())
    }
}

impl Serialize for CompoundTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, tag) in self {
            map.serialize_entry(key, tag)?;
        }
        map.end()
    }
}

impl Serialize for BinaryTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BinaryTag::End => serializer.serialize_unit(),
            BinaryTag::Byte(tag) => tag.serialize(serializer),
            BinaryTag::Short(tag) => tag.serialize(serializer),
            BinaryTag::Int(tag) => tag.serialize(serializer),
            BinaryTag::Long(tag) => tag.serialize(serializer),
            BinaryTag::Float(tag) => tag.serialize(serializer),
            BinaryTag::Double(tag) => tag.serialize(serializer),
            BinaryTag::ByteArray(tag) => tag.serialize(serializer),
            BinaryTag::String(tag) => tag.serialize(serializer),
            BinaryTag::List(tag) => tag.serialize(serializer),
            BinaryTag::Compound(tag) => tag.serialize(serializer),
            BinaryTag::IntArray(tag) => tag.serialize(serializer),
            BinaryTag::LongArray(tag) => tag.serialize(serializer),
        }
    }
}
