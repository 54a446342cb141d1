use std::sync::Arc;

use bytes::Bytes;
use zerocopy::IntoBytes;

use crate::{Error, Result, TagKind, TagType, util::cold_path};

#[inline]
fn out_of_range(index: usize, len: usize) -> Error {
    cold_path();
    tracing::debug!(index, len, "array index out of range");
    Error::IndexOutOfRange { index, len }
}

/// A tag holding an immutable array of signed bytes.
///
/// Backed by [`Bytes`], so clones share one allocation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ByteArrayTag {
    data: Bytes,
}

impl ByteArrayTag {
    pub fn of(values: &[i8]) -> Self {
        Self {
            data: Bytes::copy_from_slice(values.as_bytes()),
        }
    }

    /// Wraps raw bytes without copying; each byte is read as two's complement.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<i8> {
        match self.data.get(index) {
            Some(&byte) => Ok(byte as i8),
            None => Err(out_of_range(index, self.data.len())),
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = i8> + '_ {
        self.data.iter().map(|&byte| byte as i8)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<i8> {
        self.iter().collect()
    }
}

impl TagKind for ByteArrayTag {
    const TAG_TYPE: TagType = TagType::ByteArray;
}

impl From<Vec<i8>> for ByteArrayTag {
    fn from(values: Vec<i8>) -> Self {
        Self::of(&values)
    }
}

macro_rules! wide_array_tag {
    ($($name:ident($ty:ty) => $tag:ident),* $(,)?) => {
        $(
            #[derive(Clone, PartialEq, Eq, Hash, Debug)]
            pub struct $name {
                data: Arc<[$ty]>,
            }

            impl $name {
                pub fn of(values: impl Into<Arc<[$ty]>>) -> Self {
                    Self { data: values.into() }
                }

                #[inline]
                pub fn len(&self) -> usize {
                    self.data.len()
                }

                #[inline]
                pub fn is_empty(&self) -> bool {
                    self.data.is_empty()
                }

                pub fn get(&self, index: usize) -> Result<$ty> {
                    match self.data.get(index) {
                        Some(&value) => Ok(value),
                        None => Err(out_of_range(index, self.data.len())),
                    }
                }

                pub fn iter(&self) -> impl ExactSizeIterator<Item = $ty> + '_ {
                    self.data.iter().copied()
                }

                #[inline]
                pub fn values(&self) -> &[$ty] {
                    &self.data
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self { data: Arc::from([]) }
                }
            }

            impl TagKind for $name {
                const TAG_TYPE: TagType = TagType::$tag;
            }

            impl From<Vec<$ty>> for $name {
                fn from(values: Vec<$ty>) -> Self {
                    Self::of(values)
                }
            }
        )*
    };
}

wide_array_tag!(
    IntArrayTag(i32) => IntArray,
    LongArrayTag(i64) => LongArray,
);
