use std::{fmt, sync::Arc};

use crate::{TagKind, TagType};

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StringTag {
    value: Arc<str>,
}

impl StringTag {
    pub fn of(value: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Default for StringTag {
    fn default() -> Self {
        Self::of("")
    }
}

impl TagKind for StringTag {
    const TAG_TYPE: TagType = TagType::String;
}

impl From<&str> for StringTag {
    fn from(value: &str) -> Self {
        Self::of(value)
    }
}

impl From<String> for StringTag {
    fn from(value: String) -> Self {
        Self::of(value)
    }
}

impl fmt::Display for StringTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
