use std::{
    collections::{BTreeMap, btree_map},
    hash::{Hash, Hasher},
    sync::{Arc, LazyLock},
};

use crate::{
    BinaryTag, ByteArrayTag, IntArrayTag, ListTag, LongArrayTag, TagKind, TagType,
};

static EMPTY: LazyLock<CompoundTag> = LazyLock::new(|| CompoundTag {
    tags: Arc::new(BTreeMap::new()),
});

macro_rules! number_getter {
    ($($(#[$meta:meta])* $name:ident => $to:ident -> $ty:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, key: &str, default: $ty) -> $ty {
                self.tags.get(key).and_then(BinaryTag::$to).unwrap_or(default)
            }
        )*
    };
}

/// An immutable map from string keys to tags, ordered by key.
///
/// Like [`ListTag`], every edit returns a new compound and leaves the
/// receiver untouched.
///
/// # Example
///
/// ```
/// use na_tagtree::{CompoundTag, DoubleTag};
///
/// let player = CompoundTag::builder()
///     .put("name", "Steve")
///     .put("health", 19.5f32)
///     .build();
///
/// assert_eq!(player.get_string("name", ""), "Steve");
/// assert_eq!(player.get_int("health", 0), 19);
///
/// let healed = player.put("health", DoubleTag::of(20.0));
/// assert_eq!(healed.get_float("health", 0.0), 20.0);
/// assert_eq!(player.get_float("health", 0.0), 19.5);
/// ```
#[derive(Clone, Debug)]
pub struct CompoundTag {
    tags: Arc<BTreeMap<String, BinaryTag>>,
}

impl CompoundTag {
    /// The shared empty compound.
    pub fn empty() -> CompoundTag {
        EMPTY.clone()
    }

    pub fn builder() -> CompoundTagBuilder {
        CompoundTagBuilder::new()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&BinaryTag> {
        self.tags.get(key)
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.tags.keys().map(String::as_str)
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, BinaryTag> {
        self.tags.iter()
    }

    /// Returns a new compound with `key` mapped to `tag`.
    pub fn put(&self, key: impl Into<String>, tag: impl Into<BinaryTag>) -> CompoundTag {
        let key = key.into();
        let tag = tag.into();
        self.edit(|tags| {
            tags.insert(key, tag);
        })
    }

    /// Returns a new compound with every entry of `other` put into this one.
    pub fn put_all(&self, other: &CompoundTag) -> CompoundTag {
        if other.is_empty() {
            return self.clone();
        }
        self.edit(|tags| {
            tags.extend(other.iter().map(|(key, tag)| (key.clone(), tag.clone())));
        })
    }

    /// Returns a new compound without `key`.
    ///
    /// Removing an absent key returns this compound unchanged.
    pub fn remove(&self, key: &str) -> CompoundTag {
        self.remove_with(key, |_| {})
    }

    /// Like [`remove`](CompoundTag::remove), handing the removed tag to
    /// `on_removed` before returning. Nothing is reported for an absent key.
    pub fn remove_with(&self, key: &str, on_removed: impl FnOnce(BinaryTag)) -> CompoundTag {
        if !self.tags.contains_key(key) {
            return self.clone();
        }
        self.edit(|tags| {
            if let Some(tag) = tags.remove(key) {
                on_removed(tag);
            }
        })
    }

    fn edit(&self, edit: impl FnOnce(&mut BTreeMap<String, BinaryTag>)) -> CompoundTag {
        let mut tags = BTreeMap::clone(&self.tags);
        edit(&mut tags);
        CompoundTag {
            tags: Arc::new(tags),
        }
    }

    /// Returns the byte at `key` read as a boolean, or `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.tags
            .get(key)
            .and_then(BinaryTag::to_byte)
            .map_or(default, |byte| byte != 0)
    }

    number_getter! {
        /// Returns the number at `key` coerced to a byte, or `default` when
        /// the key is absent or not numeric.
        get_byte => to_byte -> i8,
        get_short => to_short -> i16,
        get_int => to_int -> i32,
        get_long => to_long -> i64,
        get_float => to_float -> f32,
        get_double => to_double -> f64,
    }

    pub fn get_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.tags
            .get(key)
            .and_then(BinaryTag::as_string)
            .unwrap_or(default)
    }

    /// Returns the list at `key`, or the empty list.
    pub fn get_list(&self, key: &str) -> ListTag {
        self.tags
            .get(key)
            .and_then(BinaryTag::as_list)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the list at `key` if its element type is `element_type`, or
    /// the empty list.
    pub fn get_list_of(&self, key: &str, element_type: TagType) -> ListTag {
        match self.tags.get(key).and_then(BinaryTag::as_list) {
            Some(list) if list.element_type() == element_type => list.clone(),
            _ => ListTag::empty(),
        }
    }

    /// Returns the compound at `key`, or the empty compound.
    pub fn get_compound(&self, key: &str) -> CompoundTag {
        self.tags
            .get(key)
            .and_then(BinaryTag::as_compound)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_byte_array(&self, key: &str) -> ByteArrayTag {
        self.tags
            .get(key)
            .and_then(BinaryTag::as_byte_array)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_int_array(&self, key: &str) -> IntArrayTag {
        self.tags
            .get(key)
            .and_then(BinaryTag::as_int_array)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_long_array(&self, key: &str) -> LongArrayTag {
        self.tags
            .get(key)
            .and_then(BinaryTag::as_long_array)
            .cloned()
            .unwrap_or_default()
    }

    /// Seeds a builder with a copy of this compound's entries.
    pub fn to_builder(&self) -> CompoundTagBuilder {
        CompoundTagBuilder {
            tags: BTreeMap::clone(&self.tags),
        }
    }

    #[inline]
    pub fn ptr_eq(&self, other: &CompoundTag) -> bool {
        Arc::ptr_eq(&self.tags, &other.tags)
    }
}

impl Default for CompoundTag {
    fn default() -> Self {
        Self::empty()
    }
}

impl TagKind for CompoundTag {
    const TAG_TYPE: TagType = TagType::Compound;
}

impl PartialEq for CompoundTag {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tags, &other.tags) || self.tags == other.tags
    }
}

impl Eq for CompoundTag {}

impl Hash for CompoundTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tags.hash(state);
    }
}

impl<'a> IntoIterator for &'a CompoundTag {
    type Item = (&'a String, &'a BinaryTag);
    type IntoIter = btree_map::Iter<'a, String, BinaryTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Mutable scratch form of a [`CompoundTag`].
#[derive(Clone, Debug, Default)]
pub struct CompoundTagBuilder {
    tags: BTreeMap<String, BinaryTag>,
}

impl CompoundTagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(mut self, key: impl Into<String>, tag: impl Into<BinaryTag>) -> Self {
        self.tags.insert(key.into(), tag.into());
        self
    }

    pub fn put_all(mut self, other: &CompoundTag) -> Self {
        self.tags
            .extend(other.iter().map(|(key, tag)| (key.clone(), tag.clone())));
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.tags.remove(key);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn build(self) -> CompoundTag {
        if self.tags.is_empty() {
            return CompoundTag::empty();
        }
        CompoundTag {
            tags: Arc::new(self.tags),
        }
    }
}
