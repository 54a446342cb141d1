use std::{
    hash::{Hash, Hasher},
    slice,
    sync::{Arc, LazyLock},
};

use crate::{BinaryTag, Error, Result, TagKind, TagType, util::cold_path};

static EMPTY: LazyLock<ListTag> = LazyLock::new(|| ListTag {
    element_type: TagType::End,
    tags: Arc::from([]),
});

/// Rejects `tag` as an element of a list whose element type is `element_type`.
///
/// An element type of [`TagType::End`] means "not determined yet" and accepts
/// anything but an End tag.
fn check_element(element_type: TagType, tag: &BinaryTag) -> Result<()> {
    let actual = tag.tag_type();
    if actual == TagType::End {
        cold_path();
        tracing::debug!(%element_type, "rejected end tag as list element");
        return Err(Error::EndInList);
    }
    if element_type != TagType::End && actual != element_type {
        cold_path();
        tracing::debug!(expected = %element_type, %actual, "rejected list element");
        return Err(Error::TagMismatch {
            expected: element_type,
            actual,
        });
    }
    Ok(())
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        cold_path();
        tracing::debug!(index, len, "list index out of range");
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// An immutable, homogeneous list of tags.
///
/// Every element shares the list's element type. An empty list may carry the
/// element type [`TagType::End`], meaning the type is decided by the first
/// element added. Once decided, the type is kept even if the list is emptied
/// again by [`remove`](ListTag::remove).
///
/// Edits never touch the receiver: they copy the elements, apply one change
/// and return a new list.
///
/// # Example
///
/// ```
/// use na_tagtree::{IntTag, ListTag, StringTag, TagType};
///
/// let ints = ListTag::empty().add(IntTag::of(1))?.add(IntTag::of(2))?;
/// assert_eq!(ints.element_type(), TagType::Int);
/// assert!(ints.add(StringTag::of("x")).is_err());
/// assert_eq!(ints.len(), 2);
/// # Ok::<(), na_tagtree::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ListTag {
    element_type: TagType,
    tags: Arc<[BinaryTag]>,
}

impl ListTag {
    /// The shared empty list with an undetermined element type.
    pub fn empty() -> ListTag {
        EMPTY.clone()
    }

    /// Creates a list of `element_type` holding `tags`.
    ///
    /// Passing [`TagType::End`] lets the first tag decide the element type.
    pub fn of<T: Into<BinaryTag>>(
        element_type: TagType,
        tags: impl IntoIterator<Item = T>,
    ) -> Result<ListTag> {
        let mut builder = ListTagBuilder::with_type(element_type);
        builder.add_all(tags)?;
        Ok(builder.build())
    }

    /// Creates a list whose element type is taken from its first tag.
    pub fn from_tags<T: Into<BinaryTag>>(tags: impl IntoIterator<Item = T>) -> Result<ListTag> {
        Self::of(TagType::End, tags)
    }

    pub fn builder() -> ListTagBuilder {
        ListTagBuilder::new()
    }

    #[inline]
    pub fn element_type(&self) -> TagType {
        self.element_type
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&BinaryTag> {
        check_index(index, self.tags.len())?;
        Ok(&self.tags[index])
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, BinaryTag> {
        self.tags.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[BinaryTag] {
        &self.tags
    }

    /// Returns a new list with `tag` appended.
    ///
    /// Fails with [`Error::EndInList`] for an End tag and with
    /// [`Error::TagMismatch`] when the element type is already decided and
    /// differs from the tag's type.
    pub fn add(&self, tag: impl Into<BinaryTag>) -> Result<ListTag> {
        let tag = tag.into();
        check_element(self.element_type, &tag)?;
        let tag_type = tag.tag_type();
        Ok(self.edit(|tags| tags.push(tag), Some(tag_type)))
    }

    /// Returns a new list with the element at `index` replaced by `tag`.
    pub fn set(&self, index: usize, tag: impl Into<BinaryTag>) -> Result<ListTag> {
        self.set_with(index, tag, |_| {})
    }

    /// Like [`set`](ListTag::set), handing the replaced element to
    /// `on_replaced` before returning.
    pub fn set_with(
        &self,
        index: usize,
        tag: impl Into<BinaryTag>,
        on_replaced: impl FnOnce(BinaryTag),
    ) -> Result<ListTag> {
        let tag = tag.into();
        check_index(index, self.tags.len())?;
        check_element(self.element_type, &tag)?;
        let tag_type = tag.tag_type();
        Ok(self.edit(
            |tags| on_replaced(std::mem::replace(&mut tags[index], tag)),
            Some(tag_type),
        ))
    }

    /// Returns a new list without the element at `index`.
    ///
    /// The element type is kept even when the result is empty.
    pub fn remove(&self, index: usize) -> Result<ListTag> {
        self.remove_with(index, |_| {})
    }

    /// Like [`remove`](ListTag::remove), handing the removed element to
    /// `on_removed` before returning.
    pub fn remove_with(&self, index: usize, on_removed: impl FnOnce(BinaryTag)) -> Result<ListTag> {
        check_index(index, self.tags.len())?;
        Ok(self.edit(|tags| on_removed(tags.remove(index)), None))
    }

    /// Copies the elements, applies `edit` to the copy and wraps the result.
    ///
    /// `decided` becomes the element type only if none has been decided yet.
    fn edit(&self, edit: impl FnOnce(&mut Vec<BinaryTag>), decided: Option<TagType>) -> ListTag {
        let mut tags = self.tags.to_vec();
        edit(&mut tags);
        let element_type = match decided {
            Some(tag_type) if self.element_type == TagType::End => tag_type,
            _ => self.element_type,
        };
        ListTag {
            element_type,
            tags: tags.into(),
        }
    }

    /// Seeds a builder with a copy of this list's elements.
    pub fn to_builder(&self) -> ListTagBuilder {
        ListTagBuilder {
            element_type: self.element_type,
            tags: self.tags.to_vec(),
        }
    }

    /// Returns `true` if both lists share the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &ListTag) -> bool {
        Arc::ptr_eq(&self.tags, &other.tags) && self.element_type == other.element_type
    }
}

impl Default for ListTag {
    fn default() -> Self {
        Self::empty()
    }
}

impl TagKind for ListTag {
    const TAG_TYPE: TagType = TagType::List;
}

// Equality looks at the elements only, so two empty lists are equal whatever
// their element type.
impl PartialEq for ListTag {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tags, &other.tags) || self.tags == other.tags
    }
}

impl Eq for ListTag {}

impl Hash for ListTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tags.hash(state);
    }
}

impl<'a> IntoIterator for &'a ListTag {
    type Item = &'a BinaryTag;
    type IntoIter = slice::Iter<'a, BinaryTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Mutable scratch form of a [`ListTag`].
///
/// Enforces the same element rules as the list itself, so [`build`]
/// cannot fail. A rejected [`add`] leaves the builder as it was.
///
/// # Example
///
/// ```
/// use na_tagtree::{ListTag, StringTag};
///
/// let mut builder = ListTag::builder();
/// builder.add(1)?.add(2)?;
/// assert!(builder.add(StringTag::of("x")).is_err());
/// assert_eq!(builder.build().len(), 2);
/// # Ok::<(), na_tagtree::Error>(())
/// ```
///
/// [`build`]: ListTagBuilder::build
/// [`add`]: ListTagBuilder::add
#[derive(Clone, Debug)]
pub struct ListTagBuilder {
    element_type: TagType,
    tags: Vec<BinaryTag>,
}

impl ListTagBuilder {
    pub fn new() -> Self {
        Self::with_type(TagType::End)
    }

    pub fn with_type(element_type: TagType) -> Self {
        Self {
            element_type,
            tags: Vec::new(),
        }
    }

    pub fn add(&mut self, tag: impl Into<BinaryTag>) -> Result<&mut Self> {
        let tag = tag.into();
        check_element(self.element_type, &tag)?;
        if self.element_type == TagType::End {
            self.element_type = tag.tag_type();
        }
        self.tags.push(tag);
        Ok(self)
    }

    /// Adds every tag, or none of them if one is rejected.
    pub fn add_all<T: Into<BinaryTag>>(
        &mut self,
        tags: impl IntoIterator<Item = T>,
    ) -> Result<&mut Self> {
        let (element_type, len) = (self.element_type, self.tags.len());
        for tag in tags {
            if let Err(error) = self.add(tag) {
                self.element_type = element_type;
                self.tags.truncate(len);
                return Err(error);
            }
        }
        Ok(self)
    }

    #[inline]
    pub fn element_type(&self) -> TagType {
        self.element_type
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Snapshots the accumulated tags into a list; the builder stays usable.
    pub fn build(&self) -> ListTag {
        if self.tags.is_empty() && self.element_type == TagType::End {
            return ListTag::empty();
        }
        ListTag {
            element_type: self.element_type,
            tags: self.tags.as_slice().into(),
        }
    }
}

impl Default for ListTagBuilder {
    fn default() -> Self {
        Self::new()
    }
}
