//! Error types for tag and component editing.
//!
//! This module contains the [`Error`] type which represents every way an edit
//! or a builder can be rejected. Errors are raised at the offending call and
//! the receiver is left untouched.
//!
//! # Example
//!
//! ```
//! use na_tagtree::{Error, IntTag, ListTag, Result, StringTag, TagType};
//!
//! fn try_extend(list: &ListTag) -> Result<ListTag> {
//!     match list.add(StringTag::of("x")) {
//!         Ok(list) => Ok(list),
//!         Err(Error::TagMismatch { expected, actual }) => {
//!             println!("list holds {expected}, refused {actual}");
//!             Err(Error::TagMismatch { expected, actual })
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! let ints = ListTag::empty().add(IntTag::of(1)).unwrap();
//! assert!(matches!(
//!     try_extend(&ints),
//!     Err(Error::TagMismatch { expected: TagType::Int, actual: TagType::String })
//! ));
//! ```

use std::fmt::{self, Display};

use crate::TagType;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when editing a
/// tag or building a node.
///
/// # Variants
///
/// - [`EndInList`](Error::EndInList) - an End tag was offered as a list element
/// - [`TagMismatch`](Error::TagMismatch) - a list element has the wrong type
/// - [`IndexOutOfRange`](Error::IndexOutOfRange) - a list or array index is out of bounds
/// - [`MissingField`](Error::MissingField) - a builder is missing a required field
/// - [`InvalidKey`](Error::InvalidKey) - a namespaced key is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An End tag cannot be an element of a list.
    EndInList,

    /// A list with an established element type was offered a tag of another
    /// type.
    TagMismatch { expected: TagType, actual: TagType },

    /// An index outside `0..len` was used on a list or array.
    IndexOutOfRange { index: usize, len: usize },

    /// `build()` was called before a required field was set.
    ///
    /// Carries the name of the missing field.
    MissingField(&'static str),

    InvalidKey(String),
}

impl Error {
    /// Returns `true` for the errors caused by an unacceptable argument, i.e.
    /// [`EndInList`](Error::EndInList) and [`TagMismatch`](Error::TagMismatch).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::EndInList | Error::TagMismatch { .. })
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EndInList => formatter.write_str(&format!(
                "cannot add a {} to a {}",
                TagType::End,
                TagType::List
            )),
            Error::TagMismatch { expected, actual } => formatter.write_str(&format!(
                "trying to add tag of type {actual} to list of {expected}"
            )),
            Error::IndexOutOfRange { index, len } => formatter.write_str(&format!(
                "index {index} out of range for length {len}"
            )),
            Error::MissingField(field) => formatter.write_str(&format!("{field} must be set")),
            Error::InvalidKey(key) => formatter.write_str(&format!("invalid key: {key:?}")),
        }
    }
}

impl std::error::Error for Error {}
