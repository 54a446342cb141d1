//! Persistent, value-semantic trees for NBT tags and rich text components.
//!
//! Every tag and component is immutable. Edits return a new value and leave
//! the receiver untouched, so values can be shared freely between threads and
//! owners. Builders ([`ListTagBuilder`], [`CompoundTagBuilder`],
//! [`ComponentBuilder`], [`StyleBuilder`], [`SoundBuilder`]) are the mutable
//! scratch forms used to assemble a value in several steps.
//!
//! # Example
//!
//! ```
//! use na_tagtree::{CompoundTag, IntTag, ListTag, TagType};
//!
//! let scores = ListTag::empty().add(IntTag::of(5))?;
//! let root = CompoundTag::empty().put("scores", scores.clone());
//!
//! let emptied = scores.remove(0)?;
//! assert!(emptied.is_empty());
//! assert_eq!(emptied.element_type(), TagType::Int);
//! assert_eq!(root.get_list("scores").len(), 1);
//! # Ok::<(), na_tagtree::Error>(())
//! ```

mod error;
mod key;
pub mod nbt;
mod sound;
mod tag;
pub mod text;
mod util;

pub use error::*;
pub use key::*;
pub use nbt::*;
pub use sound::*;
pub use tag::*;
pub use text::*;
