use std::{fmt, str::FromStr, sync::Arc};

use crate::{Error, Result};

/// Namespace assumed when a key string has no `:`.
pub const MINECRAFT_NAMESPACE: &str = "minecraft";

#[inline]
fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

#[inline]
fn is_value_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

/// A namespaced identifier such as `minecraft:entity.player.levelup`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Key {
    namespace: Arc<str>,
    value: Arc<str>,
}

impl Key {
    pub fn new(namespace: &str, value: &str) -> Result<Key> {
        if !namespace.chars().all(is_namespace_char) || !value.chars().all(is_value_char) {
            tracing::debug!(namespace, value, "rejected key");
            return Err(Error::InvalidKey(format!("{namespace}:{value}")));
        }
        Ok(Key {
            namespace: namespace.into(),
            value: value.into(),
        })
    }

    /// Parses `namespace:value`, or a bare `value` in the
    /// [`MINECRAFT_NAMESPACE`].
    ///
    /// # Example
    ///
    /// ```
    /// use na_tagtree::Key;
    ///
    /// let key = Key::parse("block.note_block.harp")?;
    /// assert_eq!(key.namespace(), "minecraft");
    /// assert!(Key::parse("Bad Key").is_err());
    /// # Ok::<(), na_tagtree::Error>(())
    /// ```
    pub fn parse(key: &str) -> Result<Key> {
        match key.split_once(':') {
            Some((namespace, value)) => Self::new(namespace, value),
            None => Self::new(MINECRAFT_NAMESPACE, key),
        }
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}
