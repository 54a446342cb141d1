use std::{iter, sync::Arc};

use crate::{
    Component, ComponentBuilder, ComponentContent, ComponentNode, ComponentType, Error,
    KeybindComponent, Property, PropertyValue, Result, SelectorComponent, Style, TextComponent,
    TranslatableComponent,
};

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField(field))
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TextContent {
    content: Arc<str>,
}

impl ComponentContent for TextContent {
    const COMPONENT_TYPE: ComponentType = ComponentType::Text;

    type Pending = Option<Arc<str>>;

    fn pending(&self) -> Self::Pending {
        Some(self.content.clone())
    }

    // Text content defaults to the empty string.
    fn resolve(pending: Self::Pending) -> Result<Self> {
        Ok(TextContent {
            content: pending.unwrap_or_else(|| Arc::from("")),
        })
    }

    fn properties(&self) -> impl Iterator<Item = Property<'_>> {
        iter::once(Property::new("content", PropertyValue::Str(&self.content)))
    }

    fn into_component(node: ComponentNode<Self>) -> Component {
        Component::Text(node)
    }
}

impl TextComponent {
    pub fn new(content: impl Into<Arc<str>>) -> Self {
        Self::from_parts(
            TextContent {
                content: content.into(),
            },
            Style::empty(),
            Arc::from([]),
        )
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.payload().content
    }

    #[must_use]
    pub fn with_content(&self, content: impl Into<Arc<str>>) -> Self {
        self.with_payload(TextContent {
            content: content.into(),
        })
    }
}

impl ComponentBuilder<TextContent> {
    pub fn content(mut self, content: impl Into<Arc<str>>) -> Self {
        self.pending = Some(content.into());
        self
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct KeybindContent {
    keybind: Arc<str>,
}

impl ComponentContent for KeybindContent {
    const COMPONENT_TYPE: ComponentType = ComponentType::Keybind;

    type Pending = Option<Arc<str>>;

    fn pending(&self) -> Self::Pending {
        Some(self.keybind.clone())
    }

    fn resolve(pending: Self::Pending) -> Result<Self> {
        Ok(KeybindContent {
            keybind: required(pending, "keybind")?,
        })
    }

    fn properties(&self) -> impl Iterator<Item = Property<'_>> {
        iter::once(Property::new("keybind", PropertyValue::Str(&self.keybind)))
    }

    fn into_component(node: ComponentNode<Self>) -> Component {
        Component::Keybind(node)
    }
}

impl KeybindComponent {
    /// Creates a component showing the key bound to `keybind`, e.g. `key.jump`.
    pub fn new(keybind: impl Into<Arc<str>>) -> Self {
        Self::from_parts(
            KeybindContent {
                keybind: keybind.into(),
            },
            Style::empty(),
            Arc::from([]),
        )
    }

    #[inline]
    pub fn keybind(&self) -> &str {
        &self.payload().keybind
    }

    #[must_use]
    pub fn with_keybind(&self, keybind: impl Into<Arc<str>>) -> Self {
        self.with_payload(KeybindContent {
            keybind: keybind.into(),
        })
    }
}

impl ComponentBuilder<KeybindContent> {
    pub fn keybind(mut self, keybind: impl Into<Arc<str>>) -> Self {
        self.pending = Some(keybind.into());
        self
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TranslatableContent {
    key: Arc<str>,
    args: Arc<[Component]>,
}

#[derive(Clone, Debug, Default)]
pub struct PendingTranslatable {
    key: Option<Arc<str>>,
    args: Arc<[Component]>,
}

impl ComponentContent for TranslatableContent {
    const COMPONENT_TYPE: ComponentType = ComponentType::Translatable;

    type Pending = PendingTranslatable;

    fn pending(&self) -> Self::Pending {
        PendingTranslatable {
            key: Some(self.key.clone()),
            args: self.args.clone(),
        }
    }

    fn resolve(pending: Self::Pending) -> Result<Self> {
        Ok(TranslatableContent {
            key: required(pending.key, "key")?,
            args: pending.args,
        })
    }

    fn properties(&self) -> impl Iterator<Item = Property<'_>> {
        [
            Property::new("key", PropertyValue::Str(&self.key)),
            Property::new("args", PropertyValue::Components(&self.args)),
        ]
        .into_iter()
    }

    fn into_component(node: ComponentNode<Self>) -> Component {
        Component::Translatable(node)
    }
}

impl TranslatableComponent {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self::with_key_and_args(key, Vec::new())
    }

    pub fn with_key_and_args(
        key: impl Into<Arc<str>>,
        args: impl Into<Arc<[Component]>>,
    ) -> Self {
        Self::from_parts(
            TranslatableContent {
                key: key.into(),
                args: args.into(),
            },
            Style::empty(),
            Arc::from([]),
        )
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.payload().key
    }

    #[inline]
    pub fn args(&self) -> &[Component] {
        &self.payload().args
    }

    #[must_use]
    pub fn with_key(&self, key: impl Into<Arc<str>>) -> Self {
        self.with_payload(TranslatableContent {
            key: key.into(),
            args: self.payload().args.clone(),
        })
    }

    #[must_use]
    pub fn with_args(&self, args: impl Into<Arc<[Component]>>) -> Self {
        self.with_payload(TranslatableContent {
            key: self.payload().key.clone(),
            args: args.into(),
        })
    }
}

impl ComponentBuilder<TranslatableContent> {
    pub fn key(mut self, key: impl Into<Arc<str>>) -> Self {
        self.pending.key = Some(key.into());
        self
    }

    pub fn args(mut self, args: impl Into<Arc<[Component]>>) -> Self {
        self.pending.args = args.into();
        self
    }

    pub fn arg(mut self, arg: impl Into<Component>) -> Self {
        let mut args = self.pending.args.to_vec();
        args.push(arg.into());
        self.pending.args = args.into();
        self
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SelectorContent {
    pattern: Arc<str>,
}

impl ComponentContent for SelectorContent {
    const COMPONENT_TYPE: ComponentType = ComponentType::Selector;

    type Pending = Option<Arc<str>>;

    fn pending(&self) -> Self::Pending {
        Some(self.pattern.clone())
    }

    fn resolve(pending: Self::Pending) -> Result<Self> {
        Ok(SelectorContent {
            pattern: required(pending, "pattern")?,
        })
    }

    fn properties(&self) -> impl Iterator<Item = Property<'_>> {
        iter::once(Property::new("pattern", PropertyValue::Str(&self.pattern)))
    }

    fn into_component(node: ComponentNode<Self>) -> Component {
        Component::Selector(node)
    }
}

impl SelectorComponent {
    /// Creates a component for an entity selector such as `@p`.
    pub fn new(pattern: impl Into<Arc<str>>) -> Self {
        Self::from_parts(
            SelectorContent {
                pattern: pattern.into(),
            },
            Style::empty(),
            Arc::from([]),
        )
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        &self.payload().pattern
    }

    #[must_use]
    pub fn with_pattern(&self, pattern: impl Into<Arc<str>>) -> Self {
        self.with_payload(SelectorContent {
            pattern: pattern.into(),
        })
    }
}

impl ComponentBuilder<SelectorContent> {
    pub fn pattern(mut self, pattern: impl Into<Arc<str>>) -> Self {
        self.pending = Some(pattern.into());
        self
    }
}
