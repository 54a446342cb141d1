use std::sync::Arc;

use crate::{
    ClickEvent, Component, ComponentContent, ComponentNode, Key, KeybindContent, Result,
    SelectorContent, Style, StyleBuilder, TextColor, TextContent, TextDecoration,
    TranslatableContent,
};

/// Mutable scratch form of a [`ComponentNode`].
///
/// Setters consume and return the builder so calls chain. Seeding from a
/// node with [`ComponentNode::to_builder`] takes a snapshot: later edits to
/// the builder never reach the node.
///
/// # Example
///
/// ```
/// use na_tagtree::{Error, KeybindComponent, TextColor, TextDecoration};
///
/// let jump = KeybindComponent::builder()
///     .keybind("key.jump")
///     .color(TextColor::GOLD)
///     .decoration(TextDecoration::Bold, true)
///     .build()?;
/// assert_eq!(jump.keybind(), "key.jump");
/// assert_eq!(jump.to_builder().build()?, jump);
///
/// let missing = KeybindComponent::builder().build();
/// assert_eq!(missing.unwrap_err(), Error::MissingField("keybind"));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ComponentBuilder<C: ComponentContent> {
    pub(crate) children: Arc<[Component]>,
    pub(crate) style: StyleBuilder,
    pub(crate) pending: C::Pending,
}

pub type TextComponentBuilder = ComponentBuilder<TextContent>;
pub type KeybindComponentBuilder = ComponentBuilder<KeybindContent>;
pub type TranslatableComponentBuilder = ComponentBuilder<TranslatableContent>;
pub type SelectorComponentBuilder = ComponentBuilder<SelectorContent>;

impl<C: ComponentContent> ComponentBuilder<C> {
    pub fn new() -> Self {
        Self {
            children: Arc::from([]),
            style: StyleBuilder::default(),
            pending: C::Pending::default(),
        }
    }

    pub(crate) fn from_node(node: &ComponentNode<C>) -> Self {
        Self {
            children: Arc::clone(node.children_shared()),
            style: node.style().to_builder(),
            pending: node.payload().pending(),
        }
    }

    pub fn children(mut self, children: impl Into<Arc<[Component]>>) -> Self {
        self.children = children.into();
        self
    }

    pub fn append(mut self, child: impl Into<Component>) -> Self {
        let mut children = self.children.to_vec();
        children.push(child.into());
        self.children = children.into();
        self
    }

    /// Replaces the whole style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style.to_builder();
        self
    }

    /// Overlays the fields `style` sets onto the current style.
    pub fn merge_style(mut self, style: &Style) -> Self {
        self.style = self.style.merge(style);
        self
    }

    pub fn color(mut self, color: TextColor) -> Self {
        self.style = self.style.color(color);
        self
    }

    pub fn decoration(mut self, decoration: TextDecoration, flag: bool) -> Self {
        self.style = self.style.decoration(decoration, flag);
        self
    }

    pub fn insertion(mut self, insertion: impl Into<Arc<str>>) -> Self {
        self.style = self.style.insertion(insertion);
        self
    }

    pub fn click_event(mut self, click_event: ClickEvent) -> Self {
        self.style = self.style.click_event(click_event);
        self
    }

    pub fn font(mut self, font: Key) -> Self {
        self.style = self.style.font(font);
        self
    }

    /// Materializes the node, failing with
    /// [`Error::MissingField`](crate::Error::MissingField) when a required
    /// payload field was never set.
    pub fn build(self) -> Result<ComponentNode<C>> {
        let content = C::resolve(self.pending).inspect_err(|error| {
            tracing::debug!(component = %C::COMPONENT_TYPE, %error, "component builder rejected");
        })?;
        Ok(ComponentNode::from_parts(
            content,
            self.style.build(),
            self.children,
        ))
    }
}

impl<C: ComponentContent> Default for ComponentBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
