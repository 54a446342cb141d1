use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, LazyLock},
};

use crate::{
    ComponentBuilder, ComponentType, KeybindContent, Property, PropertyValue, Result,
    SelectorContent, Style, TextContent, TranslatableContent,
};

/// The variant-specific payload of a component node.
///
/// Each payload has a pending form used by [`ComponentBuilder`], where every
/// field may still be missing; [`resolve`](ComponentContent::resolve) turns it
/// back into a payload or reports the first missing field.
pub trait ComponentContent: Clone + PartialEq + Eq + Hash + fmt::Debug {
    const COMPONENT_TYPE: ComponentType;

    type Pending: Default + Clone + fmt::Debug;

    fn pending(&self) -> Self::Pending;

    fn resolve(pending: Self::Pending) -> Result<Self>;

    /// Payload fields, in declaration order.
    fn properties(&self) -> impl Iterator<Item = Property<'_>>;

    fn into_component(node: ComponentNode<Self>) -> Component;
}

#[derive(PartialEq, Eq, Hash, Debug)]
struct Node<C> {
    content: C,
    style: Style,
    children: Arc<[Component]>,
}

/// An immutable component: a payload, a style and ordered children.
///
/// Nodes share their storage, so clones are cheap. Every `with_*` method
/// returns a new node, except when the new value equals the current one, in
/// which case the same node is returned (see [`ptr_eq`](ComponentNode::ptr_eq)).
pub struct ComponentNode<C: ComponentContent> {
    inner: Arc<Node<C>>,
}

impl<C: ComponentContent> ComponentNode<C> {
    pub(crate) fn from_parts(content: C, style: Style, children: Arc<[Component]>) -> Self {
        Self {
            inner: Arc::new(Node {
                content,
                style,
                children,
            }),
        }
    }

    pub fn builder() -> ComponentBuilder<C> {
        ComponentBuilder::new()
    }

    #[inline]
    pub fn component_type(&self) -> ComponentType {
        C::COMPONENT_TYPE
    }

    #[inline]
    pub fn payload(&self) -> &C {
        &self.inner.content
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.inner.style
    }

    #[inline]
    pub fn children(&self) -> &[Component] {
        &self.inner.children
    }

    pub(crate) fn children_shared(&self) -> &Arc<[Component]> {
        &self.inner.children
    }

    #[must_use]
    pub fn with_children(&self, children: impl Into<Arc<[Component]>>) -> Self {
        let children = children.into();
        if *children == *self.inner.children {
            return self.clone();
        }
        Self::from_parts(self.inner.content.clone(), self.inner.style.clone(), children)
    }

    #[must_use]
    pub fn append(&self, child: impl Into<Component>) -> Self {
        let mut children = self.inner.children.to_vec();
        children.push(child.into());
        Self::from_parts(
            self.inner.content.clone(),
            self.inner.style.clone(),
            children.into(),
        )
    }

    #[must_use]
    pub fn with_style(&self, style: Style) -> Self {
        if style == self.inner.style {
            return self.clone();
        }
        Self::from_parts(
            self.inner.content.clone(),
            style,
            self.inner.children.clone(),
        )
    }

    pub(crate) fn with_payload(&self, content: C) -> Self {
        if content == self.inner.content {
            return self.clone();
        }
        Self::from_parts(
            content,
            self.inner.style.clone(),
            self.inner.children.clone(),
        )
    }

    /// Payload properties first, then style, then children.
    pub fn examinable_properties(&self) -> impl Iterator<Item = Property<'_>> {
        self.inner.content.properties().chain([
            Property::new("style", PropertyValue::Style(&self.inner.style)),
            Property::new("children", PropertyValue::Components(&self.inner.children)),
        ])
    }

    pub fn to_builder(&self) -> ComponentBuilder<C> {
        ComponentBuilder::from_node(self)
    }

    /// Returns `true` if both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: ComponentContent> Clone for ComponentNode<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: ComponentContent> PartialEq for ComponentNode<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.inner == other.inner
    }
}

impl<C: ComponentContent> Eq for ComponentNode<C> {}

impl<C: ComponentContent> Hash for ComponentNode<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<C: ComponentContent> fmt::Debug for ComponentNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(C::COMPONENT_TYPE.name())
            .field("content", &self.inner.content)
            .field("style", &self.inner.style)
            .field("children", &self.inner.children)
            .finish()
    }
}

pub type TextComponent = ComponentNode<TextContent>;
pub type KeybindComponent = ComponentNode<KeybindContent>;
pub type TranslatableComponent = ComponentNode<TranslatableContent>;
pub type SelectorComponent = ComponentNode<SelectorContent>;

/// Operations shared by every component node, for code generic over the
/// variant.
pub trait BuildableComponent: Clone + Eq + Hash + Into<Component> {
    type Builder;

    fn component_type(&self) -> ComponentType;

    fn style(&self) -> &Style;

    fn children(&self) -> &[Component];

    fn to_builder(&self) -> Self::Builder;
}

impl<C: ComponentContent> BuildableComponent for ComponentNode<C> {
    type Builder = ComponentBuilder<C>;

    fn component_type(&self) -> ComponentType {
        C::COMPONENT_TYPE
    }

    fn style(&self) -> &Style {
        ComponentNode::style(self)
    }

    fn children(&self) -> &[Component] {
        ComponentNode::children(self)
    }

    fn to_builder(&self) -> Self::Builder {
        ComponentNode::to_builder(self)
    }
}

impl<C: ComponentContent> From<ComponentNode<C>> for Component {
    fn from(node: ComponentNode<C>) -> Self {
        C::into_component(node)
    }
}

static EMPTY: LazyLock<Component> = LazyLock::new(|| Component::Text(TextComponent::new("")));

/// Any component.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Component {
    Text(TextComponent),
    Keybind(KeybindComponent),
    Translatable(TranslatableComponent),
    Selector(SelectorComponent),
}

macro_rules! dispatch {
    ($self:ident, $node:ident => $body:expr) => {
        match $self {
            Component::Text($node) => $body,
            Component::Keybind($node) => $body,
            Component::Translatable($node) => $body,
            Component::Selector($node) => $body,
        }
    };
}

macro_rules! dispatch_wrap {
    ($self:ident, $node:ident => $body:expr) => {
        match $self {
            Component::Text($node) => Component::Text($body),
            Component::Keybind($node) => Component::Keybind($body),
            Component::Translatable($node) => Component::Translatable($body),
            Component::Selector($node) => Component::Selector($body),
        }
    };
}

impl Component {
    /// The shared empty text component.
    pub fn empty() -> Component {
        EMPTY.clone()
    }

    pub fn text(content: impl Into<Arc<str>>) -> Component {
        Component::Text(TextComponent::new(content))
    }

    pub fn keybind(keybind: impl Into<Arc<str>>) -> Component {
        Component::Keybind(KeybindComponent::new(keybind))
    }

    pub fn translatable(key: impl Into<Arc<str>>) -> Component {
        Component::Translatable(TranslatableComponent::new(key))
    }

    pub fn selector(pattern: impl Into<Arc<str>>) -> Component {
        Component::Selector(SelectorComponent::new(pattern))
    }

    pub fn component_type(&self) -> ComponentType {
        dispatch!(self, node => node.component_type())
    }

    pub fn style(&self) -> &Style {
        dispatch!(self, node => node.style())
    }

    pub fn children(&self) -> &[Component] {
        dispatch!(self, node => node.children())
    }

    #[must_use]
    pub fn with_children(&self, children: impl Into<Arc<[Component]>>) -> Component {
        let children = children.into();
        dispatch_wrap!(self, node => node.with_children(children))
    }

    #[must_use]
    pub fn with_style(&self, style: Style) -> Component {
        dispatch_wrap!(self, node => node.with_style(style))
    }

    #[must_use]
    pub fn append(&self, child: impl Into<Component>) -> Component {
        let child = child.into();
        dispatch_wrap!(self, node => node.append(child))
    }

    pub fn examinable_properties(&self) -> Box<dyn Iterator<Item = Property<'_>> + '_> {
        dispatch!(self, node => {
            let properties: Box<dyn Iterator<Item = Property<'_>> + '_> =
                Box::new(node.examinable_properties());
            properties
        })
    }

    pub fn ptr_eq(&self, other: &Component) -> bool {
        match (self, other) {
            (Component::Text(a), Component::Text(b)) => a.ptr_eq(b),
            (Component::Keybind(a), Component::Keybind(b)) => a.ptr_eq(b),
            (Component::Translatable(a), Component::Translatable(b)) => a.ptr_eq(b),
            (Component::Selector(a), Component::Selector(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&TextComponent> {
        match self {
            Component::Text(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_keybind(&self) -> Option<&KeybindComponent> {
        match self {
            Component::Keybind(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_translatable(&self) -> Option<&TranslatableComponent> {
        match self {
            Component::Translatable(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_selector(&self) -> Option<&SelectorComponent> {
        match self {
            Component::Selector(node) => Some(node),
            _ => None,
        }
    }

    /// Visits this component and all of its descendants, depth first.
    pub fn walk(&self, visit: &mut impl FnMut(&Component)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Component {
    fn from(content: &str) -> Self {
        Component::text(content)
    }
}

impl From<String> for Component {
    fn from(content: String) -> Self {
        Component::text(content)
    }
}

/// Concatenates the text and keybind payloads of a tree, depth first.
///
/// Translatable and selector payloads contribute their key or pattern; no
/// translation or selector resolution happens here.
pub fn plain_text(component: &Component) -> String {
    let mut out = String::new();
    component.walk(&mut |node| match node {
        Component::Text(node) => out.push_str(node.content()),
        Component::Keybind(node) => out.push_str(node.keybind()),
        Component::Translatable(node) => out.push_str(node.key()),
        Component::Selector(node) => out.push_str(node.pattern()),
    });
    out
}
