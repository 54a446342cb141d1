use std::sync::Arc;

use crate::{DecorationState, Decorations, Key, TextColor, TextDecoration};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

impl ClickAction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenUrl => "open_url",
            Self::OpenFile => "open_file",
            Self::RunCommand => "run_command",
            Self::SuggestCommand => "suggest_command",
            Self::ChangePage => "change_page",
            Self::CopyToClipboard => "copy_to_clipboard",
        }
    }
}

/// What happens when the decorated text is clicked.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ClickEvent {
    action: ClickAction,
    value: Arc<str>,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<Arc<str>>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    pub fn open_url(url: impl Into<Arc<str>>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }

    pub fn run_command(command: impl Into<Arc<str>>) -> Self {
        Self::new(ClickAction::RunCommand, command)
    }

    pub fn suggest_command(command: impl Into<Arc<str>>) -> Self {
        Self::new(ClickAction::SuggestCommand, command)
    }

    pub fn change_page(page: u32) -> Self {
        Self::new(ClickAction::ChangePage, page.to_string())
    }

    pub fn copy_to_clipboard(text: impl Into<Arc<str>>) -> Self {
        Self::new(ClickAction::CopyToClipboard, text)
    }

    #[inline]
    pub fn action(&self) -> ClickAction {
        self.action
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Formatting attached to a component.
///
/// Every field is optional; an unset field is inherited from the parent
/// component when rendered.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Style {
    color: Option<TextColor>,
    decorations: Decorations,
    insertion: Option<Arc<str>>,
    click_event: Option<ClickEvent>,
    font: Option<Key>,
}

impl Style {
    pub fn empty() -> Style {
        Style::default()
    }

    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.decorations.is_empty()
            && self.insertion.is_none()
            && self.click_event.is_none()
            && self.font.is_none()
    }

    #[inline]
    pub fn color(&self) -> Option<TextColor> {
        self.color
    }

    #[inline]
    pub fn decoration(&self, decoration: TextDecoration) -> DecorationState {
        self.decorations.get(decoration)
    }

    /// Returns `true` only for a decoration explicitly set to on.
    #[inline]
    pub fn has_decoration(&self, decoration: TextDecoration) -> bool {
        self.decoration(decoration) == DecorationState::True
    }

    #[inline]
    pub fn decorations(&self) -> Decorations {
        self.decorations
    }

    #[inline]
    pub fn insertion(&self) -> Option<&str> {
        self.insertion.as_deref()
    }

    #[inline]
    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.click_event.as_ref()
    }

    #[inline]
    pub fn font(&self) -> Option<&Key> {
        self.font.as_ref()
    }

    #[must_use]
    pub fn with_color(&self, color: Option<TextColor>) -> Style {
        Style {
            color,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_decoration(&self, decoration: TextDecoration, state: DecorationState) -> Style {
        Style {
            decorations: self.decorations.with(decoration, state),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_insertion(&self, insertion: Option<&str>) -> Style {
        Style {
            insertion: insertion.map(Arc::from),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_click_event(&self, click_event: Option<ClickEvent>) -> Style {
        Style {
            click_event,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_font(&self, font: Option<Key>) -> Style {
        Style {
            font,
            ..self.clone()
        }
    }

    /// Returns this style with every field that `other` sets overridden.
    #[must_use]
    pub fn merge(&self, other: &Style) -> Style {
        self.to_builder().merge(other).build()
    }

    pub fn to_builder(&self) -> StyleBuilder {
        StyleBuilder {
            style: self.clone(),
        }
    }
}

/// Mutable scratch form of a [`Style`].
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    pub fn color(mut self, color: TextColor) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn color_if_absent(mut self, color: TextColor) -> Self {
        self.style.color.get_or_insert(color);
        self
    }

    pub fn decoration(self, decoration: TextDecoration, flag: bool) -> Self {
        self.decoration_state(decoration, DecorationState::from_bool(flag))
    }

    pub fn decoration_state(mut self, decoration: TextDecoration, state: DecorationState) -> Self {
        self.style.decorations = self.style.decorations.with(decoration, state);
        self
    }

    pub fn insertion(mut self, insertion: impl Into<Arc<str>>) -> Self {
        self.style.insertion = Some(insertion.into());
        self
    }

    pub fn click_event(mut self, click_event: ClickEvent) -> Self {
        self.style.click_event = Some(click_event);
        self
    }

    pub fn font(mut self, font: Key) -> Self {
        self.style.font = Some(font);
        self
    }

    pub fn merge(mut self, other: &Style) -> Self {
        if let Some(color) = other.color {
            self.style.color = Some(color);
        }
        self.style.decorations = self.style.decorations.merge(other.decorations);
        if let Some(insertion) = &other.insertion {
            self.style.insertion = Some(insertion.clone());
        }
        if let Some(click_event) = &other.click_event {
            self.style.click_event = Some(click_event.clone());
        }
        if let Some(font) = &other.font {
            self.style.font = Some(font.clone());
        }
        self
    }

    pub fn build(self) -> Style {
        self.style
    }
}
