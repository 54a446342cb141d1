use std::fmt;

/// An RGB text color, stored as `0xRRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TextColor(u32);

macro_rules! named_colors {
    ($($name:ident = $value:literal => $text:literal),* $(,)?) => {
        impl TextColor {
            $(
                pub const $name: TextColor = TextColor($value);
            )*

            /// The sixteen named colors, in legacy code order.
            pub const NAMED: [(&'static str, TextColor); 16] = [
                $(($text, TextColor::$name),)*
            ];
        }
    };
}

named_colors!(
    BLACK = 0x000000 => "black",
    DARK_BLUE = 0x0000aa => "dark_blue",
    DARK_GREEN = 0x00aa00 => "dark_green",
    DARK_AQUA = 0x00aaaa => "dark_aqua",
    DARK_RED = 0xaa0000 => "dark_red",
    DARK_PURPLE = 0xaa00aa => "dark_purple",
    GOLD = 0xffaa00 => "gold",
    GRAY = 0xaaaaaa => "gray",
    DARK_GRAY = 0x555555 => "dark_gray",
    BLUE = 0x5555ff => "blue",
    GREEN = 0x55ff55 => "green",
    AQUA = 0x55ffff => "aqua",
    RED = 0xff5555 => "red",
    LIGHT_PURPLE = 0xff55ff => "light_purple",
    YELLOW = 0xffff55 => "yellow",
    WHITE = 0xffffff => "white",
);

impl TextColor {
    /// Bits above `0xFFFFFF` are discarded.
    #[inline]
    pub const fn from_value(value: u32) -> Self {
        Self(value & 0xff_ffff)
    }

    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Parses `#rrggbb`.
    ///
    /// # Example
    ///
    /// ```
    /// use na_tagtree::TextColor;
    ///
    /// assert_eq!(TextColor::from_hex("#ffaa00"), Some(TextColor::GOLD));
    /// assert_eq!(TextColor::from_hex("ffaa00"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(text, _)| *text == name)
            .map(|&(_, color)| color)
    }

    /// The name of this color if it is one of the named colors.
    pub fn name(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, color)| color == self)
            .map(|&(text, _)| text)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:06x}", self.0),
        }
    }
}

bitflags::bitflags! {
    /// A set of decorations, one bit each.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextDecorations: u8 {
        const OBFUSCATED = 1 << 0;
        const BOLD = 1 << 1;
        const STRIKETHROUGH = 1 << 2;
        const UNDERLINED = 1 << 3;
        const ITALIC = 1 << 4;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TextDecoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl TextDecoration {
    pub const ALL: [TextDecoration; 5] = [
        Self::Obfuscated,
        Self::Bold,
        Self::Strikethrough,
        Self::Underlined,
        Self::Italic,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Obfuscated => "obfuscated",
            Self::Bold => "bold",
            Self::Strikethrough => "strikethrough",
            Self::Underlined => "underlined",
            Self::Italic => "italic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|decoration| decoration.name() == name)
    }

    #[inline]
    pub const fn flag(self) -> TextDecorations {
        match self {
            Self::Obfuscated => TextDecorations::OBFUSCATED,
            Self::Bold => TextDecorations::BOLD,
            Self::Strikethrough => TextDecorations::STRIKETHROUGH,
            Self::Underlined => TextDecorations::UNDERLINED,
            Self::Italic => TextDecorations::ITALIC,
        }
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a decoration is explicitly on, explicitly off, or inherited.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum DecorationState {
    #[default]
    NotSet,
    False,
    True,
}

impl DecorationState {
    #[inline]
    pub const fn from_bool(flag: bool) -> Self {
        if flag { Self::True } else { Self::False }
    }

    #[inline]
    pub const fn from_option(flag: Option<bool>) -> Self {
        match flag {
            Some(flag) => Self::from_bool(flag),
            None => Self::NotSet,
        }
    }

    #[inline]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::NotSet => None,
            Self::False => Some(false),
            Self::True => Some(true),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NotSet => "not_set",
            Self::False => "false",
            Self::True => "true",
        }
    }
}

impl fmt::Display for DecorationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The tri-state of every decoration, packed into two masks.
///
/// `set` marks decorations with an explicit state; `enabled` holds that
/// state. A bit in `enabled` is never set without the matching bit in `set`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Decorations {
    set: TextDecorations,
    enabled: TextDecorations,
}

impl Decorations {
    pub fn get(&self, decoration: TextDecoration) -> DecorationState {
        let flag = decoration.flag();
        if !self.set.contains(flag) {
            DecorationState::NotSet
        } else {
            DecorationState::from_bool(self.enabled.contains(flag))
        }
    }

    #[must_use]
    pub fn with(mut self, decoration: TextDecoration, state: DecorationState) -> Self {
        let flag = decoration.flag();
        match state {
            DecorationState::NotSet => {
                self.set.remove(flag);
                self.enabled.remove(flag);
            }
            DecorationState::False => {
                self.set.insert(flag);
                self.enabled.remove(flag);
            }
            DecorationState::True => {
                self.set.insert(flag);
                self.enabled.insert(flag);
            }
        }
        self
    }

    /// Overlays the explicit states of `other` onto this one.
    #[must_use]
    pub fn merge(self, other: Decorations) -> Self {
        Self {
            set: self.set | other.set,
            enabled: (self.enabled - other.set) | other.enabled,
        }
    }

    /// Decorations explicitly turned on.
    #[inline]
    pub fn enabled(&self) -> TextDecorations {
        self.enabled
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextDecoration, DecorationState)> + '_ {
        TextDecoration::ALL
            .into_iter()
            .map(|decoration| (decoration, self.get(decoration)))
    }
}

#[cfg(feature = "serde")]
mod ser {
    use serde::{Serialize, Serializer};

    use super::{DecorationState, TextColor, TextDecoration};

    impl Serialize for TextDecoration {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl Serialize for DecorationState {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl Serialize for TextColor {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }
}
