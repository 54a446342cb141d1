use crate::{Component, Style};

/// One named field of a component, exposed for debug printing.
///
/// Properties are advisory: they play no part in equality.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Property<'a> {
    name: &'static str,
    value: PropertyValue<'a>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PropertyValue<'a> {
    Str(&'a str),
    Style(&'a Style),
    Components(&'a [Component]),
}

impl<'a> Property<'a> {
    #[inline]
    pub const fn new(name: &'static str, value: PropertyValue<'a>) -> Self {
        Self { name, value }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn value(&self) -> PropertyValue<'a> {
        self.value
    }
}
