use std::hash::{Hash, Hasher};

use crate::{Error, Key, Result, util::f32_bits_eq};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SoundSource {
    #[default]
    Master,
    Music,
    Record,
    Weather,
    Block,
    Hostile,
    Neutral,
    Player,
    Ambient,
    Voice,
}

impl SoundSource {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Music => "music",
            Self::Record => "record",
            Self::Weather => "weather",
            Self::Block => "block",
            Self::Hostile => "hostile",
            Self::Neutral => "neutral",
            Self::Player => "player",
            Self::Ambient => "ambient",
            Self::Voice => "voice",
        }
    }
}

/// A sound to be played: which one, on which channel, how loud and how high.
///
/// Volume and pitch compare bit-exactly, like [`FloatTag`](crate::FloatTag).
#[derive(Clone, Debug)]
pub struct Sound {
    name: Key,
    source: SoundSource,
    volume: f32,
    pitch: f32,
}

impl Sound {
    pub fn new(name: Key, source: SoundSource, volume: f32, pitch: f32) -> Self {
        Self {
            name,
            source,
            volume,
            pitch,
        }
    }

    pub fn builder() -> SoundBuilder {
        SoundBuilder::default()
    }

    #[inline]
    pub fn name(&self) -> &Key {
        &self.name
    }

    #[inline]
    pub fn source(&self) -> SoundSource {
        self.source
    }

    #[inline]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn to_builder(&self) -> SoundBuilder {
        SoundBuilder {
            name: Some(self.name.clone()),
            source: self.source,
            volume: self.volume,
            pitch: self.pitch,
        }
    }
}

impl PartialEq for Sound {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.source == other.source
            && f32_bits_eq(self.volume, other.volume)
            && f32_bits_eq(self.pitch, other.pitch)
    }
}

impl Eq for Sound {}

impl Hash for Sound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.source.hash(state);
        self.volume.to_bits().hash(state);
        self.pitch.to_bits().hash(state);
    }
}

/// Scratch form of a [`Sound`]. Only the name is required; the source
/// defaults to [`SoundSource::Master`], volume and pitch to `1.0`.
#[derive(Clone, Debug)]
pub struct SoundBuilder {
    name: Option<Key>,
    source: SoundSource,
    volume: f32,
    pitch: f32,
}

impl Default for SoundBuilder {
    fn default() -> Self {
        Self {
            name: None,
            source: SoundSource::Master,
            volume: 1.0,
            pitch: 1.0,
        }
    }
}

impl SoundBuilder {
    pub fn name(mut self, name: Key) -> Self {
        self.name = Some(name);
        self
    }

    pub fn source(mut self, source: SoundSource) -> Self {
        self.source = source;
        self
    }

    pub fn volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    pub fn pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn build(self) -> Result<Sound> {
        let Some(name) = self.name else {
            tracing::debug!("sound builder has no name");
            return Err(Error::MissingField("name"));
        };
        Ok(Sound::new(name, self.source, self.volume, self.pitch))
    }
}
