use std::collections::HashSet;

use na_tagtree::{Error, Key, MINECRAFT_NAMESPACE, Sound, SoundSource};

#[test]
fn test_key_parse() {
    let key: Key = "entity.player.levelup".parse().unwrap();
    assert_eq!(key.namespace(), MINECRAFT_NAMESPACE);
    assert_eq!(key.value(), "entity.player.levelup");
    assert_eq!(key.to_string(), "minecraft:entity.player.levelup");

    let custom = Key::parse("my_pack:sounds/ding-2").unwrap();
    assert_eq!(custom.namespace(), "my_pack");
    assert_eq!(custom.value(), "sounds/ding-2");
    assert_eq!(Key::new("my_pack", "sounds/ding-2").unwrap(), custom);
}

#[test]
fn test_key_rejects_bad_characters() {
    assert!(matches!(Key::parse("Upper:case"), Err(Error::InvalidKey(_))));
    assert!(matches!(Key::parse("has space"), Err(Error::InvalidKey(_))));
    assert!(Key::new("a/b", "c").is_err());
    assert!(Key::new("ns", "a:b").is_err());
    assert!(!Key::parse("bad key").unwrap_err().is_invalid_argument());
}

#[test]
fn test_sound_builder_defaults() {
    let name = Key::parse("block.note_block.harp").unwrap();
    let sound = Sound::builder().name(name.clone()).build().unwrap();
    assert_eq!(sound.name(), &name);
    assert_eq!(sound.source(), SoundSource::Master);
    assert_eq!(sound.volume(), 1.0);
    assert_eq!(sound.pitch(), 1.0);
}

#[test]
fn test_sound_builder_requires_name() {
    let result = Sound::builder().source(SoundSource::Music).build();
    assert_eq!(result.unwrap_err(), Error::MissingField("name"));
}

#[test]
fn test_sound_round_trip_and_equality() {
    let sound = Sound::new(
        Key::parse("ambient.cave").unwrap(),
        SoundSource::Ambient,
        0.5,
        f32::NAN,
    );
    assert_eq!(sound.to_builder().build().unwrap(), sound);

    let louder = sound.to_builder().volume(0.75).build().unwrap();
    assert_ne!(louder, sound);
    assert_eq!(sound.volume(), 0.5);

    let mut set = HashSet::new();
    set.insert(sound.clone());
    set.insert(sound.to_builder().build().unwrap());
    set.insert(louder);
    assert_eq!(set.len(), 2);

    let zero = Sound::new(Key::parse("a").unwrap(), SoundSource::Voice, 0.0, 1.0);
    let negative_zero = Sound::new(Key::parse("a").unwrap(), SoundSource::Voice, -0.0, 1.0);
    assert_ne!(zero, negative_zero);
}

#[test]
fn test_sound_source_names() {
    assert_eq!(SoundSource::default(), SoundSource::Master);
    assert_eq!(SoundSource::Hostile.name(), "hostile");
    assert_eq!(SoundSource::Voice.name(), "voice");
}

#[test]
fn test_sound_volume_equality_matches_float_tags() {
    use na_tagtree::{DoubleTag, FloatTag};

    let sound = |volume: f32| {
        Sound::new(Key::parse("a").unwrap(), SoundSource::Block, volume, 1.0)
    };
    let values = [0.0f32, -0.0, 1.0, f32::NAN, -f32::NAN, f32::INFINITY];
    for a in values {
        for b in values {
            let tags_equal = FloatTag::of(a) == FloatTag::of(b);
            assert_eq!(sound(a) == sound(b), tags_equal, "{a} vs {b}");
            assert_eq!(DoubleTag::of(a as f64) == DoubleTag::of(b as f64), tags_equal);
        }
    }
}
