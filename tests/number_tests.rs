//! Tests for numeric tags and their coercions

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use na_tagtree::{
    BinaryTag, ByteTag, DoubleTag, FloatTag, IntTag, LongTag, NumberTag, ShortTag,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_value_access() {
    assert_eq!(ByteTag::of(-3).value(), -3);
    assert_eq!(ShortTag::of(1234).value(), 1234);
    assert_eq!(IntTag::of(i32::MIN).value(), i32::MIN);
    assert_eq!(LongTag::of(1 << 40).value(), 1 << 40);
    assert_eq!(FloatTag::of(1.25).value(), 1.25);
    assert_eq!(DoubleTag::of(-0.5).value(), -0.5);
}

#[test]
fn test_integral_narrowing_wraps() {
    assert_eq!(IntTag::of(300).as_byte(), 44);
    assert_eq!(IntTag::of(-129).as_byte(), 127);
    assert_eq!(IntTag::of(70000).as_short(), 4464);
    assert_eq!(LongTag::of(0x1_0000_0005).as_int(), 5);
    assert_eq!(ShortTag::of(-1).as_byte(), -1);
}

#[test]
fn test_integral_widening_is_exact() {
    assert_eq!(ByteTag::of(-7).as_long(), -7);
    assert_eq!(ShortTag::of(-300).as_int(), -300);
    assert_eq!(IntTag::of(i32::MAX).as_long(), i32::MAX as i64);
    assert_eq!(IntTag::of(3).as_double(), 3.0);
    assert_eq!(LongTag::of(-2).as_float(), -2.0);
}

#[test]
fn test_float_coercion_floors() {
    assert_eq!(FloatTag::of(-1.5).as_int(), -2);
    assert_eq!(FloatTag::of(1.5).as_int(), 1);
    assert_eq!(FloatTag::of(-0.1).as_long(), -1);
    assert_eq!(FloatTag::of(2.999).as_short(), 2);
    assert_eq!(DoubleTag::of(-1.5).as_int(), -2);
    assert_eq!(DoubleTag::of(-2.0).as_long(), -2);
    assert_eq!(DoubleTag::of(7.9).as_byte(), 7);
}

#[test]
fn test_float_coercion_narrows_after_floor() {
    assert_eq!(FloatTag::of(300.7).as_byte(), 44);
    assert_eq!(DoubleTag::of(-129.5).as_byte(), 126);
    assert_eq!(DoubleTag::of(65536.0 + 3.2).as_short(), 3);
}

#[test]
fn test_float_coercion_of_nan_and_infinity() {
    assert_eq!(FloatTag::of(f32::NAN).as_int(), 0);
    assert_eq!(FloatTag::of(f32::NAN).as_long(), 0);
    assert_eq!(FloatTag::of(f32::NAN).as_byte(), 0);
    assert_eq!(FloatTag::of(f32::INFINITY).as_int(), i32::MAX);
    assert_eq!(FloatTag::of(f32::NEG_INFINITY).as_int(), i32::MIN);
    assert_eq!(FloatTag::of(f32::INFINITY).as_long(), i64::MAX);
    assert_eq!(DoubleTag::of(f64::NEG_INFINITY).as_long(), i64::MIN);
    // i32::MAX is 0x7fffffff, its low byte is 0xff
    assert_eq!(FloatTag::of(f32::INFINITY).as_byte(), -1);
    assert_eq!(FloatTag::of(f32::NEG_INFINITY).as_short(), 0);
}

#[test]
fn test_float_to_floating_conversions() {
    assert_eq!(FloatTag::of(0.5).as_double(), 0.5);
    assert_eq!(DoubleTag::of(0.25).as_float(), 0.25);
    assert!(FloatTag::of(f32::NAN).as_double().is_nan());
}

#[test]
fn test_float_equality_is_bitwise() {
    assert_eq!(FloatTag::of(f32::NAN), FloatTag::of(f32::NAN));
    assert_eq!(DoubleTag::of(f64::NAN), DoubleTag::of(f64::NAN));

    let quiet = f32::from_bits(0x7fc0_0000);
    let payload = f32::from_bits(0x7fc0_0001);
    assert!(quiet.is_nan() && payload.is_nan());
    assert_ne!(FloatTag::of(quiet), FloatTag::of(payload));

    assert_ne!(FloatTag::of(0.0), FloatTag::of(-0.0));
    assert_ne!(DoubleTag::of(0.0), DoubleTag::of(-0.0));
    assert_eq!(FloatTag::of(1.5), FloatTag::of(1.5));
}

#[test]
fn test_float_hash_consistent_with_equality() {
    assert_eq!(
        hash_of(&FloatTag::of(f32::NAN)),
        hash_of(&FloatTag::of(f32::NAN))
    );
    assert_eq!(hash_of(&DoubleTag::of(2.5)), hash_of(&DoubleTag::of(2.5)));
    assert_ne!(hash_of(&FloatTag::of(0.0)), hash_of(&FloatTag::of(-0.0)));
}

#[test]
fn test_different_numeric_types_are_unequal() {
    assert_ne!(BinaryTag::from(1i32), BinaryTag::from(1i64));
    assert_ne!(BinaryTag::from(1.0f32), BinaryTag::from(1.0f64));
}

#[test]
fn test_byte_booleans() {
    assert_eq!(ByteTag::from_bool(true), ByteTag::ONE);
    assert_eq!(ByteTag::from_bool(false), ByteTag::ZERO);
    assert!(ByteTag::of(5).as_bool());
    assert!(!ByteTag::ZERO.as_bool());
    assert_eq!(BinaryTag::from(true), BinaryTag::Byte(ByteTag::ONE));
}

#[test]
fn test_binary_tag_coercion() {
    let tag = BinaryTag::from(FloatTag::of(-1.5));
    assert_eq!(tag.to_int(), Some(-2));
    assert_eq!(tag.to_double(), Some(-1.5));
    assert_eq!(tag.as_float(), Some(-1.5));
    assert_eq!(tag.as_int(), None);

    assert_eq!(BinaryTag::from("12").to_int(), None);
    assert_eq!(BinaryTag::End.to_long(), None);
    assert!(BinaryTag::from(7i16).is_number());
}
