#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

// `as` saturates and maps NaN to zero, which is the coercion contract for
// floating sources; narrower integral targets wrap from these results.

#[inline]
pub(crate) fn floor_f32(value: f32) -> i32 {
    value.floor() as i32
}

#[inline]
pub(crate) fn floor_f64(value: f64) -> i32 {
    value.floor() as i32
}

#[inline]
pub(crate) fn floor_f32_long(value: f32) -> i64 {
    value.floor() as i64
}

#[inline]
pub(crate) fn floor_f64_long(value: f64) -> i64 {
    value.floor() as i64
}

/// Bit-exact float equality: NaNs with the same payload are equal, `0.0` and
/// `-0.0` are not.
#[inline]
pub(crate) fn f32_bits_eq(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits()
}

#[inline]
pub(crate) fn f64_bits_eq(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}
