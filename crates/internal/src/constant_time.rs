//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Only the lengths
/// are compared with an early exit; lengths are public in every caller.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time selection
///
/// Returns `a` if `condition` is false, `b` if `condition` is true.
pub fn ct_select<T>(a: T, b: T, condition: Choice) -> T
where
    T: ConditionallySelectable,
{
    T::conditional_select(&a, &b, condition)
}

/// All-ones mask if `bit` is 1, all-zeros if `bit` is 0
///
/// Only the lowest bit of `bit` is looked at.
#[inline(always)]
pub fn ct_mask_u16(bit: u16) -> u16 {
    0u16.wrapping_sub(bit & 1)
}

/// Extract bit `index` of `value` as 0 or 1 without branching
#[inline(always)]
pub fn ct_bit_u16(value: u16, index: u32) -> u16 {
    (value >> index) & 1
}
