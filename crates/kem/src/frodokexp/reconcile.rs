// kem/src/frodokexp/reconcile.rs

//! Key reconciliation.
//!
//! The encapsulator rounds each coefficient of V to its top `B` bits and
//! publishes one hint bit per coefficient: the bit just below the rounding
//! point. The decapsulator offsets its own approximation W by a quarter or
//! three quarters of the rounding interval according to that hint, then
//! rounds down. Both sides agree whenever `|W - V| <= 2^(SHIFT - 2)`.
//!
//! Every function here is branch-free in the coefficient values.

use frodokexp_internal::constant_time::{ct_bit_u16, ct_mask_u16};
use zeroize::Zeroizing;

use super::matrix::SmallMatrix;
use super::params::{B, Q_MASK, SHARED_SECRET_BYTES, SHIFT, SQUARE_LEN};

const KEY_MASK: u16 = (1 << B) - 1;
const HALF: u16 = 1 << (SHIFT - 1);
const QUARTER: u16 = 1 << (SHIFT - 2);

/// Hint bit for a coefficient: bit `SHIFT - 1` of `v`.
#[inline(always)]
pub(crate) fn hint(v: u16) -> u16 {
    ct_bit_u16(v, SHIFT - 1)
}

/// Key nibble on the encapsulator side: `v` rounded to the nearest multiple
/// of `2^SHIFT`, top `B` bits, wrapping mod `2^B`.
#[inline(always)]
pub(crate) fn round(v: u16) -> u16 {
    ((v.wrapping_add(HALF) & Q_MASK) >> SHIFT) & KEY_MASK
}

/// Key nibble on the decapsulator side from its approximation `w` and the
/// peer's hint bit `h`.
#[inline(always)]
pub(crate) fn reconcile(w: u16, h: u16) -> u16 {
    let offset = QUARTER.wrapping_add(ct_mask_u16(h) & HALF);
    ((w.wrapping_add(offset) & Q_MASK) >> SHIFT) & KEY_MASK
}

/// Hints for every coefficient of V packed into a u64, bit `i` for
/// coefficient `i` in row-major order.
pub(crate) fn hints(v: &SmallMatrix) -> u64 {
    v.as_slice()
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &c)| acc | ((hint(c) as u64) << i))
}

/// Encapsulator key nibbles.
pub(crate) fn round_all(v: &SmallMatrix) -> Zeroizing<[u16; SQUARE_LEN]> {
    let mut out = Zeroizing::new([0u16; SQUARE_LEN]);
    for (dst, &c) in out.iter_mut().zip(v.as_slice()) {
        *dst = round(c);
    }
    out
}

/// Decapsulator key nibbles.
pub(crate) fn reconcile_all(w: &SmallMatrix, hints: u64) -> Zeroizing<[u16; SQUARE_LEN]> {
    let mut out = Zeroizing::new([0u16; SQUARE_LEN]);
    for (i, (dst, &c)) in out.iter_mut().zip(w.as_slice()).enumerate() {
        *dst = reconcile(c, ((hints >> i) & 1) as u16);
    }
    out
}

/// Pack 64 nibbles into 32 bytes: nibble `2j` in the low half of byte `j`,
/// nibble `2j + 1` in the high half.
pub(crate) fn pack_nibbles(nibbles: &[u16; SQUARE_LEN]) -> Zeroizing<[u8; SHARED_SECRET_BYTES]> {
    let mut out = Zeroizing::new([0u8; SHARED_SECRET_BYTES]);
    for (byte, pair) in out.iter_mut().zip(nibbles.chunks_exact(2)) {
        *byte = ((pair[0] & KEY_MASK) | ((pair[1] & KEY_MASK) << 4)) as u8;
    }
    out
}
