//! Little-endian codec primitives
//!
//! FrodoKEXP fixes every multi-byte value on the wire to little-endian, so
//! only that direction is provided.

/// Read a u16 from the first two bytes of `bytes`
pub fn u16_from_le_bytes(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Convert a u16 to little-endian bytes
pub fn u16_to_le_bytes(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Read a u64 from the first eight bytes of `bytes`
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Convert a u64 to little-endian bytes
pub fn u64_to_le_bytes(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Decode `dst.len()` little-endian u16 words from `src`
///
/// # Panics
/// If `src.len() != 2 * dst.len()`. Callers validate lengths first.
pub fn load_u16_le(dst: &mut [u16], src: &[u8]) {
    assert_eq!(src.len(), 2 * dst.len());
    for (word, pair) in dst.iter_mut().zip(src.chunks_exact(2)) {
        *word = u16_from_le_bytes(pair);
    }
}

/// Encode `src` as little-endian u16 words into `dst`
///
/// # Panics
/// If `dst.len() != 2 * src.len()`.
pub fn store_u16_le(dst: &mut [u8], src: &[u16]) {
    assert_eq!(dst.len(), 2 * src.len());
    for (pair, word) in dst.chunks_exact_mut(2).zip(src.iter()) {
        pair.copy_from_slice(&u16_to_le_bytes(*word));
    }
}
