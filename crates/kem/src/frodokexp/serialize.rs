// kem/src/frodokexp/serialize.rs

//! Wire encoding for FrodoKEXP keys and ciphertexts.
//!
//! Matrices are row-major with one little-endian 16-bit word per
//! coefficient. Public coefficients are unsigned in [0, q); secret and
//! confirmation coefficients are two's-complement signed. Decoding depends
//! on the input bytes only.

use frodokexp_internal::endian::{load_u16_le, store_u16_le, u64_from_le_bytes, u64_to_le_bytes};
use zeroize::Zeroizing;

use super::matrix::{PublicMatrix, SecretMatrix, SmallMatrix};
use super::params::{
    CIPHERTEXT_BYTES, CONFIRMATION_BYTES, NAME, PUBLIC_KEY_BYTES, Q_MASK, SECRET_KEY_BYTES,
    SEED_BYTES,
};
use crate::error::{validate, Result};

/// Decode a public-parameter seed.
pub fn decode_seed(bytes: &[u8]) -> Result<[u8; SEED_BYTES]> {
    validate::serialization("seed", bytes.len(), SEED_BYTES)?;
    let mut seed = [0u8; SEED_BYTES];
    seed.copy_from_slice(bytes);
    Ok(seed)
}

/// Encode a public key matrix.
pub fn encode_public_matrix(m: &PublicMatrix) -> Vec<u8> {
    let mut out = vec![0u8; PUBLIC_KEY_BYTES];
    store_u16_le(&mut out, m.as_slice());
    out
}

/// Decode a public key matrix, reducing every coefficient mod q.
pub fn decode_public_matrix(bytes: &[u8]) -> Result<PublicMatrix> {
    validate::key("public key", bytes.len(), PUBLIC_KEY_BYTES)?;
    let mut m = PublicMatrix::zero();
    load_u16_le(m.as_mut_slice(), bytes);
    for c in m.as_mut_slice() {
        *c &= Q_MASK;
    }
    Ok(m)
}

/// Encode a secret key matrix.
pub fn encode_secret_matrix(m: &SecretMatrix) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0u8; SECRET_KEY_BYTES]);
    store_u16_le(&mut out, m.as_slice());
    out
}

/// Decode a secret key matrix.
pub fn decode_secret_matrix(bytes: &[u8]) -> Result<SecretMatrix> {
    validate::key("secret key", bytes.len(), SECRET_KEY_BYTES)?;
    let mut m = SecretMatrix::zero();
    load_u16_le(m.as_mut_slice(), bytes);
    Ok(m)
}

/// Encode a confirmation value.
pub fn encode_small_matrix(m: &SmallMatrix) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0u8; CONFIRMATION_BYTES]);
    store_u16_le(&mut out, m.as_slice());
    out
}

/// Decode a confirmation value.
pub fn decode_small_matrix(bytes: &[u8]) -> Result<SmallMatrix> {
    validate::key("confirmation value", bytes.len(), CONFIRMATION_BYTES)?;
    let mut m = SmallMatrix::zero();
    load_u16_le(m.as_mut_slice(), bytes);
    Ok(m)
}

/// Encode hint bits as a ciphertext.
pub fn encode_ciphertext(hints: u64) -> [u8; CIPHERTEXT_BYTES] {
    u64_to_le_bytes(hints)
}

/// Decode a ciphertext into hint bits.
pub fn decode_ciphertext(bytes: &[u8]) -> Result<u64> {
    validate::ciphertext(NAME, bytes.len(), CIPHERTEXT_BYTES)?;
    Ok(u64_from_le_bytes(bytes))
}
