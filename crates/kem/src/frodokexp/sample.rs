// kem/src/frodokexp/sample.rs

//! Seed expansion and noise sampling.
//!
//! The public matrix is expanded with SHAKE128. Secret and error matrices
//! are drawn from a 32-byte noise seed taken from the caller's RNG and
//! stretched with SHAKE256 under a one-byte nonce per matrix.

use frodokexp_internal::endian::load_u16_le;
use frodokexp_internal::constant_time::ct_select;
use rand::{CryptoRng, RngCore};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake256};
use subtle::Choice;
use zeroize::Zeroizing;

use super::params::{ETA_EPHEMERAL, N, NOISE_SEED_BYTES, Q_MASK};
use crate::error::{Error, Result};

/// -1 in two's complement.
const MINUS_ONE: u16 = u16::MAX;

/// Domain separator for rows of A.
const DOMAIN_MATRIX: u8 = 0x00;

/// Nonce for the secret matrix S.
pub(crate) const NONCE_SECRET: u8 = 0;
/// Nonce for the error matrix E.
pub(crate) const NONCE_ERROR: u8 = 1;
/// Nonce for the confirmation value F.
pub(crate) const NONCE_CONFIRMATION: u8 = 2;
/// Nonce for the encapsulator's ephemeral error E'.
pub(crate) const NONCE_EPHEMERAL: u8 = 3;

/// Expand row `row` of A: `SHAKE128(0x00 || seed || le16(row))`, 2·N bytes,
/// each little-endian word reduced mod q.
pub(crate) fn expand_row(seed: &[u8], row: usize, out: &mut [u16]) {
    debug_assert_eq!(out.len(), N);

    let mut xof = Shake128::default();
    xof.update(&[DOMAIN_MATRIX]);
    xof.update(seed);
    xof.update(&(row as u16).to_le_bytes());
    let mut reader = xof.finalize_xof();

    let mut buf = [0u8; 2 * N];
    reader.read(&mut buf);
    load_u16_le(out, &buf);
    for c in out.iter_mut() {
        *c &= Q_MASK;
    }
}

/// Draw a fresh noise seed from the caller's RNG.
pub(crate) fn noise_seed<R: RngCore + CryptoRng>(
    rng: &mut R,
    context: &'static str,
) -> Result<Zeroizing<[u8; NOISE_SEED_BYTES]>> {
    let mut seed = Zeroizing::new([0u8; NOISE_SEED_BYTES]);
    rng.try_fill_bytes(&mut seed[..])
        .map_err(|_| Error::Random { context })?;
    Ok(seed)
}

/// Fill `out` with `SHAKE256(seed || nonce)`.
fn prf(seed: &[u8; NOISE_SEED_BYTES], nonce: u8, out: &mut [u8]) {
    let mut xof = Shake256::default();
    xof.update(seed);
    xof.update(&[nonce]);
    xof.finalize_xof().read(out);
}

#[inline(always)]
fn bit(buf: &[u8], index: usize) -> u16 {
    ((buf[index >> 3] >> (index & 7)) & 1) as u16
}

/// Sample each coefficient uniformly from {-1, +1}.
///
/// One PRF bit per coefficient: 0 selects +1, 1 selects -1.
pub(crate) fn sample_chi(seed: &[u8; NOISE_SEED_BYTES], nonce: u8, out: &mut [u16]) {
    let mut buf = Zeroizing::new(vec![0u8; out.len().div_ceil(8)]);
    prf(seed, nonce, &mut buf);
    for (i, c) in out.iter_mut().enumerate() {
        *c = ct_select(1u16, MINUS_ONE, Choice::from(bit(&buf, i) as u8));
    }
}

/// Sample each coefficient from the centered binomial distribution of width
/// `ETA_EPHEMERAL`: the difference of two sums of `ETA_EPHEMERAL` bits.
pub(crate) fn sample_cbd(seed: &[u8; NOISE_SEED_BYTES], nonce: u8, out: &mut [u16]) {
    let bits_per_coeff = 2 * ETA_EPHEMERAL;
    let mut buf = Zeroizing::new(vec![0u8; (out.len() * bits_per_coeff).div_ceil(8)]);
    prf(seed, nonce, &mut buf);
    for (i, c) in out.iter_mut().enumerate() {
        let base = i * bits_per_coeff;
        let mut a = 0u16;
        let mut b = 0u16;
        for k in 0..ETA_EPHEMERAL {
            a += bit(&buf, base + k);
            b += bit(&buf, base + ETA_EPHEMERAL + k);
        }
        *c = a.wrapping_sub(b);
    }
}
