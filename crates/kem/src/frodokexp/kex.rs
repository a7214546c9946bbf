// kem/src/frodokexp/kex.rs

//! The FrodoKEXP operations over typed keys.
//!
//! ```text
//! A:  B_A = S_A·Aᵀ + E_A          B:  B_B = S_B·A + E_B
//! encapsulate (B):  V = B_A·S_Bᵀ + E'      ct = hints(V)
//! decapsulate (A):  W = S_A·B_Bᵀ + F_A     W ≈ V
//! ```
//!
//! Both sides hash the reconciled key nibbles together with the ciphertext.

use rand::{CryptoRng, RngCore};
use sha3::{Digest, Sha3_256};
use zeroize::Zeroize;

use super::common::{Ciphertext, ConfirmationValue, KeyPair, PublicKey, Role, SecretKey, Seed, SharedSecret};
use super::matrix::{self, PublicParameters, SecretMatrix, SmallMatrix};
use super::params::{SEED_BYTES, SHARED_SECRET_BYTES, SQUARE_LEN};
use super::reconcile;
use super::sample;
use super::serialize::encode_ciphertext;
use crate::error::{Error, Result};

/// Domain label prefixed to the shared secret hash input.
const SHARED_SECRET_LABEL: &[u8] = b"FrodoKEXP-ss";

/// Draw a fresh public-parameter seed.
pub fn generate_seed<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Seed> {
    let mut bytes = [0u8; SEED_BYTES];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|_| Error::Random { context: "generate_seed" })?;
    Ok(Seed::new(bytes))
}

/// Expand a seed into the public matrix A. Deterministic.
pub fn generate_parameters(seed: &Seed) -> PublicParameters {
    PublicParameters::expand(seed)
}

/// Generate a keypair for `role`.
pub fn generate_keypair<R: RngCore + CryptoRng>(
    params: &PublicParameters,
    role: Role,
    rng: &mut R,
) -> Result<KeyPair> {
    let noise = sample::noise_seed(rng, "generate_keypair")?;

    let mut s = SecretMatrix::zero();
    let mut e = SecretMatrix::zero();
    let mut f = SmallMatrix::zero();
    sample::sample_chi(&noise, sample::NONCE_SECRET, s.as_mut_slice());
    sample::sample_chi(&noise, sample::NONCE_ERROR, e.as_mut_slice());
    sample::sample_chi(&noise, sample::NONCE_CONFIRMATION, f.as_mut_slice());

    let b = match role {
        Role::A => matrix::mul_add_sa_transposed(&s, params, &e),
        Role::B => matrix::mul_add_sa(&s, params, &e),
    };

    Ok(KeyPair {
        role,
        public_key: PublicKey::from_matrix(b),
        secret_key: SecretKey::from_matrix(s),
        confirmation: ConfirmationValue::from_matrix(f),
    })
}

/// Generate the initiator's keypair.
pub fn generate_keypair_a<R: RngCore + CryptoRng>(params: &PublicParameters, rng: &mut R) -> Result<KeyPair> {
    generate_keypair(params, Role::A, rng)
}

/// Generate the responder's keypair.
pub fn generate_keypair_b<R: RngCore + CryptoRng>(params: &PublicParameters, rng: &mut R) -> Result<KeyPair> {
    generate_keypair(params, Role::B, rng)
}

/// Encapsulate against role A's public key with role B's secret key.
pub fn encapsulate<R: RngCore + CryptoRng>(
    peer_public_key: &PublicKey,
    own_secret_key: &SecretKey,
    rng: &mut R,
) -> Result<(SharedSecret, Ciphertext)> {
    let noise = sample::noise_seed(rng, "encapsulate")?;
    let mut e_prime = SmallMatrix::zero();
    sample::sample_cbd(&noise, sample::NONCE_EPHEMERAL, e_prime.as_mut_slice());

    let v = matrix::mul_add_transposed(
        peer_public_key.matrix().as_slice(),
        own_secret_key.matrix().as_slice(),
        &e_prime,
    );
    let ct = Ciphertext::new(reconcile::hints(&v));
    let nibbles = reconcile::round_all(&v);

    Ok((derive_shared_secret(&nibbles, &ct), ct))
}

/// Decapsulate with role A's secret key and confirmation value against
/// role B's public key.
///
/// Never fails: a reconciliation mismatch yields a different secret.
pub fn decapsulate(
    peer_public_key: &PublicKey,
    own_secret_key: &SecretKey,
    own_confirmation: &ConfirmationValue,
    ciphertext: &Ciphertext,
) -> SharedSecret {
    let w = matrix::mul_add_transposed(
        own_secret_key.matrix().as_slice(),
        peer_public_key.matrix().as_slice(),
        own_confirmation.matrix(),
    );
    let nibbles = reconcile::reconcile_all(&w, ciphertext.hints());

    derive_shared_secret(&nibbles, ciphertext)
}

/// `SHA3-256(label || packed nibbles || ciphertext)`.
fn derive_shared_secret(nibbles: &[u16; SQUARE_LEN], ct: &Ciphertext) -> SharedSecret {
    let packed = reconcile::pack_nibbles(nibbles);

    let mut hasher = Sha3_256::new();
    hasher.update(SHARED_SECRET_LABEL);
    hasher.update(&packed[..]);
    hasher.update(encode_ciphertext(ct.hints()));
    let mut digest = hasher.finalize();

    let mut out = [0u8; SHARED_SECRET_BYTES];
    out.copy_from_slice(&digest);
    digest.as_mut_slice().zeroize();
    SharedSecret::new(out)
}
