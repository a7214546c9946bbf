// kem/src/frodokexp/scheme.rs

//! `SplitKex` implementation and the byte-level entry points.
//!
//! The byte functions validate every length before any arithmetic runs and
//! report failures through the public error type.

use frodokexp_api::error::Result as ApiResult;
use frodokexp_api::{Serialize, SerializeSecret, SplitKex};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::common::{Ciphertext, ConfirmationValue, KeyPair, PublicKey, Role, SecretKey, Seed, SharedSecret};
use super::kex;
use super::matrix::PublicParameters;
use super::params::{
    CIPHERTEXT_BYTES, CONFIRMATION_BYTES, NAME, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, SEED_BYTES,
};
use frodokexp_api::error::validation;

/// FrodoKEXP with N = 1452, N_BAR = 8, q = 2^15 and 4 extracted bits.
pub struct FrodoKexp1452;

impl SplitKex for FrodoKexp1452 {
    type Seed = Seed;
    type PublicParameters = PublicParameters;
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type Confirmation = ConfirmationValue;
    type Ciphertext = Ciphertext;
    type SharedSecret = SharedSecret;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        NAME
    }

    fn generate_seed<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Seed> {
        Ok(kex::generate_seed(rng)?)
    }

    fn generate_parameters(seed: &Seed) -> PublicParameters {
        kex::generate_parameters(seed)
    }

    fn keypair_a<R: CryptoRng + RngCore>(params: &PublicParameters, rng: &mut R) -> ApiResult<KeyPair> {
        Ok(kex::generate_keypair_a(params, rng)?)
    }

    fn keypair_b<R: CryptoRng + RngCore>(params: &PublicParameters, rng: &mut R) -> ApiResult<KeyPair> {
        Ok(kex::generate_keypair_b(params, rng)?)
    }

    fn public_key(keypair: &KeyPair) -> PublicKey {
        keypair.public_key.clone()
    }

    fn secret_key(keypair: &KeyPair) -> SecretKey {
        keypair.secret_key.clone()
    }

    fn confirmation(keypair: &KeyPair) -> ConfirmationValue {
        keypair.confirmation.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        peer_public_key: &PublicKey,
        own_secret_key: &SecretKey,
    ) -> ApiResult<(SharedSecret, Ciphertext)> {
        Ok(kex::encapsulate(peer_public_key, own_secret_key, rng)?)
    }

    fn decapsulate(
        peer_public_key: &PublicKey,
        own_secret_key: &SecretKey,
        own_confirmation: &ConfirmationValue,
        ciphertext: &Ciphertext,
    ) -> ApiResult<SharedSecret> {
        Ok(kex::decapsulate(
            peer_public_key,
            own_secret_key,
            own_confirmation,
            ciphertext,
        ))
    }
}

/// Encoded keypair: public key, secret key, confirmation value.
pub struct EncodedKeyPair {
    /// Public key bytes.
    pub public_key: Vec<u8>,
    /// Secret key bytes.
    pub secret_key: Zeroizing<Vec<u8>>,
    /// Confirmation value bytes.
    pub confirmation: Zeroizing<Vec<u8>>,
}

impl FrodoKexp1452 {
    /// Expand a seed given as bytes.
    pub fn parameters_from_bytes(seed: &[u8]) -> ApiResult<PublicParameters> {
        validation::length("generate_parameters: seed", seed.len(), SEED_BYTES)?;

        let seed = <Seed as Serialize>::from_bytes(seed)?;
        Ok(kex::generate_parameters(&seed))
    }

    /// Generate an encoded keypair for `role` straight from seed bytes.
    ///
    /// Expands A on every call. Callers generating more than one keypair
    /// should call [`Self::parameters_from_bytes`] once and then
    /// [`Self::keypair_bytes`].
    pub fn keypair_from_seed_bytes<R: CryptoRng + RngCore>(
        seed: &[u8],
        role: Role,
        rng: &mut R,
    ) -> ApiResult<EncodedKeyPair> {
        let params = Self::parameters_from_bytes(seed)?;
        Self::keypair_bytes(&params, role, rng)
    }

    /// Generate a keypair for `role` from expanded parameters and return it
    /// encoded.
    pub fn keypair_bytes<R: CryptoRng + RngCore>(
        params: &PublicParameters,
        role: Role,
        rng: &mut R,
    ) -> ApiResult<EncodedKeyPair> {
        let kp = kex::generate_keypair(params, role, rng)?;
        Ok(EncodedKeyPair {
            public_key: kp.public_key.to_bytes(),
            secret_key: kp.secret_key.to_bytes_zeroizing(),
            confirmation: kp.confirmation.to_bytes_zeroizing(),
        })
    }

    /// Encapsulate over encoded keys; returns the shared secret and the
    /// encoded ciphertext.
    pub fn encapsulate_bytes<R: CryptoRng + RngCore>(
        peer_public_key: &[u8],
        own_secret_key: &[u8],
        rng: &mut R,
    ) -> ApiResult<(SharedSecret, [u8; CIPHERTEXT_BYTES])> {
        validation::key_length("encapsulate: peer public key", peer_public_key.len(), PUBLIC_KEY_BYTES)?;
        validation::key_length("encapsulate: own secret key", own_secret_key.len(), SECRET_KEY_BYTES)?;

        let pk = <PublicKey as Serialize>::from_bytes(peer_public_key)?;
        let sk = <SecretKey as SerializeSecret>::from_bytes(own_secret_key)?;
        let (ss, ct) = kex::encapsulate(&pk, &sk, rng)?;
        Ok((ss, super::serialize::encode_ciphertext(ct.hints())))
    }

    /// Decapsulate over encoded keys and ciphertext.
    pub fn decapsulate_bytes(
        peer_public_key: &[u8],
        own_secret_key: &[u8],
        own_confirmation: &[u8],
        ciphertext: &[u8],
    ) -> ApiResult<SharedSecret> {
        validation::key_length("decapsulate: peer public key", peer_public_key.len(), PUBLIC_KEY_BYTES)?;
        validation::key_length("decapsulate: own secret key", own_secret_key.len(), SECRET_KEY_BYTES)?;
        validation::key_length("decapsulate: own confirmation value", own_confirmation.len(), CONFIRMATION_BYTES)?;
        validation::ciphertext_length("decapsulate: ciphertext", ciphertext.len(), CIPHERTEXT_BYTES)?;

        let pk = <PublicKey as Serialize>::from_bytes(peer_public_key)?;
        let sk = <SecretKey as SerializeSecret>::from_bytes(own_secret_key)?;
        let f = <ConfirmationValue as SerializeSecret>::from_bytes(own_confirmation)?;
        let ct = <Ciphertext as Serialize>::from_bytes(ciphertext)?;
        Ok(kex::decapsulate(&pk, &sk, &f, &ct))
    }
}
