// File: crates/api/src/traits/kex.rs

//! Trait definition for split key exchange with enhanced type safety
//!
//! A split key exchange differs from a plain KEM in that both sides hold a
//! long-term keypair derived from shared public parameters. Encapsulation
//! combines the peer's public key with the caller's own secret key, and
//! decapsulation additionally consumes the caller's confirmation value.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for a two-party split key exchange with domain-specific types.
///
/// # Security Design
///
/// Every operation is stateless. Implementations must not cache secrets
/// between calls and must take all randomness from the RNG they are handed.
pub trait SplitKex {
    /// Seed that public parameters are expanded from.
    type Seed: Clone + Serialize;

    /// Expanded public parameters, shared read-only by both parties.
    type PublicParameters;

    /// Public key type.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    ///
    /// # Security Note
    /// Implements `Zeroize` and never leaves its owner.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Auxiliary secret consumed only by its owner's decapsulation.
    type Confirmation: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type, transmitted in the clear.
    type Ciphertext: Clone + Serialize;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Should be converted to application keys and zeroized immediately.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Keypair type bundling a party's public key, secret key and confirmation value.
    type KeyPair;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Draw a fresh public-parameter seed.
    fn generate_seed<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::Seed>;

    /// Deterministically expand a seed into public parameters.
    fn generate_parameters(seed: &Self::Seed) -> Self::PublicParameters;

    /// Generate the initiator's keypair (the party that decapsulates).
    fn keypair_a<R: CryptoRng + RngCore>(
        params: &Self::PublicParameters,
        rng: &mut R,
    ) -> Result<Self::KeyPair>;

    /// Generate the responder's keypair (the party that encapsulates).
    fn keypair_b<R: CryptoRng + RngCore>(
        params: &Self::PublicParameters,
        rng: &mut R,
    ) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Extract the confirmation value from keypair.
    fn confirmation(keypair: &Self::KeyPair) -> Self::Confirmation;

    /// Derive a shared secret from the peer's public key and the caller's secret key.
    ///
    /// # Security Requirements
    /// - Must use fresh randomness from the provided RNG.
    /// - Must not branch on secret data.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        peer_public_key: &Self::PublicKey,
        own_secret_key: &Self::SecretKey,
    ) -> Result<(Self::SharedSecret, Self::Ciphertext)>;

    /// Recover the shared secret produced by the peer's `encapsulate`.
    ///
    /// # Security Requirements
    /// - Must be constant-time.
    /// - Returns a value even when reconciliation fails; mismatch is silent.
    fn decapsulate(
        peer_public_key: &Self::PublicKey,
        own_secret_key: &Self::SecretKey,
        own_confirmation: &Self::Confirmation,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
