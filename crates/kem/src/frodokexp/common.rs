// kem/src/frodokexp/common.rs

//! Key, seed and ciphertext types shared by the FrodoKEXP operations.

use core::fmt;

use frodokexp_api::error::Result as ApiResult;
use frodokexp_api::{SecretBytes, Serialize, SerializeSecret};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::matrix::{PublicMatrix, SecretMatrix, SmallMatrix};
use super::params::{SEED_BYTES, SHARED_SECRET_BYTES};
use super::serialize;

/// Which side of the exchange a keypair belongs to.
///
/// Role A's public key feeds the peer's `encapsulate`; its secret key and
/// confirmation value feed its own `decapsulate`. Role B's public key feeds
/// the peer's `decapsulate`; its secret key feeds its own `encapsulate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Initiator; decapsulates.
    A,
    /// Responder; encapsulates.
    B,
}

/// Seed of the public parameters.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct Seed([u8; SEED_BYTES]);

impl Seed {
    /// Wrap raw seed bytes.
    pub fn new(bytes: [u8; SEED_BYTES]) -> Self {
        Self(bytes)
    }

    /// Raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed(")?;
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl Serialize for Seed {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(serialize::decode_seed(bytes)?))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// Public key: an N_BAR x N matrix with coefficients in [0, q).
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct PublicKey {
    matrix: PublicMatrix,
}

impl PublicKey {
    pub(crate) fn from_matrix(matrix: PublicMatrix) -> Self {
        Self { matrix }
    }

    pub(crate) fn matrix(&self) -> &PublicMatrix {
        &self.matrix
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = &self.matrix.as_slice()[..4];
        write!(f, "PublicKey({:?}..)", head)
    }
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::from_matrix(serialize::decode_public_matrix(bytes)?))
    }

    fn to_bytes(&self) -> Vec<u8> {
        serialize::encode_public_matrix(&self.matrix)
    }
}

/// Secret key: an N_BAR x N matrix of small signed coefficients.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    matrix: SecretMatrix,
}

impl SecretKey {
    pub(crate) fn from_matrix(matrix: SecretMatrix) -> Self {
        Self { matrix }
    }

    pub(crate) fn matrix(&self) -> &SecretMatrix {
        &self.matrix
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey[REDACTED]")
    }
}

impl SerializeSecret for SecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::from_matrix(serialize::decode_secret_matrix(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        serialize::encode_secret_matrix(&self.matrix)
    }
}

/// Confirmation value F: an N_BAR x N_BAR matrix added during decapsulation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ConfirmationValue {
    matrix: SmallMatrix,
}

impl ConfirmationValue {
    pub(crate) fn from_matrix(matrix: SmallMatrix) -> Self {
        Self { matrix }
    }

    pub(crate) fn matrix(&self) -> &SmallMatrix {
        &self.matrix
    }
}

impl fmt::Debug for ConfirmationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfirmationValue[REDACTED]")
    }
}

impl SerializeSecret for ConfirmationValue {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::from_matrix(serialize::decode_small_matrix(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        serialize::encode_small_matrix(&self.matrix)
    }
}

/// Ciphertext: one reconciliation hint bit per coefficient of V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u64", into = "u64"))]
pub struct Ciphertext(u64);

impl Ciphertext {
    /// Wrap hint bits.
    pub fn new(hints: u64) -> Self {
        Self(hints)
    }

    /// Hint bits; bit `i` belongs to coefficient `i` in row-major order.
    pub fn hints(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Ciphertext {
    fn from(hints: u64) -> Self {
        Self(hints)
    }
}

impl From<Ciphertext> for u64 {
    fn from(ct: Ciphertext) -> u64 {
        ct.0
    }
}

impl Serialize for Ciphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(serialize::decode_ciphertext(bytes)?))
    }

    fn to_bytes(&self) -> Vec<u8> {
        serialize::encode_ciphertext(self.0).to_vec()
    }
}

/// 32-byte shared secret; zeroized on drop, compared in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(SecretBytes<SHARED_SECRET_BYTES>);

impl SharedSecret {
    pub(crate) fn new(bytes: [u8; SHARED_SECRET_BYTES]) -> Self {
        Self(SecretBytes::new(bytes))
    }

    /// Secret bytes.
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_BYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref().ct_eq(other.0.as_ref()).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret[REDACTED]")
    }
}

impl SerializeSecret for SharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

/// One party's keypair.
#[derive(Clone)]
pub struct KeyPair {
    pub(crate) role: Role,
    pub(crate) public_key: PublicKey,
    pub(crate) secret_key: SecretKey,
    pub(crate) confirmation: ConfirmationValue,
}

impl KeyPair {
    /// Role this keypair was generated for.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Public key, sent to the peer.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Secret key, never leaves its owner.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Confirmation value, consumed only by its owner's `decapsulate`.
    pub fn confirmation(&self) -> &ConfirmationValue {
        &self.confirmation
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("role", &self.role)
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Vec<u8>> for Seed {
    type Error = frodokexp_api::Error;

    fn try_from(bytes: Vec<u8>) -> ApiResult<Self> {
        <Self as Serialize>::from_bytes(&bytes)
    }
}

#[cfg(feature = "serde")]
impl From<Seed> for Vec<u8> {
    fn from(seed: Seed) -> Vec<u8> {
        seed.to_bytes()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Vec<u8>> for PublicKey {
    type Error = frodokexp_api::Error;

    fn try_from(bytes: Vec<u8>) -> ApiResult<Self> {
        <Self as Serialize>::from_bytes(&bytes)
    }
}

#[cfg(feature = "serde")]
impl From<PublicKey> for Vec<u8> {
    fn from(pk: PublicKey) -> Vec<u8> {
        pk.to_bytes()
    }
}
