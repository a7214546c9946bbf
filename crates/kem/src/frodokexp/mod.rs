// kem/src/frodokexp/mod.rs

//! FrodoKEXP split key exchange.
//!
//! A two-party key exchange built on plain (unstructured) LWE. Both parties
//! derive long-term keypairs from a shared public matrix; the responder
//! encapsulates against the initiator's public key with its own secret key,
//! and the initiator decapsulates with its secret key and confirmation value.

mod common;
mod kex;
mod matrix;
mod params;
mod reconcile;
mod sample;
mod scheme;
pub mod serialize;

pub use self::common::{Ciphertext, ConfirmationValue, KeyPair, PublicKey, Role, SecretKey, Seed, SharedSecret};
pub use self::kex::{
    decapsulate, encapsulate, generate_keypair, generate_keypair_a, generate_keypair_b,
    generate_parameters, generate_seed,
};
pub use self::matrix::{PublicMatrix, PublicParameters, SecretMatrix, SmallMatrix};
pub use self::params::{
    CIPHERTEXT_BYTES, CONFIRMATION_BYTES, NAME, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, SEED_BYTES,
    SHARED_SECRET_BYTES,
};
pub use self::scheme::{EncodedKeyPair, FrodoKexp1452};
