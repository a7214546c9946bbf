//! # frodokexp
//!
//! A two-party split key exchange over unstructured LWE.
//!
//! ## Usage
//!
//! ```no_run
//! use frodokexp::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> frodokexp::Result<()> {
//! let seed = FrodoKexp1452::generate_seed(&mut OsRng)?;
//! let params = FrodoKexp1452::generate_parameters(&seed);
//!
//! let alice = generate_keypair_a(&params, &mut OsRng)?;
//! let bob = generate_keypair_b(&params, &mut OsRng)?;
//!
//! // Bob encapsulates against Alice's public key with his own secret key
//! let (ss_bob, ct) = encapsulate(alice.public_key(), bob.secret_key(), &mut OsRng)?;
//!
//! // Alice decapsulates with Bob's public key
//! let ss_alice = decapsulate(bob.public_key(), alice.secret_key(), alice.confirmation(), &ct);
//! assert_eq!(ss_alice, ss_bob);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: serde support for seeds, public keys and ciphertexts
//! - `rand`: re-export `rand` with `OsRng` available
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`frodokexp-api`]: error type, `SplitKex` trait, serialization traits
//! - [`frodokexp-params`]: the numeric parameter set
//! - [`frodokexp-internal`]: constant-time and byte-order helpers
//! - [`frodokexp-kem`]: the key exchange itself

// Core re-exports (always available)
pub use frodokexp_api as api;
pub use frodokexp_internal as internal;
pub use frodokexp_kem as kem;
pub use frodokexp_params as params;

#[cfg(feature = "rand")]
pub use rand;

pub use frodokexp_api::{Error, Result};

/// Common imports for FrodoKEXP users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Serialize, SerializeSecret, SplitKex};

    // Re-export the scheme and its types
    pub use crate::kem::frodokexp::{
        decapsulate, encapsulate, generate_keypair, generate_keypair_a, generate_keypair_b,
        Ciphertext, ConfirmationValue, FrodoKexp1452, KeyPair, PublicKey, PublicParameters, Role,
        SecretKey, Seed, SharedSecret,
    };
}
