// kem/src/frodokexp/params.rs

//! FrodoKEXP parameter definitions.

use frodokexp_params::pqc::frodokexp as global_params;

/// Algorithm name string.
pub const NAME: &str = "FrodoKEXP-1452";

/// LWE dimension; the public matrix A is N x N.
pub const N: usize = global_params::FRODOKEXP_1452.n;
/// Secret columns per party.
pub const N_BAR: usize = global_params::FRODOKEXP_1452.n_bar;
/// Base-2 logarithm of the modulus.
pub const LOG_Q: u32 = global_params::FRODOKEXP_1452.log_q;
/// Mask reducing a 16-bit word mod q.
pub const Q_MASK: u16 = ((1u32 << LOG_Q) - 1) as u16;
/// Bits of key material per reconciled coefficient.
pub const B: u32 = global_params::FRODOKEXP_1452.extracted_bits;
/// Bits dropped by rounding; the key nibble is the top `B` of `LOG_Q` bits.
pub const SHIFT: u32 = LOG_Q - B;
/// Centered binomial width of the encapsulator's fresh error.
pub const ETA_EPHEMERAL: usize = global_params::FRODOKEXP_1452.eta_ephemeral;

/// Coefficients in an N_BAR x N matrix.
pub const WIDE_LEN: usize = N_BAR * N;
/// Coefficients in an N_BAR x N_BAR matrix.
pub const SQUARE_LEN: usize = N_BAR * N_BAR;

/// Public-parameter seed size in bytes.
pub const SEED_BYTES: usize = global_params::FRODOKEXP_1452.seed_size;
/// Noise seed size in bytes.
pub const NOISE_SEED_BYTES: usize = global_params::FRODOKEXP_NOISE_SEED_BYTES;
/// Encoded secret key size in bytes.
pub const SECRET_KEY_BYTES: usize = global_params::FRODOKEXP_1452.secret_key_size;
/// Encoded public key size in bytes.
pub const PUBLIC_KEY_BYTES: usize = global_params::FRODOKEXP_1452.public_key_size;
/// Encoded confirmation value size in bytes.
pub const CONFIRMATION_BYTES: usize = global_params::FRODOKEXP_1452.confirmation_size;
/// Ciphertext size in bytes.
pub const CIPHERTEXT_BYTES: usize = global_params::FRODOKEXP_1452.ciphertext_size;
/// Shared secret size in bytes.
pub const SHARED_SECRET_BYTES: usize = global_params::FRODOKEXP_1452.shared_secret_size;

// The ciphertext is a single u64 of hint bits.
const _: () = assert!(SQUARE_LEN == 64 && CIPHERTEXT_BYTES == 8);
// Packed key nibbles fill the shared secret hash input exactly.
const _: () = assert!(SQUARE_LEN * B as usize == 8 * SHARED_SECRET_BYTES);
// Row indices are encoded as 16 bits when expanding A.
const _: () = assert!(N <= u16::MAX as usize);
