//! Constants for the FrodoKEXP split key exchange

/// LWE dimension (the public matrix A is N x N)
pub const FRODOKEXP_N: usize = 1452;

/// Number of secret columns held by each party
pub const FRODOKEXP_N_BAR: usize = 8;

/// Base-2 logarithm of the modulus
pub const FRODOKEXP_LOG_Q: u32 = 15;

/// Bits extracted from each reconciled coefficient
pub const FRODOKEXP_EXTRACTED_BITS: u32 = 4;

/// Centered binomial width of the encapsulator's fresh error term
pub const FRODOKEXP_ETA_EPHEMERAL: usize = 2;

/// Size of the public-parameter seed
pub const FRODOKEXP_SEED_BYTES: usize = 32;

/// Size of the seed expanded into the secret/error samples
pub const FRODOKEXP_NOISE_SEED_BYTES: usize = 32;

/// Structure describing a FrodoKEXP parameter set
pub struct FrodoKexpParams {
    /// LWE dimension
    pub n: usize,

    /// Secret columns per party
    pub n_bar: usize,

    /// Base-2 logarithm of the modulus
    pub log_q: u32,

    /// Bits of key material per coefficient
    pub extracted_bits: u32,

    /// Width of the ephemeral error distribution
    pub eta_ephemeral: usize,

    /// Size of the public-parameter seed in bytes
    pub seed_size: usize,

    /// Size of a secret key in bytes
    pub secret_key_size: usize,

    /// Size of a public key in bytes
    pub public_key_size: usize,

    /// Size of a confirmation value in bytes
    pub confirmation_size: usize,

    /// Size of a ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of the shared secret in bytes
    pub shared_secret_size: usize,
}

/// FrodoKEXP-1452 parameters
pub const FRODOKEXP_1452: FrodoKexpParams = FrodoKexpParams {
    n: FRODOKEXP_N,
    n_bar: FRODOKEXP_N_BAR,
    log_q: FRODOKEXP_LOG_Q,
    extracted_bits: FRODOKEXP_EXTRACTED_BITS,
    eta_ephemeral: FRODOKEXP_ETA_EPHEMERAL,
    seed_size: FRODOKEXP_SEED_BYTES,
    // 16-bit coefficients
    secret_key_size: FRODOKEXP_N_BAR * FRODOKEXP_N * 2,
    public_key_size: FRODOKEXP_N * FRODOKEXP_N_BAR * 2,
    confirmation_size: FRODOKEXP_N_BAR * FRODOKEXP_N_BAR * 2,
    // one hint bit per coefficient of the N_BAR x N_BAR product
    ciphertext_size: FRODOKEXP_N_BAR * FRODOKEXP_N_BAR / 8,
    shared_secret_size: 32,
};
