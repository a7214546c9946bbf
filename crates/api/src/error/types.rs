//! Error type definitions for key exchange operations

use thiserror::Error;

/// Result type for key exchange operations
pub type Result<T> = core::result::Result<T, Error>;

/// Primary error type for key exchange operations
///
/// Length errors are raised before any arithmetic runs. A shared secret that
/// fails to match the peer's is not an error: reconciliation failure is a
/// probabilistic property of the scheme and is detected by the caller's own
/// key-confirmation step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A public key, secret key or confirmation value has the wrong size
    #[error("{context}: invalid key length (expected {expected}, got {actual})")]
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A ciphertext has the wrong size
    #[error("{context}: invalid ciphertext length (expected {expected}, got {actual})")]
    InvalidCiphertextLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Any other fixed-width buffer (seeds, secret byte containers) has the wrong size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The injected random source failed; fatal and not retriable
    #[error("Random source unavailable: {context}")]
    RandomSourceUnavailable { context: &'static str },
}

impl Error {
    /// True for the fatal random-source condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::RandomSourceUnavailable { .. })
    }
}
