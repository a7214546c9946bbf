//! Error handling for key exchange operations

use core::fmt;
use frodokexp_api::error::Error as CoreError;

/// Error type for the internal stages of the key exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key or confirmation value has the wrong encoded size
    InvalidKey {
        key_type: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A ciphertext has the wrong encoded size
    InvalidCiphertext {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A seed or other fixed-width buffer has the wrong size
    Serialization {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The injected RNG reported a failure
    Random { context: &'static str },
}

/// Result type for key exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey {
                key_type,
                expected,
                actual,
            } => write!(
                f,
                "Invalid {}: expected {} bytes, got {}",
                key_type, expected, actual
            ),
            Error::InvalidCiphertext {
                algorithm,
                expected,
                actual,
            } => write!(
                f,
                "Invalid {} ciphertext: expected {} bytes, got {}",
                algorithm, expected, actual
            ),
            Error::Serialization {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Serialization error in {}: expected {} bytes, got {}",
                context, expected, actual
            ),
            Error::Random { context } => write!(f, "Random source failed in {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKey {
                key_type,
                expected,
                actual,
            } => CoreError::InvalidKeyLength {
                context: key_type,
                expected,
                actual,
            },
            Error::InvalidCiphertext {
                algorithm,
                expected,
                actual,
            } => CoreError::InvalidCiphertextLength {
                context: algorithm,
                expected,
                actual,
            },
            Error::Serialization {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Random { context } => CoreError::RandomSourceUnavailable { context },
        }
    }
}

// Include validation submodule
pub mod validate;
