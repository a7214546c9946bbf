//! Validation utilities for key exchange operations

use super::{Error, Result};

/// Validate the encoded size of a key or confirmation value
pub fn key(key_type: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKey {
            key_type,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate the encoded size of a ciphertext
pub fn ciphertext(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidCiphertext {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate the size of a seed or other fixed-width buffer
pub fn serialization(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Serialization {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
